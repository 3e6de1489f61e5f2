pub mod rng;
pub mod tank;
pub mod time;
