pub mod motion;
pub mod reconcile;
pub mod spawn;
