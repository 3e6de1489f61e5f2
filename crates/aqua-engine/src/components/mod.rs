pub mod image;
pub mod kind;
pub mod sprite;
