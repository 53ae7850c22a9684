pub mod control;
pub mod particles;
pub mod render;
pub mod rng;
