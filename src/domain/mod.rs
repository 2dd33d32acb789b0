pub mod frame;
pub mod rng;
