pub mod canvas;
pub mod input;
pub mod renderer;
pub mod sound;
