pub mod assets;
pub mod blinker;
pub mod projectile;
pub mod scene;
pub mod scheduler;
pub mod sprite;
pub mod unit;
