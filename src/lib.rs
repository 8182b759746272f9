pub mod assets;
pub mod clock;
pub mod collide;
pub mod display;
pub mod frames;
pub mod input;
pub mod physics;
pub mod scheduler;
pub mod tasks;
pub mod world;
