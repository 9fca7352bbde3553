pub mod buffer;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod input;
pub mod render;
pub mod sprites;
