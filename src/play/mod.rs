pub mod game;
pub use game::*;

pub mod strategy;
pub use strategy::*;
