pub mod board;
pub mod definitions;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod utils;
