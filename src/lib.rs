pub mod cli;
pub mod game;
pub mod rng;
pub mod simulation;
pub mod tile;
