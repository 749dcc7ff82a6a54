use thiserror::Error;

use crate::game::state::Outcome;
use crate::tile::{Pip, Tile};

/// Rule violations reported back to the player. None of them change state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move: {tile} matches neither open end ({head} or {tail})")]
    InvalidMove { tile: Tile, head: Pip, tail: Pip },
    #[error("No tiles left to draw")]
    NoTilesLeft,
    #[error("The game is over: {0}")]
    GameOver(Outcome),
}
