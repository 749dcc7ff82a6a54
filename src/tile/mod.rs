pub mod artwork;
pub mod set;
pub mod types;

pub use artwork::{ArtworkError, ArtworkIndex};
pub use set::{create_tile_set, distribute, Deal, DRAW_PILE_SIZE, HAND_SIZE, SET_SIZE};
pub use types::{Pip, PlacedTile, Tile, TileError, MAX_PIP};
