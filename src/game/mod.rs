pub mod error;
pub mod moves;
pub mod state;
pub mod turns;
pub mod zones;

pub use error::GameError;
pub use moves::{is_valid_play, PlayReport};
pub use state::{GameState, GameView, Outcome, Phase, PlayerId};
pub use zones::{Chain, DrawPile, End, Hand, Placement};
