pub mod playout;
pub mod stats;

pub use playout::{run_game, GameResult, MAX_TURNS};
pub use stats::{aggregate_results, SimulationStats};
