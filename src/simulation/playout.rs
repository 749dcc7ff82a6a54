use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::game::{GameError, GameState, Outcome, PlayReport, PlayerId};
use crate::rng::GameRng;

/// Hard stop for a single playout
pub const MAX_TURNS: u32 = 200;

/// Result of a single self-play game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub seed: u64,
    /// None if the turn cap was hit first
    pub outcome: Option<Outcome>,
    pub turns: u32,
    pub plays: u32,
    pub draws: u32,
    /// The game locked up without a play to trigger the end check; it was
    /// settled explicitly as a draw
    pub blocked: bool,
}

#[derive(Default)]
struct Counters {
    plays: u32,
    draws: u32,
}

/// Play one turn for the active player with a fixed policy: play the first
/// playable tile, drawing until one turns up or the pile runs out.
fn take_turn(state: &mut GameState, counters: &mut Counters, verbose: bool) {
    let player = state.active_player();
    loop {
        if let Some(&index) = state.playable_indices(player).first() {
            let result = state.play_tile(index);
            record_play(player, result, counters, verbose);
            return;
        }

        match state.draw_tile() {
            Ok(tile) => {
                counters.draws += 1;
                if verbose {
                    println!("[{}] draws {} ({} left)", player, tile, state.draw_pile_size());
                }
            }
            Err(_) => {
                if verbose {
                    println!("[{}] cannot play or draw, passing", player);
                }
                return;
            }
        }
    }
}

/// Count a play the policy chose. The index was vetted beforehand, so an
/// error here is an engine fault rather than a pass.
fn record_play(
    player: PlayerId,
    result: Result<PlayReport, GameError>,
    counters: &mut Counters,
    verbose: bool,
) {
    match result {
        Ok(report) => {
            counters.plays += 1;
            if verbose {
                println!(
                    "[{}] plays {} on the {:?} (open pip {})",
                    player, report.tile, report.placement.end, report.placement.open_pip
                );
            }
        }
        Err(err) => warn!(%player, "engine refused a vetted play: {err}"),
    }
}

/// Deal a game from `seed` and drive both seats until it ends
pub fn run_game(seed: u64, verbose: bool) -> GameResult {
    let mut rng = GameRng::new(Some(seed));
    let mut state = GameState::deal(&mut rng);
    let mut counters = Counters::default();
    let mut turns = 0;
    let mut blocked = false;

    if verbose {
        println!("=== Game seed {} ===", seed);
    }

    while turns < MAX_TURNS && !state.is_over() {
        if state.is_blocked() {
            blocked = true;
            state.check_terminal();
            break;
        }

        turns += 1;
        take_turn(&mut state, &mut counters, verbose);

        if state.is_over() || state.end_turn().is_err() {
            break;
        }
    }

    if verbose {
        match state.outcome() {
            Some(outcome) => println!("Game over after {} turns: {}", turns, outcome),
            None => println!("No result after {} turns", turns),
        }
    }

    GameResult {
        seed,
        outcome: state.outcome(),
        turns,
        plays: counters.plays,
        draws: counters.draws,
        blocked,
    }
}
