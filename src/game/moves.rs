use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::error::GameError;
use crate::game::state::{GameState, Outcome, PlayerId};
use crate::game::zones::{Chain, Placement};
use crate::tile::Tile;

/// A tile may be played if the table is empty or either of its pips matches
/// either open end.
pub fn is_valid_play(tile: Tile, chain: &Chain) -> bool {
    chain.accepts(tile)
}

/// What happened on a successful play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayReport {
    pub player: PlayerId,
    pub tile: Tile,
    pub placement: Placement,
    /// Set if the play ended the game
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Play the tile at `hand_index` of the active hand onto the chain.
    ///
    /// Panics if `hand_index` is out of range: the caller owns the hand view
    /// and must only pass positions it shows.
    pub fn play_tile(&mut self, hand_index: usize) -> Result<PlayReport, GameError> {
        self.ensure_running()?;
        let player = self.active;
        let hand_size = self.hand(player).len();
        let Some(tile) = self.hand(player).get(hand_index).copied() else {
            panic!("hand index {hand_index} out of range for {player} holding {hand_size} tiles");
        };

        let placement = match self.chain.place(tile) {
            Ok(placement) => placement,
            Err(err) => {
                debug!(%player, %tile, "rejected play: {err}");
                return Err(err);
            }
        };

        self.hand_mut(player).remove_tile(hand_index);
        debug!(
            %player,
            %tile,
            end = ?placement.end,
            open_pip = placement.open_pip,
            "played tile"
        );

        let outcome = self.check_terminal();
        Ok(PlayReport {
            player,
            tile,
            placement,
            outcome,
        })
    }

    /// Positions in `player`'s hand that could be played right now
    pub fn playable_indices(&self, player: PlayerId) -> Vec<usize> {
        self.hand(player)
            .iter()
            .enumerate()
            .filter(|(_, tile)| is_valid_play(**tile, &self.chain))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_playable_tile(&self, player: PlayerId) -> bool {
        self.hand(player)
            .iter()
            .any(|tile| is_valid_play(*tile, &self.chain))
    }
}
