use tracing::{debug, info};

use crate::game::error::GameError;
use crate::game::state::{GameState, Outcome, PlayerId};

impl GameState {
    /// Pass play to the other player.
    ///
    /// Turn passing is manual: nothing checks whether the outgoing player
    /// played, drew, or could have moved.
    pub fn end_turn(&mut self) -> Result<PlayerId, GameError> {
        self.ensure_running()?;
        self.active = self.active.other();
        debug!(next = %self.active, "turn ended");
        Ok(self.active)
    }

    /// Neither hand has a playable tile and nothing is left to draw
    pub fn is_blocked(&self) -> bool {
        self.draw_pile.is_empty()
            && !self.has_playable_tile(PlayerId::One)
            && !self.has_playable_tile(PlayerId::Two)
    }

    /// Settle the game if it has reached an end. Called after every play.
    ///
    /// The active player wins on an empty hand; otherwise the game is drawn
    /// when it is blocked. Once settled the outcome never changes.
    pub fn check_terminal(&mut self) -> Option<Outcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        let outcome = if self.hand(self.active).is_empty() {
            Outcome::Win(self.active)
        } else if self.is_blocked() {
            Outcome::Draw
        } else {
            return None;
        };

        info!(%outcome, chain = self.chain.len(), "game over");
        self.outcome = Some(outcome);
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Phase;
    use crate::game::zones::Chain;
    use crate::tile::Tile;

    #[test]
    fn test_end_turn_toggles() {
        let mut state = GameState::from_layout(
            vec![Tile::new(1, 1)],
            vec![Tile::new(2, 2)],
            Chain::new(),
            vec![Tile::new(3, 3)],
        );
        assert_eq!(state.end_turn(), Ok(PlayerId::Two));
        assert_eq!(state.active_hand(), &[Tile::new(2, 2)]);
        assert_eq!(state.end_turn(), Ok(PlayerId::One));
    }

    #[test]
    fn test_end_turn_does_not_require_a_move() {
        let mut state = GameState::from_layout(
            vec![Tile::new(1, 1)],
            vec![Tile::new(2, 2)],
            Chain::new(),
            vec![Tile::new(3, 3)],
        );
        // Player 1 could play but passes anyway
        assert!(state.has_playable_tile(PlayerId::One));
        assert_eq!(state.end_turn(), Ok(PlayerId::Two));
    }

    #[test]
    fn test_last_tile_wins() {
        let chain = Chain::from_tiles([Tile::new(1, 4)]);
        let mut state = GameState::from_layout(
            vec![Tile::new(4, 6)],
            vec![Tile::new(0, 0), Tile::new(2, 3)],
            chain,
            vec![Tile::new(5, 5)],
        );

        let report = state.play_tile(0).unwrap();
        assert_eq!(report.outcome, Some(Outcome::Win(PlayerId::One)));
        assert_eq!(state.phase(), Phase::GameOver(Outcome::Win(PlayerId::One)));
        assert_eq!(state.check_terminal(), Some(Outcome::Win(PlayerId::One)));
    }

    #[test]
    fn test_second_player_can_win() {
        let mut state = GameState::from_layout(
            vec![Tile::new(0, 1)],
            vec![Tile::new(3, 6)],
            Chain::new(),
            vec![],
        );
        state.end_turn().unwrap();
        let report = state.play_tile(0).unwrap();
        assert_eq!(report.outcome, Some(Outcome::Win(PlayerId::Two)));
    }

    #[test]
    fn test_blocked_with_empty_pile_is_draw() {
        let chain = Chain::from_tiles([Tile::new(0, 0)]);
        let mut state = GameState::from_layout(
            vec![Tile::new(1, 2), Tile::new(3, 4)],
            vec![Tile::new(5, 6), Tile::new(1, 1)],
            chain,
            vec![],
        );
        assert!(state.is_blocked());
        assert_eq!(state.check_terminal(), Some(Outcome::Draw));
        assert!(state.is_over());
    }

    #[test]
    fn test_blocked_after_play_is_draw() {
        let chain = Chain::from_tiles([Tile::new(1, 2)]);
        let mut state = GameState::from_layout(
            vec![Tile::new(0, 2), Tile::new(5, 6)],
            vec![Tile::new(3, 4)],
            chain,
            vec![],
        );
        // Chain becomes [1|2][2|0]; nobody holds a 0 or a 1
        let report = state.play_tile(0).unwrap();
        assert_eq!(report.outcome, Some(Outcome::Draw));
    }

    #[test]
    fn test_stuck_with_tiles_in_pile_is_not_terminal() {
        let chain = Chain::from_tiles([Tile::new(0, 0)]);
        let mut state = GameState::from_layout(
            vec![Tile::new(1, 2)],
            vec![Tile::new(3, 4)],
            chain,
            vec![Tile::new(5, 6)],
        );
        assert!(!state.is_blocked());
        assert_eq!(state.check_terminal(), None);
    }

    #[test]
    fn test_commands_rejected_after_game_over() {
        let mut state = GameState::from_layout(
            vec![Tile::new(2, 2)],
            vec![Tile::new(4, 4)],
            Chain::new(),
            vec![Tile::new(1, 1)],
        );
        state.play_tile(0).unwrap();
        let over = GameError::GameOver(Outcome::Win(PlayerId::One));

        assert_eq!(state.draw_tile(), Err(over));
        assert_eq!(state.end_turn(), Err(over));
        assert_eq!(state.play_tile(0), Err(over));
        assert_eq!(state.draw_pile_size(), 1);
        assert_eq!(state.active_player(), PlayerId::One);
    }
}
