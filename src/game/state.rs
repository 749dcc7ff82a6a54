use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::game::error::GameError;
use crate::game::zones::{Chain, DrawPile, Hand};
use crate::rng::Shuffler;
use crate::tile::{create_tile_set, distribute, Deal, Pip, PlacedTile, Tile};

/// One of the two seats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1 or 2, as shown to players
    pub fn number(&self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(PlayerId),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Turn(PlayerId),
    GameOver(Outcome),
}

/// Complete state of one game session.
///
/// All mutation goes through [`GameState::play_tile`],
/// [`GameState::draw_tile`] and [`GameState::end_turn`]; everything else is a
/// read-only view.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) hands: [Hand; 2],
    pub(crate) chain: Chain,
    pub(crate) draw_pile: DrawPile,
    pub(crate) active: PlayerId,
    pub(crate) outcome: Option<Outcome>,
}

impl GameState {
    /// Start a game from an already dealt set. Player 1 moves first.
    pub fn new(deal: Deal) -> Self {
        GameState {
            hands: [
                Hand::from_tiles(deal.player_one),
                Hand::from_tiles(deal.player_two),
            ],
            chain: Chain::new(),
            draw_pile: DrawPile::from_tiles(deal.draw_pile),
            active: PlayerId::One,
            outcome: None,
        }
    }

    /// Generate a fresh set, deal it with `shuffler` and start the game
    pub fn deal<S: Shuffler + ?Sized>(shuffler: &mut S) -> Self {
        GameState::new(distribute(create_tile_set(), shuffler))
    }

    /// Start from an arbitrary mid-game position, Player 1 to move.
    ///
    /// No check is made that the tiles form a valid set.
    pub fn from_layout(
        player_one: Vec<Tile>,
        player_two: Vec<Tile>,
        chain: Chain,
        draw_pile: Vec<Tile>,
    ) -> Self {
        GameState {
            hands: [Hand::from_tiles(player_one), Hand::from_tiles(player_two)],
            chain,
            draw_pile: DrawPile::from_tiles(draw_pile),
            active: PlayerId::One,
            outcome: None,
        }
    }

    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(outcome) => Phase::GameOver(outcome),
            None => Phase::Turn(self.active),
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn hand(&self, player: PlayerId) -> &[Tile] {
        self.hands[player.index()].tiles()
    }

    pub fn active_hand(&self) -> &[Tile] {
        self.hand(self.active)
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn draw_pile_size(&self) -> usize {
        self.draw_pile.size()
    }

    pub(crate) fn hand_mut(&mut self, player: PlayerId) -> &mut Hand {
        &mut self.hands[player.index()]
    }

    pub(crate) fn ensure_running(&self) -> Result<(), GameError> {
        match self.outcome {
            Some(outcome) => Err(GameError::GameOver(outcome)),
            None => Ok(()),
        }
    }

    /// Move the front tile of the draw pile into the active hand
    pub fn draw_tile(&mut self) -> Result<Tile, GameError> {
        self.ensure_running()?;
        let Some(tile) = self.draw_pile.draw() else {
            debug!(player = %self.active, "draw attempted on empty pile");
            return Err(GameError::NoTilesLeft);
        };
        let player = self.active;
        self.hand_mut(player).add_tile(tile);
        debug!(%player, %tile, remaining = self.draw_pile.size(), "drew tile");
        Ok(tile)
    }

    /// Snapshot of everything a presenter needs to draw the table
    pub fn view(&self) -> GameView {
        let open_ends = self.chain.open_ends();
        GameView {
            phase: self.phase(),
            active_player: self.active,
            player_one_hand: self.hand(PlayerId::One).to_vec(),
            player_two_hand: self.hand(PlayerId::Two).to_vec(),
            chain: self.chain.to_vec(),
            head_pip: open_ends.map(|(head, _)| head),
            tail_pip: open_ends.map(|(_, tail)| tail),
            draw_pile: self.draw_pile.size(),
        }
    }
}

/// Serializable read-only snapshot of a [`GameState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub phase: Phase,
    pub active_player: PlayerId,
    pub player_one_hand: Vec<Tile>,
    pub player_two_hand: Vec<Tile>,
    pub chain: Vec<PlacedTile>,
    pub head_pip: Option<Pip>,
    pub tail_pip: Option<Pip>,
    pub draw_pile: usize,
}
