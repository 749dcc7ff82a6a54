use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::game::error::GameError;
use crate::tile::{Pip, PlacedTile, Tile};

/// Hand - tiles held by one player, in the order they were received
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Hand { tiles }
    }

    pub fn add_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn remove_tile(&mut self, index: usize) -> Option<Tile> {
        if index < self.tiles.len() {
            Some(self.tiles.remove(index))
        } else {
            None
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

/// Draw pile - undealt tiles, drawn from the front
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawPile {
    tiles: Vec<Tile>,
}

impl DrawPile {
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        DrawPile { tiles }
    }

    pub fn draw(&mut self) -> Option<Tile> {
        if self.tiles.is_empty() {
            None
        } else {
            Some(self.tiles.remove(0))
        }
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Which end of the chain a tile went on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum End {
    Head,
    Tail,
}

/// Where and how a tile was laid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub end: End,
    pub placed: PlacedTile,
    /// Pip now exposed at `end`
    pub open_pip: Pip,
}

/// The line of tiles on the table.
///
/// Tiles are stored head first and already oriented, so for neighbours
/// `a, b` the invariant `a.right == b.left` holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    tiles: VecDeque<PlacedTile>,
}

impl Chain {
    pub fn new() -> Self {
        Chain {
            tiles: VecDeque::new(),
        }
    }

    /// Lay `tiles` one after another with the normal placement rule.
    ///
    /// Panics if any of them does not fit; meant for building fixed layouts.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut chain = Chain::new();
        for tile in tiles {
            if let Err(err) = chain.place(tile) {
                panic!("cannot build layout: {err}");
            }
        }
        chain
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn head_pip(&self) -> Option<Pip> {
        self.tiles.front().map(|p| p.left)
    }

    pub fn tail_pip(&self) -> Option<Pip> {
        self.tiles.back().map(|p| p.right)
    }

    /// Open ends as (head, tail), or None for an empty table
    pub fn open_ends(&self) -> Option<(Pip, Pip)> {
        Some((self.head_pip()?, self.tail_pip()?))
    }

    /// True if `tile` could be laid on either end
    pub fn accepts(&self, tile: Tile) -> bool {
        match self.open_ends() {
            None => true,
            Some((head, tail)) => tile.has_pip(tail) || tile.has_pip(head),
        }
    }

    /// Lay `tile`, tail end first. Leaves the chain alone if it matches
    /// neither end.
    pub fn place(&mut self, tile: Tile) -> Result<Placement, GameError> {
        let Some((head, tail)) = self.open_ends() else {
            let placed = PlacedTile {
                tile,
                left: tile.low(),
                right: tile.high(),
            };
            self.tiles.push_back(placed);
            return Ok(Placement {
                end: End::Tail,
                placed,
                open_pip: placed.right,
            });
        };

        if let Some(placed) = PlacedTile::joined_on_left(tile, tail) {
            self.tiles.push_back(placed);
            return Ok(Placement {
                end: End::Tail,
                placed,
                open_pip: placed.right,
            });
        }

        let placed = PlacedTile::joined_on_right(tile, head)
            .ok_or(GameError::InvalidMove { tile, head, tail })?;
        self.tiles.push_front(placed);
        Ok(Placement {
            end: End::Head,
            placed,
            open_pip: placed.left,
        })
    }

    /// Iterate head to tail
    pub fn iter(&self) -> impl Iterator<Item = &PlacedTile> {
        self.tiles.iter()
    }

    pub fn to_vec(&self) -> Vec<PlacedTile> {
        self.tiles.iter().copied().collect()
    }

    /// Canonical identities of the laid tiles, head to tail
    pub fn tiles(&self) -> Vec<Tile> {
        self.tiles.iter().map(|p| p.tile).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_pile_draws_from_front() {
        let mut pile = DrawPile::from_tiles(vec![Tile::new(1, 1), Tile::new(2, 3)]);
        assert_eq!(pile.draw(), Some(Tile::new(1, 1)));
        assert_eq!(pile.draw(), Some(Tile::new(2, 3)));
        assert_eq!(pile.draw(), None);
        assert!(pile.is_empty());
    }

    #[test]
    fn test_hand_remove_out_of_range() {
        let mut hand = Hand::from_tiles(vec![Tile::new(0, 4)]);
        assert_eq!(hand.remove_tile(1), None);
        assert_eq!(hand.remove_tile(0), Some(Tile::new(0, 4)));
        assert!(hand.tiles().is_empty());
    }

    #[test]
    fn test_first_tile_laid_low_to_high() {
        let mut chain = Chain::new();
        let placement = chain.place(Tile::new(5, 2)).unwrap();
        assert_eq!(placement.end, End::Tail);
        assert_eq!(chain.open_ends(), Some((2, 5)));
    }

    #[test]
    fn test_tail_match_flips_tile() {
        let mut chain = Chain::from_tiles([Tile::new(2, 5)]);
        let placement = chain.place(Tile::new(1, 5)).unwrap();
        assert_eq!(placement.end, End::Tail);
        assert_eq!((placement.placed.left, placement.placed.right), (5, 1));
        assert_eq!(chain.tail_pip(), Some(1));
        assert_eq!(chain.head_pip(), Some(2));
    }

    #[test]
    fn test_head_match_prepends() {
        let mut chain = Chain::from_tiles([Tile::new(2, 5)]);
        let placement = chain.place(Tile::new(2, 6)).unwrap();
        assert_eq!(placement.end, End::Head);
        assert_eq!(placement.open_pip, 6);
        assert_eq!(chain.tiles(), vec![Tile::new(2, 6), Tile::new(2, 5)]);
        assert_eq!(chain.open_ends(), Some((6, 5)));
    }

    #[test]
    fn test_tail_wins_tie() {
        // (2,5) matches the head on 2 and the tail on 5
        let mut chain = Chain::from_tiles([Tile::new(2, 3), Tile::new(3, 5)]);
        let placement = chain.place(Tile::new(2, 5)).unwrap();
        assert_eq!(placement.end, End::Tail);
        assert_eq!(placement.open_pip, 2);
    }

    #[test]
    fn test_non_matching_tile_rejected() {
        let mut chain = Chain::from_tiles([Tile::new(3, 4)]);
        assert!(!chain.accepts(Tile::new(1, 2)));
        assert_eq!(
            chain.place(Tile::new(1, 2)),
            Err(GameError::InvalidMove {
                tile: Tile::new(1, 2),
                head: 3,
                tail: 4
            })
        );
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_neighbours_share_join_pip() {
        let chain = Chain::from_tiles([
            Tile::new(3, 3),
            Tile::new(3, 6),
            Tile::new(1, 3),
            Tile::new(6, 6),
            Tile::new(0, 1),
        ]);
        let placed = chain.to_vec();
        for pair in placed.windows(2) {
            assert_eq!(pair[0].right, pair[1].left);
        }
    }

    #[test]
    fn test_empty_chain_accepts_everything() {
        let chain = Chain::new();
        for tile in crate::tile::create_tile_set() {
            assert!(chain.accepts(tile));
        }
    }
}
