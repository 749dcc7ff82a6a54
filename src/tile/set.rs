use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rng::Shuffler;
use crate::tile::types::{Tile, MAX_PIP};

/// Tiles in a double-six set
pub const SET_SIZE: usize = 28;

/// Tiles dealt to each player
pub const HAND_SIZE: usize = 7;

/// Tiles left in the draw pile after dealing
pub const DRAW_PILE_SIZE: usize = SET_SIZE - 2 * HAND_SIZE;

/// Build the full double-six set in lexicographic (low, high) order
pub fn create_tile_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(SET_SIZE);
    for low in 0..=MAX_PIP {
        for high in low..=MAX_PIP {
            tiles.push(Tile::new(low, high));
        }
    }
    tiles
}

/// Result of dealing a set: two opening hands and the draw pile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub player_one: Vec<Tile>,
    pub player_two: Vec<Tile>,
    pub draw_pile: Vec<Tile>,
}

/// Shuffle `tile_set` and split it into hands of [`HAND_SIZE`] plus the rest.
///
/// Panics if the set does not hold exactly [`SET_SIZE`] tiles.
pub fn distribute<S: Shuffler + ?Sized>(mut tile_set: Vec<Tile>, shuffler: &mut S) -> Deal {
    assert_eq!(
        tile_set.len(),
        SET_SIZE,
        "a deal needs the full {SET_SIZE}-tile set"
    );
    shuffler.shuffle_tiles(&mut tile_set);

    let draw_pile = tile_set.split_off(2 * HAND_SIZE);
    let player_two = tile_set.split_off(HAND_SIZE);
    let player_one = tile_set;

    debug!(
        hand_one = ?player_one,
        hand_two = ?player_two,
        pile = draw_pile.len(),
        "dealt tiles"
    );

    Deal {
        player_one,
        player_two,
        draw_pile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GameRng, NoShuffle};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_tile_set_has_every_pair_once() {
        let set = create_tile_set();
        assert_eq!(set.len(), SET_SIZE);

        let unique: HashSet<_> = set.iter().copied().collect();
        assert_eq!(unique.len(), SET_SIZE, "tile set should have no duplicates");

        for low in 0..=MAX_PIP {
            for high in low..=MAX_PIP {
                assert!(unique.contains(&Tile::new(low, high)), "missing ({low},{high})");
            }
        }
    }

    #[test]
    fn test_tile_set_is_sorted() {
        let set = create_tile_set();
        let mut sorted = set.clone();
        sorted.sort();
        assert_eq!(set, sorted);
        assert_eq!(set.first(), Some(&Tile::new(0, 0)));
        assert_eq!(set.last(), Some(&Tile::new(6, 6)));
    }

    #[test]
    fn test_tile_set_has_seven_doubles() {
        let doubles = create_tile_set().iter().filter(|t| t.is_double()).count();
        assert_eq!(doubles, 7);
    }

    #[test]
    fn test_distribute_without_shuffle_splits_in_order() {
        let set = create_tile_set();
        let deal = distribute(set.clone(), &mut NoShuffle);
        assert_eq!(deal.player_one, set[..7]);
        assert_eq!(deal.player_two, set[7..14]);
        assert_eq!(deal.draw_pile, set[14..]);
    }

    #[test]
    fn test_distribute_same_seed_same_deal() {
        let a = distribute(create_tile_set(), &mut GameRng::new(Some(2024)));
        let b = distribute(create_tile_set(), &mut GameRng::new(Some(2024)));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "full 28-tile set")]
    fn test_distribute_rejects_partial_set() {
        let mut set = create_tile_set();
        set.pop();
        distribute(set, &mut NoShuffle);
    }

    proptest! {
        #[test]
        fn prop_distribute_partitions_set(seed in any::<u64>()) {
            let deal = distribute(create_tile_set(), &mut GameRng::new(Some(seed)));
            prop_assert_eq!(deal.player_one.len(), HAND_SIZE);
            prop_assert_eq!(deal.player_two.len(), HAND_SIZE);
            prop_assert_eq!(deal.draw_pile.len(), DRAW_PILE_SIZE);

            let mut all: Vec<Tile> = deal
                .player_one
                .iter()
                .chain(&deal.player_two)
                .chain(&deal.draw_pile)
                .copied()
                .collect();
            all.sort();
            prop_assert_eq!(all, create_tile_set());
        }
    }
}
