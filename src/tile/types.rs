use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of spots on one half of a tile
pub type Pip = u8;

/// Highest pip value in a double-six set
pub const MAX_PIP: Pip = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    #[error("pip value {0} is above {}", MAX_PIP)]
    PipOutOfRange(Pip),
    #[error("placed as [{left}|{right}] but the tile is {tile}")]
    Orientation { tile: Tile, left: Pip, right: Pip },
}

/// Wire form of a tile, checked on the way in
#[derive(Deserialize)]
struct RawTile {
    low: Pip,
    high: Pip,
}

/// A domino tile in canonical form: `low <= high`.
///
/// Tiles are unordered pairs, so `Tile::new(5, 2)` and `Tile::new(2, 5)` are
/// the same tile. Deserializing normalises the pair the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTile")]
pub struct Tile {
    low: Pip,
    high: Pip,
}

impl Tile {
    /// Panics if either pip is above [`MAX_PIP`].
    pub fn new(a: Pip, b: Pip) -> Self {
        assert!(
            a <= MAX_PIP && b <= MAX_PIP,
            "pip values must be in 0..={MAX_PIP}, got ({a}, {b})"
        );
        Tile {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> Pip {
        self.low
    }

    pub fn high(&self) -> Pip {
        self.high
    }

    pub fn is_double(&self) -> bool {
        self.low == self.high
    }

    pub fn has_pip(&self, pip: Pip) -> bool {
        self.low == pip || self.high == pip
    }

    /// The pip on the half opposite `pip`, if the tile carries `pip` at all
    pub fn other_end(&self, pip: Pip) -> Option<Pip> {
        if self.low == pip {
            Some(self.high)
        } else if self.high == pip {
            Some(self.low)
        } else {
            None
        }
    }

    /// File name of this tile's artwork, keyed by canonical identity
    pub fn artwork_name(&self) -> String {
        format!("{}-{}.png", self.low, self.high)
    }
}

impl TryFrom<RawTile> for Tile {
    type Error = TileError;

    fn try_from(raw: RawTile) -> Result<Self, Self::Error> {
        if let Some(pip) = [raw.low, raw.high].into_iter().find(|p| *p > MAX_PIP) {
            return Err(TileError::PipOutOfRange(pip));
        }
        Ok(Tile::new(raw.low, raw.high))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.low, self.high)
    }
}

#[derive(Deserialize)]
struct RawPlacedTile {
    tile: Tile,
    left: Pip,
    right: Pip,
}

/// A tile as laid on the table, with the side each pip faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlacedTile")]
pub struct PlacedTile {
    pub tile: Tile,
    pub left: Pip,
    pub right: Pip,
}

impl PlacedTile {
    /// Orient `tile` so `join` faces `left`. `None` if the tile lacks `join`.
    pub fn joined_on_left(tile: Tile, join: Pip) -> Option<Self> {
        tile.other_end(join).map(|right| PlacedTile {
            tile,
            left: join,
            right,
        })
    }

    /// Orient `tile` so `join` faces `right`. `None` if the tile lacks `join`.
    pub fn joined_on_right(tile: Tile, join: Pip) -> Option<Self> {
        tile.other_end(join).map(|left| PlacedTile {
            tile,
            left,
            right: join,
        })
    }
}

impl TryFrom<RawPlacedTile> for PlacedTile {
    type Error = TileError;

    fn try_from(raw: RawPlacedTile) -> Result<Self, Self::Error> {
        match PlacedTile::joined_on_left(raw.tile, raw.left) {
            Some(placed) if placed.right == raw.right => Ok(placed),
            _ => Err(TileError::Orientation {
                tile: raw.tile,
                left: raw.left,
                right: raw.right,
            }),
        }
    }
}

impl fmt::Display for PlacedTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}
