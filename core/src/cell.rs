use serde::{Deserialize, Serialize};

use crate::TileId;

/// Content of a single board cell: a numbered tile or the empty slot.
///
/// Serializes as `integer | null` so a persisted board reads as a plain
/// 16-element array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<TileId>", into = "Option<TileId>")]
pub enum Cell {
    Tile(TileId),
    Empty,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn tile(self) -> Option<TileId> {
        match self {
            Self::Tile(id) => Some(id),
            Self::Empty => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Option<TileId>> for Cell {
    fn from(tile: Option<TileId>) -> Self {
        match tile {
            Some(id) => Self::Tile(id),
            None => Self::Empty,
        }
    }
}

impl From<Cell> for Option<TileId> {
    fn from(cell: Cell) -> Self {
        cell.tile()
    }
}
