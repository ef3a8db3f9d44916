use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::*;

/// Persisted form of a game, shaped for an external JSON key-value store:
///
/// ```json
/// { "tiles": [1, 2, null, ...], "emptyIndex": 2, "moveCount": 7,
///   "hasShuffled": true, "lastShuffleDate": "2024-06-01" }
/// ```
///
/// Everything in here is untrusted until [`SavedGame::restore`] accepts it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub tiles: [Option<TileId>; CELL_COUNT],
    pub empty_index: CellIndex,
    pub move_count: u32,
    pub has_shuffled: bool,
    pub last_shuffle_date: Option<NaiveDate>,
}

impl SavedGame {
    /// Snapshots the live state. Taken after every accepted slide and after
    /// every shuffle or new-game action.
    pub fn capture(engine: &SlideEngine, gate: &ShuffleGate) -> Self {
        let mut tiles = [None; CELL_COUNT];
        for (slot, cell) in tiles.iter_mut().zip(engine.board().cells()) {
            *slot = cell.tile();
        }
        Self {
            tiles,
            empty_index: engine.board().empty_index(),
            move_count: engine.move_count(),
            has_shuffled: gate.consumed(),
            last_shuffle_date: gate.date(),
        }
    }

    /// Validates the snapshot and rebuilds the live state. Any inconsistency
    /// is an error; callers treat it the same as a missing snapshot and start
    /// a fresh game.
    pub fn restore(self) -> Result<(SlideEngine, ShuffleGate)> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, tile) in cells.iter_mut().zip(self.tiles) {
            *cell = Cell::from(tile);
        }
        let board = Board::from_cells(cells)?;
        if board.empty_index() != self.empty_index {
            return Err(GameError::EmptyIndexMismatch);
        }

        let engine = SlideEngine::from_parts(board, self.move_count);
        let gate = ShuffleGate::from_parts(self.has_shuffled, self.last_shuffle_date);
        Ok((engine, gate))
    }
}
