//! Core domain types for the board.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells along one side of the board.
pub const BOARD_SIDE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (always moves first).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the mark that moves at the given history step.
    ///
    /// X moves whenever the step is even, so the mark placed to produce
    /// step `i` is X iff `i` is odd.
    pub fn to_move_at(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell claimed by a mark.
    Occupied(Mark),
}

/// 3x3 board, cells in row-major order (index = row * 3 + col).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns a copy of this board with `index` set to `cell`.
    ///
    /// Callers validate `index`; snapshots are the only producers of new boards.
    pub(crate) fn with_cell(&self, index: usize, cell: Cell) -> Self {
        let mut cells = self.cells;
        cells[index] = cell;
        Self { cells }
    }

    /// Formats the board as text, empty cells shown by their 1-based number.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                let index = row * BOARD_SIDE + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < BOARD_SIDE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIDE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
