//! Win detection.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Winning lines as index triples, in the order they are searched.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark filling the first complete line, if any.
///
/// Lines are checked in [`LINES`] order and the first match wins, even on
/// boards where more than one line is complete. An empty line never matches.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        marks.iter().fold(Board::new(), |board, &(index, mark)| {
            board.with_cell(index, Cell::Occupied(mark))
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_alone() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(&line.map(|i| (i, mark)));
                assert_eq!(detect_winner(&board), Some(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_incomplete_line_does_not_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / X O O / O X X
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        let board = board_with(&[
            (3, Mark::X),
            (4, Mark::X),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::O),
            (8, Mark::O),
        ]);
        // Middle row is searched before the bottom row.
        assert_eq!(detect_winner(&board), Some(Mark::X));
    }
}
