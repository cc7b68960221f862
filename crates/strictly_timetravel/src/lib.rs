//! Strictly Time Travel - tic-tac-toe with a navigable move history.
//!
//! The crate is a framework-free state machine. A presentation layer drives
//! it with two calls and reads everything else back:
//!
//! - [`GameState::apply_move`] when a cell is clicked,
//! - [`GameState::jump_to`] when a past step is chosen from the
//!   [`move_list`](GameState::move_list).
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::GameState;
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 7, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.jump_to(2);
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
mod moves;
mod position;
mod snapshot;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{InvalidMoveError, Move, MoveRejection};
pub use game::GameState;
pub use history::History;
pub use moves::{MoveEntry, MoveList};
pub use position::{Coords, Position};
pub use rules::detect_winner;
pub use snapshot::BoardSnapshot;
pub use status::{Outcome, Status};
pub use types::{BOARD_SIDE, Board, CELL_COUNT, Cell, Mark};
