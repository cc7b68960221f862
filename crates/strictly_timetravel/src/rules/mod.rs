//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board); nothing here knows about
//! history or whose turn it is.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, detect_winner};
