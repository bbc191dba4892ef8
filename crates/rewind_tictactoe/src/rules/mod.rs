//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. They know nothing about history
//! or whose turn it is, which keeps them usable on any snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, detect};
