//! Core data structures for the Quadrille Sudoku engine.
//!
//! This crate provides the fundamental types shared by the solver and
//! generator crates:
//!
//! - [`board`]: the 9x9 value grid ([`Board`], [`Grid`]) with bounds- and
//!   range-checked access
//! - [`digit_set`]: a 9-bit presence mask over the digits 1-9 ([`DigitSet`])
//! - [`position`]: board coordinates ([`Position`])
//!
//! The board stores plain cell values and enforces per-cell range only.
//! Global Sudoku legality (no duplicate digit in a row, column, or box) is an
//! invariant maintained by its callers, not by the board itself.
//!
//! # Examples
//!
//! ```
//! use quadrille_core::Board;
//!
//! let mut board = Board::new();
//! board.set_value(4, 4, 5)?;
//!
//! assert_eq!(board.value(4, 4)?, 5);
//! assert_eq!(board.clue_count(), 1);
//! # Ok::<(), quadrille_core::BoardError>(())
//! ```

pub mod board;
pub mod digit_set;
pub mod position;

pub use self::{
    board::{Board, BoardError, Grid, NO_VALUE, ParseBoardError},
    digit_set::DigitSet,
    position::Position,
};
