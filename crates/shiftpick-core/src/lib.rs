//! Core data structures for the shift picker puzzle.
//!
//! The puzzle is a small roster: each row is a participant, each column is a
//! period (a day), and every cell holds at most one shift category. This
//! crate provides the value types the rule checker and the interactive
//! session are built on.
//!
//! # Overview
//!
//! - [`shift`]: the ordered shift alphabet ([`Shift`]) and a compact set of
//!   shifts ([`ShiftSet`]).
//! - [`position`]: cell coordinates ([`Position`]), grid bounds
//!   ([`Dimensions`]) and cursor movement ([`Direction`]).
//! - [`grid`]: the immutable roster grid ([`ShiftGrid`]) with fixed and
//!   editable cells ([`CellState`]).
//!
//! # Examples
//!
//! ```
//! use shiftpick_core::{Position, Shift, ShiftGrid};
//!
//! let grid: ShiftGrid = "A..\n.B.".parse().unwrap();
//! assert_eq!(grid.dimensions().rows(), 2);
//!
//! // Edits produce a new grid and leave the original untouched.
//! let edited = grid.with_shift(Position::new(0, 1), Some(Shift::C));
//! assert_eq!(edited.shift(Position::new(0, 1)), Some(Shift::C));
//! assert_eq!(grid.shift(Position::new(0, 1)), None);
//!
//! // Fixed cells reject edits.
//! let rejected = grid.with_shift(Position::new(0, 0), Some(Shift::E));
//! assert_eq!(rejected, grid);
//! ```

pub mod grid;
pub mod position;
pub mod shift;

pub use self::{
    grid::{CellState, GridError, ShiftGrid},
    position::{Dimensions, Direction, Position},
    shift::{Shift, ShiftSet},
};
