//! Interactive session for the shift picker puzzle.
//!
//! A [`Game`] owns the grid being edited, the cell selection, undo history
//! and the win/help [`Feedback`]. Front ends translate pointer and keyboard
//! events into [`Action`]s (or [`Key`]s), call [`Game::handle`], and redraw
//! from [`build_view_model`].
//!
//! # Examples
//!
//! ```
//! use shiftpick_core::{Direction, Position};
//! use shiftpick_game::{Action, Game, Key, build_view_model};
//!
//! let mut game = Game::new("A...\n.B..".parse().unwrap());
//! game.handle(Action::SelectCell(Position::new(0, 1)));
//! game.handle_key(Key::Char('a'));
//! game.handle_key(Key::Arrow(Direction::Right));
//! game.handle_key(Key::Char('d'));
//!
//! // Fixed cells print in upper case, player entries in lower case.
//! assert_eq!(game.grid().to_string(), "Aad.\n.B..");
//!
//! let vm = build_view_model(&game);
//! assert!(vm.reasons.is_empty());
//! assert!(vm.status.is_in_progress());
//! ```

pub use self::{
    action::{Action, ActionEffect, Key},
    feedback::{Feedback, WinLatch},
    game::{Game, GameOptions, SelectionState},
    help::{HelpContent, HelpTopic},
    view::{CellFlags, CellView, ColumnView, GameStatus, GameViewModel, build_view_model},
};

mod action;
mod feedback;
mod game;
pub mod help;
mod undo_redo_stack;
pub mod view;
