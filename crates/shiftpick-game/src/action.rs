use shiftpick_core::{Direction, Position, Shift};

use crate::HelpTopic;

/// A user intent handled by [`Game::handle`](crate::Game::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Action {
    /// Pointer click on a cell. Fixed cells can be selected too.
    SelectCell(Position),
    /// Drop the selection and return to idle.
    ClearSelection,
    /// Move the selection one cell, clamped at the grid edge.
    MoveSelection(Direction),
    /// Write a shift into the selected cell.
    RequestShift(Shift),
    /// Empty the selected cell.
    ClearCell,
    /// Reset the grid to its initial configuration.
    ClearAll,
    /// Step back to the previous grid.
    Undo,
    /// Step forward again after an undo.
    Redo,
    /// Show a help overlay.
    OpenHelp(HelpTopic),
    /// Hide the help overlay.
    CloseHelp,
}

impl Action {
    /// Returns the action of an on-screen shift button; `None` is the empty button.
    #[must_use]
    pub const fn shift_button(shift: Option<Shift>) -> Self {
        match shift {
            Some(shift) => Self::RequestShift(shift),
            None => Self::ClearCell,
        }
    }
}

/// A keyboard event scoped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// The delete key.
    Delete,
    /// The backspace key.
    Backspace,
    /// The escape key.
    Escape,
    /// An arrow key.
    Arrow(Direction),
}

impl Key {
    /// Maps the key to its action.
    ///
    /// Characters outside the shift alphabet map to `None` and are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftpick_core::{Direction, Shift};
    /// use shiftpick_game::{Action, Key};
    ///
    /// assert_eq!(Key::Char('b').action(), Some(Action::RequestShift(Shift::B)));
    /// assert_eq!(Key::Char('z').action(), None);
    /// assert_eq!(Key::Backspace.action(), Some(Action::ClearCell));
    /// assert_eq!(
    ///     Key::Arrow(Direction::Left).action(),
    ///     Some(Action::MoveSelection(Direction::Left))
    /// );
    /// ```
    #[must_use]
    pub const fn action(self) -> Option<Action> {
        match self {
            Self::Char(ch) => match Shift::from_char(ch) {
                Some(shift) => Some(Action::RequestShift(shift)),
                None => None,
            },
            Self::Delete | Self::Backspace => Some(Action::ClearCell),
            Self::Escape => Some(Action::ClearSelection),
            Self::Arrow(direction) => Some(Action::MoveSelection(direction)),
        }
    }
}

/// What handling an action changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActionEffect {
    /// The grid differs from before the action.
    pub grid_changed: bool,
    /// The one-shot solved notification fired.
    pub solved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_keys_are_case_insensitive() {
        for shift in Shift::ALL {
            let upper = shift.as_char();
            let lower = upper.to_ascii_lowercase();
            assert_eq!(Key::Char(upper).action(), Some(Action::RequestShift(shift)));
            assert_eq!(Key::Char(lower).action(), Some(Action::RequestShift(shift)));
        }
    }

    #[test]
    fn test_other_characters_are_ignored() {
        for ch in ['f', 'Z', '1', ' ', '.'] {
            assert_eq!(Key::Char(ch).action(), None);
        }
    }

    #[test]
    fn test_delete_keys_and_empty_button_clear() {
        assert_eq!(Key::Delete.action(), Some(Action::ClearCell));
        assert_eq!(Key::Backspace.action(), Some(Action::ClearCell));
        assert_eq!(Action::shift_button(None), Action::ClearCell);
        assert_eq!(
            Action::shift_button(Some(Shift::E)),
            Action::RequestShift(Shift::E)
        );
        assert_eq!(Key::Escape.action(), Some(Action::ClearSelection));
    }
}
