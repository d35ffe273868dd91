use std::fmt::{self, Display};

use shiftpick_core::{Position, Shift};

/// What a [`Violation`] is about.
///
/// Row and column numbers are zero-based; the [`Display`] text numbers
/// participants and periods from 1 for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum ViolationKind {
    /// A participant works the same shift more often than allowed.
    ShiftCap {
        /// Participant row.
        row: usize,
        /// The over-used shift.
        shift: Shift,
        /// How often the shift occurs in the row.
        count: usize,
        /// The allowed maximum.
        limit: usize,
    },
    /// A later shift sits directly before an earlier one.
    DescendingPair {
        /// Participant row.
        row: usize,
        /// Column of the left cell; the right cell is at `col + 1`.
        col: usize,
        /// Shift in the left cell.
        left: Shift,
        /// Shift in the right cell.
        right: Shift,
    },
    /// Too many worked periods within a window of consecutive periods.
    WorkingRun {
        /// Participant row.
        row: usize,
        /// First column of the window.
        start_col: usize,
        /// Window length.
        window: usize,
        /// Worked periods found in the window.
        count: usize,
        /// The allowed maximum.
        limit: usize,
    },
}

impl ViolationKind {
    /// Returns the participant row the violation belongs to.
    #[must_use]
    pub fn row(&self) -> usize {
        match *self {
            Self::ShiftCap { row, .. }
            | Self::DescendingPair { row, .. }
            | Self::WorkingRun { row, .. } => row,
        }
    }
}

impl Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ShiftCap {
                row,
                shift,
                count,
                limit,
            } => write!(
                f,
                "Participant {} works shift {shift} {count} times (at most {limit} allowed)",
                row + 1
            ),
            Self::DescendingPair {
                row,
                col,
                left,
                right,
            } => write!(
                f,
                "Participant {} has shift {left} directly before shift {right} in periods {} and {}",
                row + 1,
                col + 1,
                col + 2
            ),
            Self::WorkingRun {
                row,
                start_col,
                window,
                count,
                limit,
            } => write!(
                f,
                "Participant {} works {count} of the {window} periods starting at period {} (at most {limit} allowed)",
                row + 1,
                start_col + 1
            ),
        }
    }
}

/// A broken constraint together with the cells that break it.
///
/// Violations are recomputed from a grid on demand and never stored
/// independently of it. A reported violation is always invalid; valid rows
/// simply produce none.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    kind: ViolationKind,
    cells: Vec<Position>,
}

impl Violation {
    /// Creates a violation implicating `cells`, in the given order.
    #[must_use]
    pub fn new(kind: ViolationKind, cells: Vec<Position>) -> Self {
        Self { kind, cells }
    }

    /// Returns what was violated.
    #[must_use]
    pub fn kind(&self) -> &ViolationKind {
        &self.kind
    }

    /// Returns the implicated cells.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns whether `pos` is one of the implicated cells.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Returns the human-readable reason.
    #[must_use]
    pub fn reason(&self) -> String {
        self.kind.to_string()
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.kind, f)
    }
}
