//! Cell coordinates and grid bounds.

use std::fmt::{self, Display};

/// A cell coordinate: `row` is the participant, `col` is the period.
///
/// Both coordinates are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (participant) index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (period) index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// The size of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Creates dimensions for a grid of `rows` × `cols` cells.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the number of rows (participants).
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns (periods).
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Returns whether the position lies inside the grid.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Iterates over every position in row-major order.
    pub fn positions(self) -> impl DoubleEndedIterator<Item = Position> + Clone {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    pub(crate) const fn offset(self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Returns the adjacent position in `direction`, or `None` at the boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftpick_core::{Dimensions, Direction, Position};
    ///
    /// let dims = Dimensions::new(2, 3);
    /// assert_eq!(dims.neighbor(Position::new(0, 1), Direction::Right), Some(Position::new(0, 2)));
    /// assert_eq!(dims.neighbor(Position::new(0, 2), Direction::Right), None);
    /// assert_eq!(dims.neighbor(Position::new(0, 0), Direction::Up), None);
    /// ```
    #[must_use]
    pub fn neighbor(self, pos: Position, direction: Direction) -> Option<Position> {
        if !self.contains(pos) {
            return None;
        }
        let Position { row, col } = pos;
        let next = match direction {
            Direction::Up => Position::new(row.checked_sub(1)?, col),
            Direction::Down => Position::new(row + 1, col),
            Direction::Left => Position::new(row, col.checked_sub(1)?),
            Direction::Right => Position::new(row, col + 1),
        };
        self.contains(next).then_some(next)
    }

    /// Moves `pos` one step in `direction`, staying put at the boundary.
    #[must_use]
    pub fn step(self, pos: Position, direction: Direction) -> Position {
        self.neighbor(pos, direction).unwrap_or(pos)
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
