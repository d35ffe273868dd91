//! The roster grid.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Dimensions, Position, Shift};

/// The content of a single roster cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellState {
    /// An editable cell with no shift assigned.
    #[default]
    Empty,
    /// An editable cell holding a shift entered by the player.
    Assigned(Shift),
    /// A cell seeded by the initial configuration. Never editable.
    Fixed(Shift),
}

impl CellState {
    /// Returns the shift held by this cell, if any.
    #[must_use]
    pub const fn as_shift(self) -> Option<Shift> {
        match self {
            Self::Empty => None,
            Self::Assigned(shift) | Self::Fixed(shift) => Some(shift),
        }
    }

    /// Returns whether the player may change this cell.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        !self.is_fixed()
    }

    /// Returns whether the cell holds a shift, fixed or assigned.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        self.as_shift().is_some()
    }
}

/// Errors raised when building a [`ShiftGrid`] from an initial configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The configuration contains no rows.
    #[display("grid has no rows")]
    NoRows,
    /// The first row contains no cells.
    #[display("grid has no columns")]
    NoColumns,
    /// A row is shorter or longer than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A cell uses a character that is neither a shift nor `.`.
    #[display("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The rejected character.
        symbol: char,
    },
}

/// A rectangular roster of shift cells.
///
/// A grid is a value: every edit returns a new grid and leaves the original
/// untouched, so violations and coverage computed from one snapshot always
/// describe that snapshot.
///
/// The set of fixed cells is decided at construction. Edits that target a
/// fixed cell, or a position outside the grid, are silently ignored.
///
/// # Text format
///
/// [`FromStr`] reads one row per line (or `/`-separated rows). `.` marks an
/// editable empty cell; `A`–`E` in any case marks a fixed cell. Blank lines and
/// surrounding whitespace are ignored. [`Display`] writes fixed shifts in
/// uppercase and player-assigned shifts in lowercase.
///
/// The format describes initial configurations, so parsing is one-way for
/// edited grids: every letter read back becomes a fixed cell. Print
/// [`ShiftGrid::reset`] to get text that parses to the same grid.
///
/// ```
/// use shiftpick_core::{CellState, Position, Shift, ShiftGrid};
///
/// let grid: ShiftGrid = "A.B/..c".parse().unwrap();
/// assert_eq!(grid.cell(Position::new(1, 2)), CellState::Fixed(Shift::C));
/// assert_eq!(grid.to_string(), "A.B\n..C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShiftGrid {
    dims: Dimensions,
    cells: Vec<CellState>,
}

impl ShiftGrid {
    /// Builds a grid from rows of initial values.
    ///
    /// `Some(shift)` becomes a fixed cell, `None` an editable empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoRows`] or [`GridError::NoColumns`] for an empty
    /// configuration and [`GridError::RaggedRow`] if the rows differ in length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Option<Shift>>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut row_count = 0;
        for (row, values) in rows.into_iter().enumerate() {
            let start = cells.len();
            cells.extend(
                values
                    .into_iter()
                    .map(|value| value.map_or(CellState::Empty, CellState::Fixed)),
            );
            let width = cells.len() - start;
            match cols {
                None if width == 0 => return Err(GridError::NoColumns),
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(GridError::RaggedRow {
                        row,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            row_count += 1;
        }
        let cols = cols.ok_or(GridError::NoRows)?;
        Ok(Self {
            dims: Dimensions::new(row_count, cols),
            cells,
        })
    }

    /// Returns the grid size.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        assert!(
            self.dims.contains(pos),
            "position {pos} outside {} grid",
            self.dims
        );
        self.cells[self.dims.offset(pos)]
    }

    /// Returns the state of the cell at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.dims
            .contains(pos)
            .then(|| self.cells[self.dims.offset(pos)])
    }

    /// Returns the shift at `pos`, or `None` if the cell is empty or outside the grid.
    #[must_use]
    pub fn shift(&self, pos: Position) -> Option<Shift> {
        self.get(pos).and_then(CellState::as_shift)
    }

    /// Returns the cells of one participant's row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[CellState] {
        assert!(row < self.dims.rows(), "row {row} outside {} grid", self.dims);
        let start = row * self.dims.cols();
        &self.cells[start..start + self.dims.cols()]
    }

    /// Iterates over the cells of one period's column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = CellState> + '_ {
        self.cells
            .iter()
            .skip(col)
            .step_by(self.dims.cols())
            .take(if col < self.dims.cols() { self.dims.rows() } else { 0 })
            .copied()
    }

    /// Iterates over the positions of fixed cells in row-major order.
    pub fn fixed_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.dims
            .positions()
            .filter(|&pos| self.cell(pos).is_fixed())
    }

    /// Returns whether the cell at `pos` accepts edits.
    #[must_use]
    pub fn is_editable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(CellState::is_editable)
    }

    /// Returns a copy of this grid with the editable cell at `pos` set to `shift`.
    ///
    /// `None` clears the cell. Fixed cells and out-of-range positions are left
    /// unchanged, in which case the returned grid equals `self`.
    #[must_use]
    pub fn with_shift(&self, pos: Position, shift: Option<Shift>) -> Self {
        let mut next = self.clone();
        if self.is_editable(pos) {
            next.cells[self.dims.offset(pos)] = shift.map_or(CellState::Empty, CellState::Assigned);
        }
        next
    }

    /// Returns a copy of this grid with every editable cell cleared.
    ///
    /// The result is the initial configuration the grid was built from.
    #[must_use]
    pub fn reset(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|&cell| match cell {
                CellState::Fixed(_) => cell,
                CellState::Empty | CellState::Assigned(_) => CellState::Empty,
            })
            .collect();
        Self {
            dims: self.dims,
            cells,
        }
    }
}

impl FromStr for ShiftGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|line| !line.is_empty());
        let mut rows = Vec::new();
        for (row, line) in lines.enumerate() {
            let values = line
                .chars()
                .enumerate()
                .map(|(col, symbol)| match symbol {
                    '.' => Ok(None),
                    _ => Shift::from_char(symbol)
                        .map(Some)
                        .ok_or(GridError::UnknownSymbol { row, col, symbol }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(values);
        }
        Self::from_rows(rows)
    }
}

impl Display for ShiftGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.rows() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for cell in self.row(row) {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Assigned(shift) => shift.as_char().to_ascii_lowercase(),
                    CellState::Fixed(shift) => shift.as_char(),
                };
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}
