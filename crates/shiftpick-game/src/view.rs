//! Presentation-ready snapshot of a [`Game`].
//!
//! The view model is rebuilt from scratch after every action; it carries no
//! state of its own.

use shiftpick_core::{CellState, Position, ShiftSet};

use crate::{Game, HelpTopic};

bitflags::bitflags! {
    /// Highlight flags of a grid cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellFlags: u8 {
        /// The cell belongs to the initial configuration.
        const FIXED = 0b0000_0001;
        /// The cell takes part in at least one violation.
        const VIOLATION = 0b0000_0010;
        /// The cell is selected.
        const SELECTED = 0b0000_0100;
    }
}

/// One grid cell as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Cell coordinates.
    pub pos: Position,
    /// Cell content.
    pub content: CellState,
    /// Highlights.
    pub flags: CellFlags,
}

/// The coverage counter under one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnView {
    /// Number of distinct shift categories staffed.
    pub score: usize,
    /// Every category is staffed.
    pub full: bool,
    /// Categories still missing.
    pub missing: ShiftSet,
}

/// Overall progress shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// Not yet solved.
    InProgress,
    /// Every column covered and no rule broken.
    Solved,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameViewModel {
    /// Number of participant rows.
    pub rows: usize,
    /// Number of period columns.
    pub cols: usize,
    /// Cells in row-major order.
    pub cells: Vec<CellView>,
    /// Coverage counters, left to right.
    pub columns: Vec<ColumnView>,
    /// One human-readable line per violation.
    pub reasons: Vec<String>,
    /// Progress.
    pub status: GameStatus,
    /// The open help overlay.
    pub overlay: Option<HelpTopic>,
    /// Whether the undo button is enabled.
    pub can_undo: bool,
    /// Whether the redo button is enabled.
    pub can_redo: bool,
}

impl GameViewModel {
    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellView {
        assert!(pos.row() < self.rows && pos.col() < self.cols, "{pos} is outside the grid");
        &self.cells[pos.row() * self.cols + pos.col()]
    }
}

/// Builds the view model of `game`.
#[must_use]
pub fn build_view_model(game: &Game) -> GameViewModel {
    let grid = game.grid();
    let dims = grid.dimensions();
    let assessment = game.assessment();

    let cells = dims
        .positions()
        .map(|pos| {
            let content = grid.cell(pos);
            let mut flags = CellFlags::empty();
            flags.set(CellFlags::FIXED, content.is_fixed());
            flags.set(CellFlags::VIOLATION, assessment.is_violating(pos));
            flags.set(CellFlags::SELECTED, game.selected() == Some(pos));
            CellView {
                pos,
                content,
                flags,
            }
        })
        .collect();

    let columns = assessment
        .coverage()
        .iter()
        .map(|column| ColumnView {
            score: column.score(),
            full: column.is_full(),
            missing: column.missing(),
        })
        .collect();

    let reasons = assessment.violations().iter().map(|v| v.reason()).collect();

    let status = if assessment.is_solved() {
        GameStatus::Solved
    } else {
        GameStatus::InProgress
    };

    GameViewModel {
        rows: dims.rows(),
        cols: dims.cols(),
        cells,
        columns,
        reasons,
        status,
        overlay: game.overlay(),
        can_undo: game.can_undo(),
        can_redo: game.can_redo(),
    }
}
