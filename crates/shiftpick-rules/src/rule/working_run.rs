use shiftpick_core::{Position, ShiftGrid};

use super::{BoxedRule, Rule};
use crate::{Violation, ViolationKind};

const NAME: &str = "Working Run";

/// Within any `window` consecutive periods, a participant works at most `limit`.
///
/// Every window position is checked separately. Overlapping windows that both
/// exceed the limit each produce their own violation, even when they share
/// cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingRun {
    window: usize,
    limit: usize,
}

impl WorkingRun {
    /// Creates the rule for windows of `window` periods with at most `limit` worked.
    #[must_use]
    pub const fn new(window: usize, limit: usize) -> Self {
        Self { window, limit }
    }
}

impl Rule for WorkingRun {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn check_row(&self, grid: &ShiftGrid, row: usize, violations: &mut Vec<Violation>) {
        if self.window == 0 {
            return;
        }
        for (start_col, cells) in grid.row(row).windows(self.window).enumerate() {
            let count = cells.iter().filter(|cell| cell.is_occupied()).count();
            if count > self.limit {
                let kind = ViolationKind::WorkingRun {
                    row,
                    start_col,
                    window: self.window,
                    count,
                    limit: self.limit,
                };
                let cells = (start_col..start_col + self.window)
                    .map(|col| Position::new(row, col))
                    .collect();
                violations.push(Violation::new(kind, cells));
            }
        }
    }
}
