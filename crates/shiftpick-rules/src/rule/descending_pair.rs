use shiftpick_core::{Position, ShiftGrid};

use super::{BoxedRule, Rule};
use crate::{Violation, ViolationKind};

const NAME: &str = "Descending Pair";

/// Horizontally adjacent shifts must not step backwards in the alphabet.
///
/// Only directly neighboring cells are compared: an empty cell between two
/// shifts separates them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DescendingPair {}

impl DescendingPair {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for DescendingPair {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn check_row(&self, grid: &ShiftGrid, row: usize, violations: &mut Vec<Violation>) {
        for (col, pair) in grid.row(row).windows(2).enumerate() {
            let (Some(left), Some(right)) = (pair[0].as_shift(), pair[1].as_shift()) else {
                continue;
            };
            if left > right {
                let kind = ViolationKind::DescendingPair {
                    row,
                    col,
                    left,
                    right,
                };
                let cells = vec![Position::new(row, col), Position::new(row, col + 1)];
                violations.push(Violation::new(kind, cells));
            }
        }
    }
}
