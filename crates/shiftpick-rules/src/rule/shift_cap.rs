use shiftpick_core::{Position, Shift, ShiftGrid};

use super::{BoxedRule, Rule};
use crate::{Violation, ViolationKind};

const NAME: &str = "Shift Cap";

/// A participant may work each shift at most `limit` times.
///
/// One violation is reported per over-used shift, listing every cell of the
/// row that holds it. Shifts are checked in alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCap {
    limit: usize,
}

impl ShiftCap {
    /// Creates the rule with the given per-shift limit.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Rule for ShiftCap {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn check_row(&self, grid: &ShiftGrid, row: usize, violations: &mut Vec<Violation>) {
        let cells = grid.row(row);
        for shift in Shift::ALL {
            let positions: Vec<Position> = cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.as_shift() == Some(shift))
                .map(|(col, _)| Position::new(row, col))
                .collect();
            if positions.len() > self.limit {
                let kind = ViolationKind::ShiftCap {
                    row,
                    shift,
                    count: positions.len(),
                    limit: self.limit,
                };
                violations.push(Violation::new(kind, positions));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::testing::check_all_rows;

    #[test]
    fn test_three_occurrences_lists_all_three() {
        let violations = check_all_rows(&ShiftCap::new(2), "A.A.A.");
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].cells(),
            [
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(0, 4)
            ]
        );
        assert!(matches!(
            violations[0].kind(),
            ViolationKind::ShiftCap {
                row: 0,
                shift: Shift::A,
                count: 3,
                limit: 2
            }
        ));
    }

    #[test]
    fn test_two_occurrences_are_allowed() {
        assert!(check_all_rows(&ShiftCap::new(2), "AABB\nCCDD").is_empty());
    }

    #[test]
    fn test_reports_each_shift_in_alphabetical_order() {
        let violations = check_all_rows(&ShiftCap::new(1), "CCAA");
        let shifts: Vec<_> = violations
            .iter()
            .map(|v| match v.kind() {
                ViolationKind::ShiftCap { shift, .. } => *shift,
                other => panic!("unexpected violation {other:?}"),
            })
            .collect();
        assert_eq!(shifts, [Shift::A, Shift::C]);
    }

    #[test]
    fn test_rows_are_checked_independently() {
        let violations = check_all_rows(&ShiftCap::new(2), "AA..\nA...\nBBB.");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind().row(), 2);
    }
}
