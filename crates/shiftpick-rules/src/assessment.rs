use shiftpick_core::{Position, ShiftGrid};

use crate::{ColumnCoverage, Validator, Violation, coverage, is_fully_covered};

/// Violations and coverage computed from one grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    violations: Vec<Violation>,
    coverage: Vec<ColumnCoverage>,
}

impl Assessment {
    /// Checks `grid` with `validator` and computes its coverage.
    #[must_use]
    pub fn new(validator: &Validator, grid: &ShiftGrid) -> Self {
        Self {
            violations: validator.validate(grid),
            coverage: coverage(grid),
        }
    }

    /// Returns every violation, in validator order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns per-column coverage, left to right.
    #[must_use]
    pub fn coverage(&self) -> &[ColumnCoverage] {
        &self.coverage
    }

    /// Returns whether `pos` is implicated in any violation.
    #[must_use]
    pub fn is_violating(&self, pos: Position) -> bool {
        self.violations.iter().any(|v| v.contains(pos))
    }

    /// Returns whether the grid is solved: every column fully covered and no violations.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.violations.is_empty() && is_fully_covered(&self.coverage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_requires_coverage_and_no_violations() {
        let validator = Validator::default();

        let valid_but_partial: ShiftGrid = "A.\n.B".parse().unwrap();
        let assessment = Assessment::new(&validator, &valid_but_partial);
        assert!(assessment.violations().is_empty());
        assert!(!assessment.is_solved());

        let covered: ShiftGrid = "
            A.B
            B.C
            CAD
            DBE
            ECA
            .D.
            .E.
        "
        .parse()
        .unwrap();
        let assessment = Assessment::new(&validator, &covered);
        assert!(is_fully_covered(assessment.coverage()));
        assert!(!assessment.violations().is_empty());
        assert!(assessment.is_violating(Position::new(4, 1)));
        assert!(!assessment.is_solved());
    }
}
