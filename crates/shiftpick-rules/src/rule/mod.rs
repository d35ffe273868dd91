//! Roster rules.
//!
//! Each rule implements the [`Rule`] trait and inspects one participant row at
//! a time. Rows are independent: no rule looks across rows.

use std::fmt::Debug;

use shiftpick_core::ShiftGrid;

pub use self::{descending_pair::DescendingPair, shift_cap::ShiftCap, working_run::WorkingRun};
use crate::{RuleConfig, Violation};

mod descending_pair;
mod shift_cap;
mod working_run;

/// Returns the built-in rules configured by `config`.
///
/// The order is the order violations are reported in within a row: the
/// per-shift cap, then the ordering rule, then the working-run rule.
///
/// # Examples
///
/// ```
/// use shiftpick_rules::{RuleConfig, rule};
///
/// let rules = rule::all_rules(&RuleConfig::default());
/// let names: Vec<_> = rules.iter().map(|rule| rule.name()).collect();
/// assert_eq!(names, ["Shift Cap", "Descending Pair", "Working Run"]);
/// ```
#[must_use]
pub fn all_rules(config: &RuleConfig) -> Vec<BoxedRule> {
    vec![
        Box::new(ShiftCap::new(config.max_per_shift_limit())),
        Box::new(DescendingPair::new()),
        Box::new(WorkingRun::new(
            config.run_window_len(),
            config.max_in_window_limit(),
        )),
    ]
}

/// A constraint checked against each participant row.
pub trait Rule: Debug {
    /// Returns the display name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of this rule.
    fn clone_box(&self) -> BoxedRule;

    /// Appends every violation found in `row` of `grid` to `violations`.
    ///
    /// Implementations must be deterministic and report violations in a stable
    /// order.
    fn check_row(&self, grid: &ShiftGrid, row: usize, violations: &mut Vec<Violation>);
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use shiftpick_core::ShiftGrid;

    use super::Rule;
    use crate::Violation;

    /// Parses `grid` and runs `rule` over every row.
    #[track_caller]
    pub(crate) fn check_all_rows(rule: &dyn Rule, grid: &str) -> Vec<Violation> {
        let grid: ShiftGrid = grid.parse().expect("valid test grid");
        let mut violations = Vec::new();
        for row in 0..grid.dimensions().rows() {
            rule.check_row(&grid, row, &mut violations);
        }
        violations
    }
}
