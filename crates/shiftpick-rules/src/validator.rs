use shiftpick_core::ShiftGrid;

use crate::{
    RuleConfig, Violation,
    rule::{self, BoxedRule},
};

/// Checks a grid against a list of rules.
///
/// Rows are visited top to bottom, and within each row the rules run in list
/// order, so the output is grouped by row first and by rule second.
///
/// # Examples
///
/// ```
/// use shiftpick_core::ShiftGrid;
/// use shiftpick_rules::Validator;
///
/// let validator = Validator::default();
/// let grid: ShiftGrid = "AAA...\nD.A...".parse().unwrap();
///
/// let violations = validator.validate(&grid);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].cells().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    rules: Vec<BoxedRule>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::with_config(&RuleConfig::default())
    }
}

impl Validator {
    /// Creates a validator running `rules` in the given order.
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates a validator running the built-in rules configured by `config`.
    #[must_use]
    pub fn with_config(config: &RuleConfig) -> Self {
        Self::new(rule::all_rules(config))
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Returns every violation in `grid`.
    ///
    /// The result depends only on `grid`; an empty list means no rule is broken.
    #[must_use]
    pub fn validate(&self, grid: &ShiftGrid) -> Vec<Violation> {
        let mut violations = Vec::new();
        for row in 0..grid.dimensions().rows() {
            for rule in &self.rules {
                rule.check_row(grid, row, &mut violations);
            }
        }
        violations
    }
}

/// Validates `grid` against the default rules.
#[must_use]
pub fn validate(grid: &ShiftGrid) -> Vec<Violation> {
    Validator::default().validate(grid)
}
