//! Rule checking and coverage for shift picker grids.
//!
//! Everything in this crate is a pure function of a [`ShiftGrid`]: nothing is
//! cached, and calling the same check twice on the same grid yields the same
//! result.
//!
//! - [`Validator`] runs a list of [`Rule`]s over every participant row and
//!   collects [`Violation`]s.
//! - [`coverage`] counts, per period, how many shift categories are staffed.
//! - [`Assessment`] bundles both and answers whether the grid is solved.
//!
//! # Examples
//!
//! ```
//! use shiftpick_core::ShiftGrid;
//! use shiftpick_rules::{Assessment, Validator};
//!
//! let grid: ShiftGrid = "DA.\nBCE".parse().unwrap();
//! let assessment = Assessment::new(&Validator::default(), &grid);
//!
//! // "D" directly before "A" breaks the ordering rule.
//! assert_eq!(assessment.violations().len(), 1);
//! assert!(!assessment.is_solved());
//! ```
//!
//! [`ShiftGrid`]: shiftpick_core::ShiftGrid

pub use self::{
    assessment::Assessment,
    config::RuleConfig,
    coverage::{ColumnCoverage, column_coverage, coverage, is_fully_covered},
    rule::{BoxedRule, Rule},
    validator::{Validator, validate},
    violation::{Violation, ViolationKind},
};

mod assessment;
mod config;
mod coverage;
pub mod rule;
mod validator;
mod violation;
