/// Limits used by the built-in rules.
///
/// The default values describe the standard puzzle: each participant works a
/// given shift at most twice, and at most four of any five consecutive periods.
///
/// # Examples
///
/// ```
/// use shiftpick_rules::RuleConfig;
///
/// let config = RuleConfig::default().max_per_shift(3);
/// assert_eq!(config.max_per_shift_limit(), 3);
/// assert_eq!(config.run_window_len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    max_per_shift: usize,
    run_window: usize,
    max_in_window: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_per_shift: 2,
            run_window: 5,
            max_in_window: 4,
        }
    }
}

impl RuleConfig {
    /// Sets how many times a participant may work the same shift.
    #[must_use]
    pub fn max_per_shift(mut self, limit: usize) -> Self {
        self.max_per_shift = limit;
        self
    }

    /// Sets the number of consecutive periods examined by the working-run rule.
    #[must_use]
    pub fn run_window(mut self, len: usize) -> Self {
        self.run_window = len;
        self
    }

    /// Sets how many periods of a window may be worked.
    #[must_use]
    pub fn max_in_window(mut self, limit: usize) -> Self {
        self.max_in_window = limit;
        self
    }

    /// Returns the per-shift cap.
    #[must_use]
    pub fn max_per_shift_limit(&self) -> usize {
        self.max_per_shift
    }

    /// Returns the working-run window length.
    #[must_use]
    pub fn run_window_len(&self) -> usize {
        self.run_window
    }

    /// Returns the maximum number of worked periods within a window.
    #[must_use]
    pub fn max_in_window_limit(&self) -> usize {
        self.max_in_window
    }
}
