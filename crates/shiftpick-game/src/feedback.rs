use shiftpick_rules::Assessment;

use crate::HelpTopic;

/// One-shot trigger for the "solved" notification.
///
/// The latch starts armed. Observing a solved grid while armed fires once and
/// disarms it; it re-arms only after an unsolved grid is observed or
/// [`WinLatch::rearm`] is called.
///
/// # Examples
///
/// ```
/// use shiftpick_game::WinLatch;
///
/// let mut latch = WinLatch::new();
/// assert!(latch.observe(true));
/// assert!(!latch.observe(true)); // still solved: no repeat
/// assert!(!latch.observe(false));
/// assert!(latch.observe(true)); // solved again after a break
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLatch {
    armed: bool,
}

impl Default for WinLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl WinLatch {
    /// Creates an armed latch.
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: true }
    }

    /// Returns whether the next solved observation will fire.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Records the current solved state and returns whether to notify.
    pub fn observe(&mut self, solved: bool) -> bool {
        let fire = solved && self.armed;
        self.armed = !solved;
        fire
    }

    /// Makes the latch eligible to fire again.
    pub fn rearm(&mut self) {
        self.armed = true;
    }
}

/// Success notification and help overlay state of a session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Feedback {
    latch: WinLatch,
    overlay: Option<HelpTopic>,
    notifications: usize,
}

impl Feedback {
    /// Inspects a fresh assessment and returns whether the solved notification fires.
    pub fn observe(&mut self, assessment: &Assessment) -> bool {
        let fired = self.latch.observe(assessment.is_solved());
        if fired {
            self.notifications += 1;
            log::info!("puzzle solved (notification #{})", self.notifications);
        }
        fired
    }

    /// Re-arms the notification after the grid was reset.
    pub fn reset(&mut self) {
        self.latch.rearm();
    }

    /// Returns the win latch.
    #[must_use]
    pub fn latch(&self) -> WinLatch {
        self.latch
    }

    /// Returns how many solved notifications fired during this session.
    #[must_use]
    pub fn notifications(&self) -> usize {
        self.notifications
    }

    /// Returns the open help overlay, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<HelpTopic> {
        self.overlay
    }

    /// Opens `topic`, replacing any open overlay.
    pub fn open(&mut self, topic: HelpTopic) {
        self.overlay = Some(topic);
    }

    /// Closes the open overlay.
    pub fn close(&mut self) {
        self.overlay = None;
    }
}
