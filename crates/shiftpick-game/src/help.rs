//! Static help overlays.
//!
//! Overlay content is fixed text and asset references. Opening or closing an
//! overlay never changes the puzzle.

/// An on-demand explanation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HelpTopic {
    /// The three roster rules and the coverage goal.
    #[display("rules")]
    Rules,
    /// A step-by-step approach for filling the grid by hand.
    #[display("walkthrough")]
    Walkthrough,
    /// How the full scheduling product solves the same problem automatically.
    #[display("autosolve")]
    AutoSolve,
}

/// Title, body and optional media asset of a help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpContent {
    /// Overlay heading.
    pub title: &'static str,
    /// Overlay text; paragraphs are separated by blank lines.
    pub body: &'static str,
    /// Reference to an accompanying media asset, resolved by the host page.
    pub asset: Option<&'static str>,
}

const RULES: HelpContent = HelpContent {
    title: "How to play",
    body: "\
Every day (column) needs one person on each shift A, B, C, D and E.

Each person (row) must follow three rules:
  1. Work any single shift at most twice.
  2. Never go directly from a later shift to an earlier one (for example D then A). \
A day off in between is fine.
  3. Work at most 4 days in any 5 consecutive days.

Pre-filled cells are fixed. Select a cell and type a letter, or use the buttons.",
    asset: None,
};

const WALKTHROUGH: HelpContent = HelpContent {
    title: "Solving walkthrough",
    body: "\
Start from the fixed cells: they decide which shifts are still missing on each day.

Give each person a day off early; it breaks both the ordering rule and the run of \
working days.

Fill rows in alphabetical order from left to right, and check the day counters \
below the grid for shifts that are still uncovered.",
    asset: Some("shift-picker-walkthrough.mp4"),
};

const AUTO_SOLVE: HelpContent = HelpContent {
    title: "Let the scheduler do it",
    body: "\
This puzzle is a tiny version of what a real rota looks like. The full product \
checks the same kinds of rules across whole teams and months, and fills the \
schedule automatically.",
    asset: Some("shift-picker-auto-solve.mp4"),
};

impl HelpTopic {
    /// All topics in menu order.
    pub const ALL: [Self; 3] = [Self::Rules, Self::Walkthrough, Self::AutoSolve];

    /// Returns the static content shown for this topic.
    #[must_use]
    pub const fn content(self) -> &'static HelpContent {
        match self {
            Self::Rules => &RULES,
            Self::Walkthrough => &WALKTHROUGH,
            Self::AutoSolve => &AUTO_SOLVE,
        }
    }

    /// Looks up a topic by its display name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.to_string().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_display() {
        for topic in HelpTopic::ALL {
            assert_eq!(HelpTopic::from_name(&topic.to_string()), Some(topic));
        }
        assert_eq!(HelpTopic::from_name("RULES"), Some(HelpTopic::Rules));
        assert_eq!(HelpTopic::from_name("solve"), None);
    }

    #[test]
    fn test_every_topic_has_content() {
        for topic in HelpTopic::ALL {
            let content = topic.content();
            assert!(!content.title.is_empty());
            assert!(!content.body.is_empty());
        }
    }
}
