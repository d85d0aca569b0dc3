//! Quick-start suggestion catalog.
//!
//! A fixed, ordered set of labeled queries surfaced as chips above the
//! input box. Selecting one feeds its query through the identical send
//! path as typed input, including the one-in-flight throttle.

use std::sync::OnceLock;

use fundsight_types::suggestion::Suggestion;

static CATALOG: OnceLock<Vec<Suggestion>> = OnceLock::new();

/// The static suggestion catalog, in display order.
pub fn suggested_tasks() -> &'static [Suggestion] {
    CATALOG.get_or_init(|| {
        vec![
            Suggestion::new(
                "Analyze spending",
                "Can you analyze my spending patterns for the last week?",
            ),
            Suggestion::new(
                "Savings advice",
                "How can I save more for my dream home goal?",
            ),
            Suggestion::new(
                "Budget check",
                "Which budget category am I most likely to exceed?",
            ),
            Suggestion::new(
                "Investment tips",
                "Give me some basic investment tips for a beginner in India.",
            ),
            Suggestion::new(
                "Expense summary",
                "Summarize my top 3 biggest expenses this month.",
            ),
        ]
    })
}
