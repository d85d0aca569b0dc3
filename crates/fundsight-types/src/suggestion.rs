//! Quick-start suggestion type for FundSight.

use serde::{Deserialize, Serialize};

/// A labeled quick-start query.
///
/// Statically defined and not user-editable. Selecting a suggestion is
/// exactly equivalent to typing its `query` text and submitting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Short display string for the suggestion chip.
    pub label: String,
    /// The literal text submitted when the suggestion is chosen.
    pub query: String,
}

impl Suggestion {
    pub fn new(label: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            query: query.into(),
        }
    }
}
