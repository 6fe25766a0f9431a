//! Bill records as returned by the legislative registry.

use serde::{Deserialize, Serialize};

/// One legislative bill from the registry's search results.
///
/// The registry makes no guarantees about which fields are present, so every
/// field is optional and deserialisation never fails on a missing key.
/// Display fallbacks ("Untitled", "No ID", ...) are applied when impact
/// details are built, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bill {
    pub title: Option<String>,
    pub identifier: Option<String>,
    /// Free-text description of the most recent legislative action,
    /// e.g. "Chaptered by Secretary of State" or "Vetoed by Governor".
    pub latest_action_description: Option<String>,
    /// ISO date string of the most recent action.
    pub latest_action_date: Option<String>,
    /// Statement of the bill's intended effect, when the registry has one.
    pub impact_clause: Option<String>,
    /// Subject tags. `None` when the registry omits the field entirely.
    pub subject: Option<Vec<String>>,
    pub openstates_url: Option<String>,
}

impl Bill {
    /// Title and impact clause joined for relevance scoring, missing fields
    /// treated as empty strings.
    pub fn corpus_text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or(""),
            self.impact_clause.as_deref().unwrap_or(""),
        )
    }
}

/// A bill paired with its relevance to the investment description, in [0, 1].
#[derive(Debug, Clone)]
pub struct RankedBill {
    pub bill: Bill,
    pub relevance: f64,
}
