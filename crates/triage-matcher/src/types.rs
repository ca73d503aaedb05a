use serde::{Deserialize, Serialize};

/// Aggregate view over a set of matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total_matches: usize,
    pub regex_matches: usize,
    pub keyword_matches: usize,
    pub custom_matches: usize,
    pub average_confidence: f64,
    pub highest_confidence: f64,
    pub lowest_confidence: f64,
    /// Distinct pattern ids, in first-seen order.
    pub patterns_matched: Vec<String>,
}
