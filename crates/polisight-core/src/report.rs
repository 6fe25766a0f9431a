//! Result bundles produced by the scoring engine.
//!
//! These are display-ready: percentages are pre-formatted strings where the
//! original registry values were free text anyway, and missing bill fields
//! have already been replaced by their documented fallbacks.

use serde::{Deserialize, Serialize};

/// Itemised evidence for one bill that survived classification.
///
/// Built once per included bill and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactDetail {
    pub bill_title: String,
    pub bill_id: String,
    pub status: String,
    pub last_updated: String,
    /// Signed percentage, e.g. "+20.0%" or "-10.0%".
    pub potential_impact: String,
    /// Whole percentage, e.g. "50%".
    pub probability: String,
    /// Relevance score to two decimals, e.g. "0.67".
    pub relevance: String,
    pub subjects: Vec<String>,
    pub url: String,
}

/// Aggregate legislative impact for one analysis request.
///
/// Both lists preserve the relevance-ranked order of the source bills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub adjusted_roi: f64,
    /// Signed fraction, e.g. 0.03 for +3%.
    pub total_impact: f64,
    pub risk_factors: Vec<ImpactDetail>,
    pub opportunities: Vec<ImpactDetail>,
}

/// Top-level result of an investment analysis.
///
/// Never constructed partially: on invalid input every numeric field is zero,
/// both lists are empty, and `error` carries the reason. Callers check
/// `error` rather than catching anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub base_roi: f64,
    pub base_roi_percentage: f64,
    pub adjusted_roi: f64,
    pub adjusted_roi_percentage: f64,
    /// Aggregate legislative impact as a percentage.
    pub legislative_impact: f64,
    pub risk_factors: Vec<ImpactDetail>,
    pub opportunities: Vec<ImpactDetail>,
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Error result with all numeric and collection fields zeroed.
    pub fn invalid(reason: String) -> Self {
        Self {
            base_roi: 0.0,
            base_roi_percentage: 0.0,
            adjusted_roi: 0.0,
            adjusted_roi_percentage: 0.0,
            legislative_impact: 0.0,
            risk_factors: Vec::new(),
            opportunities: Vec::new(),
            error: Some(reason),
        }
    }
}

/// Outcome of the market-sentiment path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    /// "Positive", "Negative", or "Neutral".
    pub sentiment: String,
    pub confidence: f64,
    /// Canned interpretive phrase for the label.
    pub market_implications: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_result_is_fully_zeroed() {
        let r = AnalysisResult::invalid("invalid input: zero amount".into());
        assert_eq!(r.base_roi, 0.0);
        assert_eq!(r.adjusted_roi, 0.0);
        assert_eq!(r.legislative_impact, 0.0);
        assert!(r.risk_factors.is_empty());
        assert!(r.opportunities.is_empty());
        assert_eq!(r.error.as_deref(), Some("invalid input: zero amount"));
    }

    #[test]
    fn impact_detail_json_roundtrip() {
        let detail = ImpactDetail {
            bill_title: "Affordable Housing Tax Credit Act".into(),
            bill_id: "AB 123".into(),
            status: "Chaptered by Secretary of State".into(),
            last_updated: "2024-09-30".into(),
            potential_impact: "+20.0%".into(),
            probability: "100%".into(),
            relevance: "0.67".into(),
            subjects: vec!["Housing".into()],
            url: "https://openstates.org/ca/bills/ab123".into(),
        };
        let json = serde_json::to_string(&detail).unwrap();
        let parsed: ImpactDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.bill_id, "AB 123");
        assert_eq!(parsed.potential_impact, "+20.0%");
    }
}
