//! Rule-based classification of a bill's enactment probability and its
//! risk/opportunity direction.
//!
//! The policy is an ordered decision table scanned top to bottom, first match
//! wins, so each rule stays individually auditable and testable.

use polisight_core::Bill;

/// Probability when no status rule matches.
const DEFAULT_PROBABILITY: f64 = 0.3;
/// Base magnitude when no status rule overrides it.
const DEFAULT_MAGNITUDE: f64 = 0.1;

/// (substring of lower-cased latest action, probability, base magnitude).
///
/// Mutually exclusive by construction: evaluation stops at the first match.
const STATUS_RULES: &[(&str, f64, f64)] = &[
    ("chaptered by secretary of state", 1.0, 0.2),
    ("approved by the governor", 1.0, 0.2),
    ("vetoed by governor", 0.0, 0.0),
    ("died pursuant to", 0.0, 0.0),
    ("from committee", 0.5, DEFAULT_MAGNITUDE),
    ("introduced", DEFAULT_PROBABILITY, DEFAULT_MAGNITUDE),
];

/// Title keywords marking a bill as a provisional risk to the investment.
const RISK_KEYWORDS: &[&str] = &["tax", "fee", "penalty", "restrict", "prohibit", "limit"];

/// Title keywords that override a provisional risk back to opportunity
/// (e.g. "tax credit" despite "tax").
const OPPORTUNITY_KEYWORDS: &[&str] = &["tax credit", "incentive", "grant", "streamline", "simplify"];

/// Enactment probability and directed impact for one bill.
///
/// Derived purely from the bill's text fields; ephemeral, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationResult {
    /// Signed fraction: negative for risks, positive for opportunities.
    pub impact_magnitude: f64,
    /// One of {0.0, 0.3, 0.5, 1.0}.
    pub probability: f64,
    pub is_risk: bool,
}

/// Classify one bill from its latest action text and title.
///
/// Matching is case-insensitive and missing fields are treated as empty
/// strings. A probability of 0.0 marks a dead or vetoed bill, which the
/// aggregator excludes entirely.
pub fn classify_bill(bill: &Bill) -> ClassificationResult {
    let action = bill
        .latest_action_description
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    let (probability, magnitude) = STATUS_RULES
        .iter()
        .find(|rule| action.contains(rule.0))
        .map(|rule| (rule.1, rule.2))
        .unwrap_or((DEFAULT_PROBABILITY, DEFAULT_MAGNITUDE));

    let title = bill.title.as_deref().unwrap_or("").to_lowercase();
    let mut is_risk = RISK_KEYWORDS.iter().any(|k| title.contains(k));
    if is_risk && OPPORTUNITY_KEYWORDS.iter().any(|k| title.contains(k)) {
        is_risk = false;
    }

    ClassificationResult {
        impact_magnitude: if is_risk { -magnitude } else { magnitude },
        probability,
        is_risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(title: &str, action: &str) -> Bill {
        Bill {
            title: Some(title.to_string()),
            latest_action_description: Some(action.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn chaptered_is_certain() {
        let c = classify_bill(&bill("Housing Act", "Chaptered by Secretary of State, Chapter 42"));
        assert_eq!(c.probability, 1.0);
        assert_eq!(c.impact_magnitude, 0.2);
        assert!(!c.is_risk);
    }

    #[test]
    fn approved_is_certain() {
        let c = classify_bill(&bill("Housing Act", "Approved by the Governor"));
        assert_eq!(c.probability, 1.0);
        assert_eq!(c.impact_magnitude, 0.2);
    }

    #[test]
    fn vetoed_is_dead() {
        let c = classify_bill(&bill("Housing Act", "Vetoed by Governor on 2024-01-01"));
        assert_eq!(c.probability, 0.0);
        assert_eq!(c.impact_magnitude, 0.0);
    }

    #[test]
    fn died_in_committee_is_dead() {
        let c = classify_bill(&bill("Housing Act", "Died pursuant to Art. IV, Sec. 10(c)"));
        assert_eq!(c.probability, 0.0);
        assert_eq!(c.impact_magnitude, 0.0);
    }

    #[test]
    fn from_committee_is_halfway() {
        let c = classify_bill(&bill("Housing Act", "From committee: Do pass"));
        assert_eq!(c.probability, 0.5);
        assert_eq!(c.impact_magnitude, 0.1);
    }

    #[test]
    fn introduced_is_early() {
        let c = classify_bill(&bill("Housing Act", "Introduced. Read first time."));
        assert_eq!(c.probability, 0.3);
        assert_eq!(c.impact_magnitude, 0.1);
    }

    #[test]
    fn unknown_action_gets_defaults() {
        let c = classify_bill(&bill("Housing Act", "Referred to Com. on HOUSING."));
        assert_eq!(c.probability, 0.3);
        assert_eq!(c.impact_magnitude, 0.1);
    }

    #[test]
    fn status_matching_is_case_insensitive() {
        let c = classify_bill(&bill("Housing Act", "VETOED BY GOVERNOR"));
        assert_eq!(c.probability, 0.0);
    }

    #[test]
    fn risk_keyword_in_title_flips_sign() {
        let c = classify_bill(&bill("New Restriction on Short-Term Rentals", "Introduced"));
        assert!(c.is_risk);
        assert_eq!(c.probability, 0.3);
        assert_eq!(c.impact_magnitude, -0.1);
    }

    #[test]
    fn each_risk_keyword_matches() {
        for keyword in ["tax", "fee", "penalty", "restrict", "prohibit", "limit"] {
            let c = classify_bill(&bill(&format!("A {keyword} on rentals"), "Introduced"));
            assert!(c.is_risk, "expected {keyword:?} to classify as risk");
        }
    }

    #[test]
    fn opportunity_keyword_overrides_risk() {
        // "tax credit" contains the risk keyword "tax" but reads as upside.
        let c = classify_bill(&bill("Property Tax Credit for Affordable Housing", "Introduced"));
        assert!(!c.is_risk);
        assert_eq!(c.impact_magnitude, 0.1);
    }

    #[test]
    fn no_risk_keyword_defaults_to_opportunity() {
        let c = classify_bill(&bill("Affordable Housing Expansion Act", "Introduced"));
        assert!(!c.is_risk);
        assert!(c.impact_magnitude > 0.0);
    }

    #[test]
    fn missing_fields_classify_without_failing() {
        let c = classify_bill(&Bill::default());
        assert_eq!(c.probability, 0.3);
        assert_eq!(c.impact_magnitude, 0.1);
        assert!(!c.is_risk);
    }
}
