//! Aggregation of ranked, classified bills into an adjusted ROI with
//! itemised supporting evidence.

use polisight_core::{ImpactDetail, ImpactSummary, RankedBill};
use tracing::debug;

use crate::classify::classify_bill;

/// Combine ranked bills into an [`ImpactSummary`] for one investment.
///
/// Dead and vetoed bills (probability 0) are excluded from every output,
/// including the running total. Each surviving bill contributes
/// `magnitude × probability × relevance` — already negative for risks — and
/// lands in exactly one of the risk/opportunity lists, in ranked order.
pub fn aggregate_impact(ranked: &[RankedBill], investment_amount: f64) -> ImpactSummary {
    let mut total_impact = 0.0;
    let mut risk_factors = Vec::new();
    let mut opportunities = Vec::new();

    for rb in ranked {
        let classification = classify_bill(&rb.bill);
        if classification.probability <= 0.0 {
            continue;
        }

        total_impact += classification.impact_magnitude * classification.probability * rb.relevance;

        let bill = &rb.bill;
        let detail = ImpactDetail {
            bill_title: bill.title.clone().unwrap_or_else(|| "Untitled".into()),
            bill_id: bill.identifier.clone().unwrap_or_else(|| "No ID".into()),
            status: bill
                .latest_action_description
                .clone()
                .unwrap_or_else(|| "Status unknown".into()),
            last_updated: bill
                .latest_action_date
                .clone()
                .unwrap_or_else(|| "Date unknown".into()),
            potential_impact: format!("{:+.1}%", classification.impact_magnitude * 100.0),
            probability: format!("{:.0}%", classification.probability * 100.0),
            relevance: format!("{:.2}", rb.relevance),
            subjects: bill
                .subject
                .clone()
                .unwrap_or_else(|| vec!["Not specified".into()]),
            url: bill.openstates_url.clone().unwrap_or_else(|| "#".into()),
        };

        if classification.is_risk {
            risk_factors.push(detail);
        } else {
            opportunities.push(detail);
        }
    }

    debug!(
        risks = risk_factors.len(),
        opportunities = opportunities.len(),
        total_impact,
        "aggregated legislative impact"
    );

    ImpactSummary {
        adjusted_roi: investment_amount * (1.0 + total_impact),
        total_impact,
        risk_factors,
        opportunities,
    }
}
