//! Investment scoring orchestrator.
//!
//! Computes baseline ROI from raw caller input, pulls candidate bills from an
//! external registry, and runs the rank → classify → aggregate pipeline. The
//! registry is behind a trait so tests can substitute a stub.

use polisight_core::{AnalysisResult, Bill};
use tracing::{info, warn};

use crate::aggregate::aggregate_impact;
use crate::error::{EngineError, SourceError};
use crate::rank::rank_bills;

/// External bill registry: given a sector keyword, return candidate bills.
pub trait BillSource {
    fn fetch_bills(
        &self,
        sector: &str,
    ) -> impl Future<Output = Result<Vec<Bill>, SourceError>> + Send;
}

/// Orchestrates one investment analysis per call. Holds no mutable state, so
/// independent requests can run concurrently on one instance.
pub struct InvestmentAnalyzer<S> {
    bills: S,
}

impl<S: BillSource> InvestmentAnalyzer<S> {
    pub fn new(bills: S) -> Self {
        Self { bills }
    }

    /// Analyse one investment. Never fails: invalid numeric input is surfaced
    /// through the result's `error` field, and a registry outage degrades to
    /// zero legislative impact.
    pub async fn analyze_investment(
        &self,
        sector: &str,
        investment_amount: &str,
        estimated_return: &str,
        description: &str,
    ) -> AnalysisResult {
        let (amount, estimated) = match parse_inputs(investment_amount, estimated_return) {
            Ok(values) => values,
            Err(e) => return AnalysisResult::invalid(e.to_string()),
        };

        let base_roi = (estimated - amount) / amount;

        let bills = match self.bills.fetch_bills(sector).await {
            Ok(bills) => {
                info!(sector, count = bills.len(), "fetched candidate bills");
                bills
            }
            Err(e) => {
                // Degraded mode: the analysis proceeds without legislative data.
                warn!(sector, error = %e, "bill registry unavailable, assuming zero legislative impact");
                Vec::new()
            }
        };

        let ranked = rank_bills(bills, description);
        let summary = aggregate_impact(&ranked, amount);

        AnalysisResult {
            base_roi,
            base_roi_percentage: base_roi * 100.0,
            adjusted_roi: summary.adjusted_roi,
            adjusted_roi_percentage: (summary.adjusted_roi - amount) / amount * 100.0,
            legislative_impact: summary.total_impact * 100.0,
            risk_factors: summary.risk_factors,
            opportunities: summary.opportunities,
            error: None,
        }
    }
}

/// Parse the caller's numeric fields. Zero investment is rejected up front —
/// it would make both ROI figures a division by zero.
fn parse_inputs(investment_amount: &str, estimated_return: &str) -> Result<(f64, f64), EngineError> {
    let amount: f64 = investment_amount
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidInput(format!("investment amount {investment_amount:?} is not a number")))?;
    let estimated: f64 = estimated_return
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidInput(format!("estimated return {estimated_return:?} is not a number")))?;

    if amount == 0.0 {
        return Err(EngineError::InvalidInput(
            "investment amount must be non-zero".into(),
        ));
    }
    Ok((amount, estimated))
}
