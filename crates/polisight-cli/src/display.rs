//! Terminal rendering of analysis results.
//!
//! Renders an [`AnalysisResult`] as a grouped, human-readable card: ROI
//! figures first, then one section per evidence list. Empty sections are
//! skipped.

use polisight_core::{AnalysisResult, ImpactDetail, SentimentReport};

/// Print a full investment analysis card.
pub fn print_analysis(result: &AnalysisResult) {
    if let Some(error) = &result.error {
        println!("Analysis failed: {error}");
        return;
    }

    println!("=== Investment Analysis ===");
    println!();
    println!("Returns");
    println!("  Base ROI            {:+.2}%", result.base_roi_percentage);
    println!("  Legislative impact  {:+.2}%", result.legislative_impact);
    println!(
        "  Adjusted ROI        {:+.2}%  (${:.2})",
        result.adjusted_roi_percentage, result.adjusted_roi
    );
    println!();

    print_section("Risk Factors", &result.risk_factors);
    print_section("Opportunities", &result.opportunities);

    if result.risk_factors.is_empty() && result.opportunities.is_empty() {
        println!("No relevant legislation found.");
    }
}

/// Print the market sentiment card.
pub fn print_sentiment(report: &SentimentReport) {
    println!("=== Market Sentiment ===");
    println!();
    println!("  Sentiment     {}", report.sentiment);
    println!("  Confidence    {:.2}", report.confidence);
    println!("  Implications  {}", report.market_implications);
    println!();
}

fn print_section(header: &str, details: &[ImpactDetail]) {
    if details.is_empty() {
        return;
    }

    println!("{header}");
    for detail in details {
        println!("  {} ({})", detail.bill_title, detail.bill_id);
        println!("    Status      {}", detail.status);
        println!("    Updated     {}", detail.last_updated);
        println!(
            "    Impact      {}  at {} probability, relevance {}",
            detail.potential_impact, detail.probability, detail.relevance
        );
        println!("    Subjects    {}", detail.subjects.join(", "));
        println!("    URL         {}", detail.url);
    }
    println!();
}
