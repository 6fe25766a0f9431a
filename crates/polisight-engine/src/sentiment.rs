//! Market sentiment interpretation.
//!
//! The classifier itself is an external black box behind [`SentimentModel`];
//! this module only guards what gets sent to it and maps its label to a
//! canned market-implication phrase.

use polisight_core::SentimentReport;
use tracing::warn;

use crate::error::SourceError;

/// Feedback below this many characters is never sent to the classifier.
const MIN_FEEDBACK_CHARS: usize = 6;

/// External text classifier: free text in, (label, confidence) out.
pub trait SentimentModel {
    fn classify(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<(String, f64), SourceError>> + Send;
}

/// Market implication phrase for a sentiment label.
///
/// Anything other than "Positive" or "Negative" — including the "Neutral"
/// produced when feedback is absent — maps to the mixed-reception phrase.
pub fn interpret_sentiment(sentiment: &str) -> &'static str {
    match sentiment {
        "Positive" => "Favorable market reception likely",
        "Negative" => "Potential market resistance",
        _ => "Mixed market reception possible",
    }
}

/// Runs the sentiment path for one piece of public feedback.
pub struct SentimentAnalyzer<M> {
    model: M,
}

impl<M: SentimentModel> SentimentAnalyzer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Classify public feedback and attach the interpretive phrase.
    ///
    /// Empty or too-short feedback yields ("Neutral", 0.0) without calling
    /// the external classifier; a classifier failure is logged and degrades
    /// to the same neutral default rather than surfacing an error.
    pub async fn analyze_market_sentiment(&self, feedback: &str) -> SentimentReport {
        let (sentiment, confidence) = if feedback.chars().count() < MIN_FEEDBACK_CHARS {
            ("Neutral".to_string(), 0.0)
        } else {
            match self.model.classify(feedback).await {
                Ok(result) => result,
                Err(e) => {
                    warn!(error = %e, "sentiment classifier unavailable, reporting neutral");
                    ("Neutral".to_string(), 0.0)
                }
            }
        };

        let market_implications = interpret_sentiment(&sentiment).to_string();
        SentimentReport {
            sentiment,
            confidence,
            market_implications,
        }
    }
}
