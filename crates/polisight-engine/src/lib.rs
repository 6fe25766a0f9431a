//! Scoring engine: TF-IDF relevance ranking, rule-based bill classification,
//! and the impact aggregation that folds both into an adjusted ROI.

pub mod aggregate;
pub mod analyzer;
pub mod classify;
pub mod error;
pub mod rank;
pub mod sentiment;

pub use aggregate::aggregate_impact;
pub use analyzer::{BillSource, InvestmentAnalyzer};
pub use classify::{ClassificationResult, classify_bill};
pub use error::{EngineError, SourceError};
pub use rank::rank_bills;
pub use sentiment::{SentimentAnalyzer, SentimentModel, interpret_sentiment};
