pub mod bill;
pub mod config;
pub mod report;

pub use bill::{Bill, RankedBill};
pub use config::{ConfigError, RegistryConfig, SentimentConfig};
pub use report::{AnalysisResult, ImpactDetail, ImpactSummary, SentimentReport};
