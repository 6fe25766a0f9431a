//! Client for the hosted text-classification endpoint used for market
//! sentiment.
//!
//! The model is a black box: text in, ranked `(label, score)` pairs out. The
//! raw labels come back as "POSITIVE"/"NEGATIVE" and are normalised to the
//! title-case labels the feedback interpreter expects.

use std::time::Duration;

use polisight_core::SentimentConfig;
use polisight_engine::{SentimentModel, SourceError};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::info;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("sentiment endpoint returned {status}: {body}")]
    Server { status: u16, body: String },
}

impl From<SentimentError> for SourceError {
    fn from(e: SentimentError) -> Self {
        SourceError::new(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ModelScore {
    label: String,
    score: f64,
}

/// HTTP client for the sentiment classification endpoint.
pub struct SentimentClient {
    client: reqwest::Client,
    config: SentimentConfig,
}

impl SentimentClient {
    pub fn new(config: SentimentConfig) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    async fn classify_text(&self, text: &str) -> Result<(String, f64), SentimentError> {
        info!(endpoint = %self.config.endpoint, "classifying feedback sentiment");

        let mut request = self
            .client
            .post(&self.config.endpoint)
            .json(&json!({ "inputs": text }));
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SentimentError::Server {
                status: status.as_u16(),
                body,
            });
        }

        // One inner list per input; scores for every label.
        let scores: Vec<Vec<ModelScore>> = resp.json().await?;
        let top = scores
            .first()
            .and_then(|s| {
                s.iter()
                    .max_by(|a, b| a.score.total_cmp(&b.score))
            })
            .ok_or_else(|| SentimentError::Server {
                status: status.as_u16(),
                body: "empty classification response".into(),
            })?;

        Ok((normalize_label(&top.label), top.score))
    }
}

impl SentimentModel for SentimentClient {
    async fn classify(&self, text: &str) -> Result<(String, f64), SourceError> {
        Ok(self.classify_text(text).await?)
    }
}

fn normalize_label(label: &str) -> String {
    match label.to_ascii_uppercase().as_str() {
        "POSITIVE" | "LABEL_1" => "Positive".to_string(),
        "NEGATIVE" | "LABEL_0" => "Negative".to_string(),
        _ => "Neutral".to_string(),
    }
}
