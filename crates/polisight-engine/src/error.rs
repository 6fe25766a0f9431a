use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Failure reported by an external collaborator (bill registry or sentiment
/// classifier). Type-erased at the engine boundary: the engine only logs
/// these and degrades, it never inspects them.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SourceError(String);

impl SourceError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
