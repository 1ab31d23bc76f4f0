use thiserror::Error;

use krishi_core::DomainError;

/// Failure of a `YieldPredictor`.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// The input itself was rejected; retrying elsewhere would not help.
    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    #[error("prediction service unavailable: {0}")]
    Unavailable(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),
}

impl PredictorError {
    /// Whether another predictor could still serve the same input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PredictorError::InvalidInput(_))
    }
}

/// Failure of a weather or soil provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}
