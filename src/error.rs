use thiserror::Error;

/// Errors raised by the matcher before any scoring happens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),
}

impl From<validator::ValidationErrors> for MatchError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MatchError::InvalidInput(errors.to_string())
    }
}
