//! Error types for the rate service.

/// Domain-level errors (rule violations on values).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Implausible rate: {0}")]
    ImplausibleRate(f64),

    #[error("Conversion of {0} overflows")]
    ConversionOverflow(f64),
}

/// Why a single candidate element did not yield a rate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CandidateRejection {
    #[error("not a number: {0:?}")]
    Unparsable(String),

    #[error("implausible rate {0}")]
    Implausible(f64),
}

/// Extraction errors: the page did not contain a usable rate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("rate marker not found in page")]
    NoMatch,

    #[error("none of the {candidates} rate candidates validated")]
    NoValidCandidate { candidates: usize },
}

/// Reasons a refresh kept the previous rate.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error(transparent)]
    Fetch(#[from] crate::ports::FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NegativeAmount
            | DomainError::InvalidAmount(_)
            | DomainError::ConversionOverflow(_) => {
                AppError::BadRequest("Invalid amount".into())
            }
            DomainError::ImplausibleRate(_) => AppError::Internal(err.to_string()),
        }
    }
}
