//! Enterprise lookup error types.

use thiserror::Error;

/// Enterprise customer lookup errors.
#[derive(Debug, Error)]
pub enum EnterpriseError {
    /// The enterprise API has no customer with this id.
    #[error("enterprise customer not found: {enterprise_id}")]
    NotFound {
        /// Requested enterprise customer id.
        enterprise_id: String,
    },

    /// The enterprise API answered with an unexpected status.
    #[error("enterprise API returned status {status} for {enterprise_id}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Requested enterprise customer id.
        enterprise_id: String,
    },

    /// The request could not be sent or timed out.
    #[error("enterprise API request failed: {0}")]
    Request(String),

    /// The response body was not a customer record.
    #[error("invalid enterprise API response: {0}")]
    Decode(String),

    /// HTTP client configuration error.
    #[error("enterprise client configuration error: {0}")]
    Configuration(String),
}

impl EnterpriseError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(enterprise_id: impl Into<String>) -> Self {
        Self::NotFound {
            enterprise_id: enterprise_id.into(),
        }
    }
}

impl From<EnterpriseError> for coupons_shared::AppError {
    fn from(err: EnterpriseError) -> Self {
        match err {
            EnterpriseError::NotFound { .. } => Self::NotFound(err.to_string()),
            EnterpriseError::Configuration(_) => Self::Configuration(err.to_string()),
            EnterpriseError::UnexpectedStatus { .. }
            | EnterpriseError::Request(_)
            | EnterpriseError::Decode(_) => Self::ExternalService(err.to_string()),
        }
    }
}
