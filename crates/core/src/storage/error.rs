//! Storage error types.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The bucket's region could not be determined.
    #[error("could not determine location of bucket '{bucket}'")]
    UnknownLocation {
        /// Bucket name.
        bucket: String,
    },

    /// Storage provider configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// OpenDAL operation error.
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// Create an unknown location error.
    #[must_use]
    pub fn unknown_location(bucket: impl Into<String>) -> Self {
        Self::UnknownLocation {
            bucket: bucket.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an operation error.
    #[must_use]
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        Self::Operation(err.to_string())
    }
}

impl From<StorageError> for coupons_shared::AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Configuration(_) => Self::Configuration(err.to_string()),
            StorageError::UnknownLocation { .. } | StorageError::Operation(_) => {
                Self::ExternalService(err.to_string())
            }
        }
    }
}
