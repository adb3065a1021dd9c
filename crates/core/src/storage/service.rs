//! Object store implementation using Apache OpenDAL.

use bytes::Bytes;
use opendal::{Operator, services};

use super::error::StorageError;
use coupons_shared::StorageProvider;

/// A single bucket objects can be written to.
///
/// Implemented by [`OpendalStore`]; tests substitute in-memory fakes.
pub trait ObjectStore: Send + Sync {
    /// Bucket name as it appears in public URLs.
    fn bucket(&self) -> &str;

    /// Write `data` under `key`, replacing any existing object.
    fn put_object(
        &self,
        key: &str,
        data: Bytes,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Region the bucket lives in, e.g. `eu-west-1`.
    fn bucket_location(
        &self,
    ) -> impl std::future::Future<Output = Result<String, StorageError>> + Send;
}

/// OpenDAL-backed object store.
///
/// Build it once and share it; the operator keeps its HTTP client alive
/// between uploads.
#[derive(Debug, Clone)]
pub struct OpendalStore {
    operator: Operator,
    provider: StorageProvider,
}

impl OpendalStore {
    /// Create a new store from provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_provider(provider: StorageProvider) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&provider)?;
        Ok(Self { operator, provider })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let builder = services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);

                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
                    .pipe(Ok)
            }
            StorageProvider::LocalFs { root, .. } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
                    .pipe(Ok)
            }
        }
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}

impl ObjectStore for OpendalStore {
    fn bucket(&self) -> &str {
        self.provider.bucket()
    }

    async fn put_object(&self, key: &str, data: Bytes) -> Result<(), StorageError> {
        let size = data.len();
        self.operator.write(key, data).await?;
        tracing::debug!(bucket = %self.bucket(), %key, size, "Object written");
        Ok(())
    }

    async fn bucket_location(&self) -> Result<String, StorageError> {
        match &self.provider {
            StorageProvider::S3 {
                endpoint, bucket, ..
            } => services::S3::detect_region(endpoint, bucket)
                .await
                .ok_or_else(|| StorageError::unknown_location(bucket.as_str())),
            StorageProvider::LocalFs { region, .. } => Ok(region.clone()),
        }
    }
}

/// Extension trait for pipe operator.
trait Pipe: Sized {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}
