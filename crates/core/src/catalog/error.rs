//! Catalog error types.

use thiserror::Error;

/// Errors raised by a [`ProductCatalog`](super::ProductCatalog) implementation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store failed.
    #[error("catalog query failed: {0}")]
    Database(String),
}

/// Errors from resolving a product's enterprise customer.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The product exists but carries no `enterprise_customer_uuid` attribute.
    #[error("product {product_id} has no enterprise_customer_uuid attribute")]
    MissingAttribute {
        /// Catalog product id.
        product_id: i32,
    },

    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<ResolveError> for coupons_shared::AppError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::MissingAttribute { .. } => Self::Internal(err.to_string()),
            ResolveError::Catalog(_) => Self::Database(err.to_string()),
        }
    }
}
