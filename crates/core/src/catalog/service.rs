//! Enterprise resolution for coupon products.

use std::sync::Arc;

use super::error::{CatalogError, ResolveError};
use super::types::CouponProduct;

/// Read access to coupon products.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait ProductCatalog: Send + Sync {
    /// Find a product by primary key.
    fn find_coupon_product(
        &self,
        product_id: i32,
    ) -> impl std::future::Future<Output = Result<Option<CouponProduct>, CatalogError>> + Send;
}

/// Looks up which enterprise customer a coupon product belongs to.
pub struct EnterpriseResolver<C: ProductCatalog> {
    catalog: Arc<C>,
}

impl<C: ProductCatalog> EnterpriseResolver<C> {
    /// Create a new resolver.
    #[must_use]
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Enterprise customer UUID of coupon `product_id`.
    ///
    /// Returns `Ok(None)` when no such product exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lookup fails or the product has no
    /// `enterprise_customer_uuid` attribute.
    pub async fn get_enterprise_from_product(
        &self,
        product_id: i32,
    ) -> Result<Option<String>, ResolveError> {
        let Some(product) = self.catalog.find_coupon_product(product_id).await? else {
            tracing::debug!(product_id, "Coupon product not found");
            return Ok(None);
        };

        product
            .enterprise_customer_uuid
            .map(Some)
            .ok_or(ResolveError::MissingAttribute { product_id })
    }
}
