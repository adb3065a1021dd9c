//! Product repository for catalog lookups.
//!
//! Implements the coupon product catalog using SeaORM.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::entities::{product_attribute_values, product_attributes, products};
use coupons_core::catalog::{
    CatalogError, CouponProduct, ENTERPRISE_CUSTOMER_UUID_ATTRIBUTE, ProductCatalog,
};

/// Product repository implementation.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Create a new product repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Text value of attribute `code` on product `product_id`, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn attribute_text(
        &self,
        product_id: i32,
        code: &str,
    ) -> Result<Option<String>, DbErr> {
        let value = product_attribute_values::Entity::find()
            .inner_join(product_attributes::Entity)
            .filter(product_attribute_values::Column::ProductId.eq(product_id))
            .filter(product_attributes::Column::Code.eq(code))
            .one(&self.db)
            .await?;

        Ok(value.and_then(|v| v.value_text))
    }
}

impl ProductCatalog for ProductRepository {
    async fn find_coupon_product(
        &self,
        product_id: i32,
    ) -> Result<Option<CouponProduct>, CatalogError> {
        let Some(product) = products::Entity::find_by_id(product_id)
            .one(&self.db)
            .await
            .map_err(to_catalog_error)?
        else {
            return Ok(None);
        };

        let enterprise_customer_uuid = self
            .attribute_text(product.id, ENTERPRISE_CUSTOMER_UUID_ATTRIBUTE)
            .await
            .map_err(to_catalog_error)?;

        Ok(Some(CouponProduct {
            id: product.id,
            title: product.title,
            enterprise_customer_uuid,
        }))
    }
}

fn to_catalog_error(err: DbErr) -> CatalogError {
    tracing::error!(error = %err, "Catalog query failed");
    CatalogError::Database(err.to_string())
}
