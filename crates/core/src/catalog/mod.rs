//! Coupon products in the catalog and the enterprise customers they belong to.

mod error;
mod service;
mod types;

pub use error::{CatalogError, ResolveError};
pub use service::{EnterpriseResolver, ProductCatalog};
pub use types::{CouponProduct, ENTERPRISE_CUSTOMER_UUID_ATTRIBUTE};
