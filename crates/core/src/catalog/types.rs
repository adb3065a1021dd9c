//! Catalog types.

use serde::{Deserialize, Serialize};

/// Attribute code holding the owning enterprise customer's UUID.
pub const ENTERPRISE_CUSTOMER_UUID_ATTRIBUTE: &str = "enterprise_customer_uuid";

/// A coupon product as seen by the enterprise tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponProduct {
    /// Catalog primary key.
    pub id: i32,
    /// Product title.
    pub title: String,
    /// Value of the `enterprise_customer_uuid` attribute, if set.
    pub enterprise_customer_uuid: Option<String>,
}
