//! Enterprise customer types.

use serde::{Deserialize, Serialize};

/// Customer-facing site context.
///
/// Each site points at the enterprise API deployment that knows its
/// enterprise customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Site domain, e.g. `shop.example.com`.
    pub domain: String,
    /// Base URL of the enterprise API for this site.
    pub enterprise_api_url: String,
}

impl Site {
    /// Create a new site context.
    #[must_use]
    pub fn new(domain: impl Into<String>, enterprise_api_url: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            enterprise_api_url: enterprise_api_url.into(),
        }
    }
}

/// Enterprise customer record as returned by the enterprise API.
///
/// Only `slug` is required; the API returns many more fields which are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseCustomer {
    /// Enterprise customer UUID.
    #[serde(default)]
    pub uuid: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// URL-safe identifier used in portal links.
    pub slug: String,
}
