//! Enterprise API client.

use std::time::Duration;

use coupons_shared::EnterpriseApiConfig;
use reqwest::StatusCode;

use super::error::EnterpriseError;
use super::types::{EnterpriseCustomer, Site};

/// Resolves enterprise customers for a site.
///
/// Implemented over HTTP by [`HttpEnterpriseClient`]; tests provide fakes.
pub trait EnterpriseCustomerLookup: Send + Sync {
    /// Fetch the enterprise customer `enterprise_id` as seen by `site`.
    fn get_enterprise_customer(
        &self,
        site: &Site,
        enterprise_id: &str,
    ) -> impl std::future::Future<Output = Result<EnterpriseCustomer, EnterpriseError>> + Send;
}

/// Enterprise API client using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpEnterpriseClient {
    http: reqwest::Client,
    access_token: String,
}

impl HttpEnterpriseClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &EnterpriseApiConfig) -> Result<Self, EnterpriseError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EnterpriseError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            access_token: config.access_token.clone(),
        })
    }

    /// Customer detail endpoint: `{api}/enterprise-customer/{id}/`.
    #[must_use]
    pub fn customer_url(site: &Site, enterprise_id: &str) -> String {
        format!(
            "{}/enterprise-customer/{}/",
            site.enterprise_api_url.trim_end_matches('/'),
            enterprise_id
        )
    }
}

impl EnterpriseCustomerLookup for HttpEnterpriseClient {
    async fn get_enterprise_customer(
        &self,
        site: &Site,
        enterprise_id: &str,
    ) -> Result<EnterpriseCustomer, EnterpriseError> {
        let url = Self::customer_url(site, enterprise_id);
        tracing::debug!(site = %site.domain, %url, "Fetching enterprise customer");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| EnterpriseError::Request(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(EnterpriseError::not_found(enterprise_id)),
            status if !status.is_success() => Err(EnterpriseError::UnexpectedStatus {
                status: status.as_u16(),
                enterprise_id: enterprise_id.to_string(),
            }),
            _ => response
                .json::<EnterpriseCustomer>()
                .await
                .map_err(|e| EnterpriseError::Decode(e.to_string())),
        }
    }
}
