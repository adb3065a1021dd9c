//! Enterprise customer lookup.
//!
//! Enterprise customers are owned by a separate enterprise service; this
//! module only reads them, resolving a `(site, enterprise_id)` pair to the
//! customer record through [`EnterpriseCustomerLookup`].

mod client;
mod error;
mod types;

pub use client::{EnterpriseCustomerLookup, HttpEnterpriseClient};
pub use error::EnterpriseError;
pub use types::{EnterpriseCustomer, Site};
