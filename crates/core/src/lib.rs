//! Enterprise coupon tooling.
//!
//! This crate contains the coupon-side logic with ZERO database dependencies.
//! Every external system sits behind a trait so callers inject the clients.
//!
//! # Modules
//!
//! - `notification` - "New codes available" emails to enterprise customers
//! - `enterprise` - Enterprise customer lookup over the enterprise API
//! - `catalog` - Resolving the enterprise customer that owns a coupon product
//! - `storage` - Uploading coupon email templates to the template bucket

pub mod catalog;
pub mod enterprise;
pub mod notification;
pub mod storage;

pub use catalog::{EnterpriseResolver, ProductCatalog};
pub use enterprise::{EnterpriseCustomerLookup, HttpEnterpriseClient, Site};
pub use notification::{NewCodesNotifier, NotificationOutcome};
pub use storage::{ObjectStore, OpendalStore, TemplateUploader};
