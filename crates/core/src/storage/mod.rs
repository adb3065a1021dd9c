//! Template file uploads using Apache OpenDAL.
//!
//! Uploaded enterprise email templates land in a single bucket under a
//! timestamped, slugified key and are served from the bucket's public
//! S3 URL.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────────────────────────┐
//! │ TemplateUploader │────▶│ ObjectStore (trait)                  │
//! │  key = slugify(  │     │  put_object("key", bytes)            │
//! │   ts + " " + nm) │     │  bucket_location()                   │
//! └──────────────────┘     ├──────────────────────────────────────┤
//!                          │ OpendalStore: S3 │ local filesystem  │
//!                          └──────────────────────────────────────┘
//! ```

mod error;
mod service;
mod slug;
mod uploader;


pub use coupons_shared::StorageProvider;
pub use error::StorageError;
pub use service::{ObjectStore, OpendalStore};
pub use slug::slugify;
pub use uploader::{
    TemplateUploader, UploadRequest, UploadResult, encode_contents, public_url, storage_key,
};
