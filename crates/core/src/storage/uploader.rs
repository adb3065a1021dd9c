//! Enterprise coupon template uploads.

use std::io::Write;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::error::StorageError;
use super::service::ObjectStore;
use super::slug::slugify;

/// Timestamp prefix of every storage key.
const KEY_TIMESTAMP_FORMAT: &str = "%d-%m-%Y at %H.%M.%S";

/// A file supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Original filename.
    pub name: String,
    /// File contents as text.
    pub contents: String,
    /// Size reported by the caller, echoed back unchanged.
    pub size: u64,
}

/// An uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Storage key.
    pub name: String,
    /// Size reported by the caller.
    pub size: u64,
    /// Public URL of the object.
    pub url: String,
}

/// Encode textual file contents into the bytes that get stored.
///
/// Code points below 256 become a single byte. Anything larger is written as
/// an ASCII escape: `\uXXXX` in the BMP, `\UXXXXXXXX` above it.
#[must_use]
pub fn encode_contents(contents: &str) -> Bytes {
    let mut buf = Vec::with_capacity(contents.len());
    for c in contents.chars() {
        let code_point = u32::from(c);
        if let Ok(byte) = u8::try_from(code_point) {
            buf.push(byte);
        } else if code_point <= 0xFFFF {
            push_escape(&mut buf, format_args!("\\u{code_point:04x}"));
        } else {
            push_escape(&mut buf, format_args!("\\U{code_point:08x}"));
        }
    }
    Bytes::from(buf)
}

fn push_escape(buf: &mut Vec<u8>, escape: std::fmt::Arguments<'_>) {
    // Writing into a Vec cannot fail.
    let _ = buf.write_fmt(escape);
}

/// Storage key for a file named `name` uploaded at `at`.
///
/// Keys only have second resolution: two files with the same name uploaded
/// within the same second share a key and the later one wins.
#[must_use]
pub fn storage_key(name: &str, at: NaiveDateTime) -> String {
    slugify(&format!("{} {}", at.format(KEY_TIMESTAMP_FORMAT), name))
}

/// Public URL of `key` in `bucket`.
///
/// Format: `https://{bucket}.s3.{region}.amazonaws.com/{key}`
#[must_use]
pub fn public_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{bucket}.s3.{region}.amazonaws.com/{key}")
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Uploads enterprise coupon email templates to the template bucket.
pub struct TemplateUploader<S: ObjectStore> {
    store: Arc<S>,
    clock: fn() -> NaiveDateTime,
}

impl<S: ObjectStore> TemplateUploader<S> {
    /// Create a new uploader writing to `store`.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            clock: local_now,
        }
    }

    /// Replace the clock used to timestamp keys.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Upload every file, one after another, in input order.
    ///
    /// `None` and an empty slice both produce an empty result without touching
    /// the store. The bucket location is looked up again for every file.
    ///
    /// # Errors
    ///
    /// Returns the first upload or location lookup failure. Files uploaded
    /// before the failure stay in the bucket.
    pub async fn upload_files(
        &self,
        files: Option<&[UploadRequest]>,
    ) -> Result<Vec<UploadResult>, StorageError> {
        let files = files.unwrap_or_default();
        let mut uploaded = Vec::with_capacity(files.len());

        for file in files {
            let data = encode_contents(&file.contents);
            let key = storage_key(&file.name, (self.clock)());

            self.store.put_object(&key, data).await?;
            let location = self.store.bucket_location().await?;
            let url = public_url(self.store.bucket(), &location, &key);

            tracing::info!(bucket = %self.store.bucket(), %key, size = file.size, "Uploaded enterprise template");
            uploaded.push(UploadResult {
                name: key,
                size: file.size,
                url,
            });
        }

        Ok(uploaded)
    }
}
