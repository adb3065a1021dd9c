//! Application configuration management.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// SMTP configuration.
    #[serde(default)]
    pub email: EmailConfig,
    /// Templates for the "new codes available" email.
    #[serde(default)]
    pub new_codes_email: NewCodesEmailConfig,
    /// Bucket holding uploaded enterprise email templates.
    #[serde(default)]
    pub template_storage: TemplateStorageConfig,
    /// Enterprise customer API client configuration.
    #[serde(default)]
    pub enterprise_api: EnterpriseApiConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// SMTP configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// SMTP relay host.
    pub smtp_host: String,
    /// SMTP relay port.
    pub smtp_port: u16,
    /// SMTP username.
    pub smtp_username: String,
    /// SMTP password.
    pub smtp_password: String,
    /// Display name used when a message carries no explicit sender.
    pub from_name: String,
    /// Default sender address.
    pub from_email: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_name: "Enterprise Coupons".to_string(),
            from_email: "no-reply@example.com".to_string(),
        }
    }
}

/// Subject, body and sender of the email announcing newly generated codes.
///
/// The body is a template: every `{enterprise_slug}` is replaced with the
/// enterprise customer's slug.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewCodesEmailConfig {
    /// Email subject.
    pub email_subject: String,
    /// Email body template.
    pub email_body: String,
    /// Sender address.
    pub from_email: String,
}

impl NewCodesEmailConfig {
    /// Placeholder substituted with the enterprise slug.
    pub const SLUG_PLACEHOLDER: &'static str = "{enterprise_slug}";

    /// Renders the body template for the given enterprise slug.
    #[must_use]
    pub fn render_body(&self, enterprise_slug: &str) -> String {
        self.email_body
            .replace(Self::SLUG_PLACEHOLDER, enterprise_slug)
    }
}

impl Default for NewCodesEmailConfig {
    fn default() -> Self {
        Self {
            email_subject: "New codes available".to_string(),
            email_body: r"Hello,

This message is to inform you that a new order has been processed for your organization. Please visit the following page, in your Admin Dashboard, to find new codes ready for use.

https://portal.example.com/{enterprise_slug}/admin/codes

Thank you."
                .to_string(),
            from_email: "customersuccess@example.com".to_string(),
        }
    }
}

/// Storage provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// AWS S3.
    S3 {
        /// S3 endpoint URL.
        #[serde(default = "default_s3_endpoint")]
        endpoint: String,
        /// S3 bucket name.
        bucket: String,
        /// AWS access key ID.
        access_key_id: String,
        /// AWS secret access key.
        secret_access_key: String,
        /// Region used to sign requests.
        #[serde(default = "default_s3_region")]
        region: String,
    },
    /// Local filesystem (development only)
    LocalFs {
        /// Root directory path.
        root: PathBuf,
        /// Bucket name reported in public URLs.
        bucket: String,
        /// Region reported in public URLs.
        region: String,
    },
}

fn default_s3_endpoint() -> String {
    "https://s3.amazonaws.com".to_string()
}

fn default_s3_region() -> String {
    "us-east-1".to_string()
}

impl StorageProvider {
    /// Create an S3 provider against the default AWS endpoint.
    #[must_use]
    pub fn s3(
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::S3 {
            endpoint: default_s3_endpoint(),
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Create local filesystem provider (development only).
    #[must_use]
    pub fn local_fs(
        root: impl Into<PathBuf>,
        bucket: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::LocalFs {
            root: root.into(),
            bucket: bucket.into(),
            region: region.into(),
        }
    }

    /// Get the provider name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
        }
    }

    /// Get the bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        match self {
            Self::S3 { bucket, .. } | Self::LocalFs { bucket, .. } => bucket,
        }
    }
}

/// Template bucket configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateStorageConfig {
    /// Where uploaded templates are written.
    pub provider: StorageProvider,
}

impl Default for TemplateStorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProvider::local_fs("./storage", "email-templates", "local"),
        }
    }
}

/// Enterprise customer API client configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnterpriseApiConfig {
    /// Bearer token sent with every request.
    pub access_token: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for EnterpriseApiConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            timeout_secs: 5,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COUPONS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_default() {
        let config = EmailConfig::default();
        assert_eq!(config.smtp_host, "localhost");
        assert_eq!(config.smtp_port, 1025);
    }

    #[test]
    fn test_render_body_replaces_every_placeholder() {
        let config = NewCodesEmailConfig {
            email_subject: "New codes".to_string(),
            email_body: "Visit /{enterprise_slug}/admin or /{enterprise_slug}/codes".to_string(),
            from_email: "ops@example.com".to_string(),
        };
        assert_eq!(
            config.render_body("acme"),
            "Visit /acme/admin or /acme/codes"
        );
    }

    #[test]
    fn test_default_body_has_placeholder() {
        let config = NewCodesEmailConfig::default();
        assert!(config.email_body.contains(NewCodesEmailConfig::SLUG_PLACEHOLDER));
        assert!(!config.render_body("acme").contains('{'));
    }

    #[test]
    fn test_storage_provider_s3() {
        let provider = StorageProvider::s3("templates", "access_key", "secret_key", "eu-west-1");
        assert_eq!(provider.name(), "s3");
        assert_eq!(provider.bucket(), "templates");
    }

    #[test]
    fn test_storage_provider_local() {
        let provider = StorageProvider::local_fs("./storage", "templates", "local");
        assert_eq!(provider.name(), "local");
        assert_eq!(provider.bucket(), "templates");
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test")),
                ("COUPONS__DATABASE__URL", Some("postgres://localhost/coupons")),
                (
                    "COUPONS__NEW_CODES_EMAIL__EMAIL_SUBJECT",
                    Some("Fresh codes"),
                ),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.database.url, "postgres://localhost/coupons");
                assert_eq!(config.database.max_connections, 10);
                assert_eq!(config.new_codes_email.email_subject, "Fresh codes");
                assert_eq!(config.template_storage.provider.name(), "local");
                assert_eq!(config.enterprise_api.timeout_secs, 5);
            },
        );
    }

    #[test]
    fn test_load_requires_database_url() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test")),
                ("COUPONS__DATABASE__URL", None::<&str>),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }
}
