//! Shared errors, configuration, and email delivery for enterprise coupon tooling.
//!
//! This crate provides the ambient pieces used by every other crate:
//! - Application-wide error types
//! - Configuration management
//! - SMTP email delivery behind the `MailSender` trait

pub mod config;
pub mod email;
pub mod error;

pub use config::{
    AppConfig, DatabaseConfig, EmailConfig, EnterpriseApiConfig, NewCodesEmailConfig,
    StorageProvider, TemplateStorageConfig,
};
pub use email::{EmailError, EmailService, MailSender, OutgoingMail};
pub use error::AppError;
