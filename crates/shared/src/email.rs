//! Email delivery.
//!
//! Uses `lettre` for SMTP transport. Callers depend on [`MailSender`] so the
//! relay can be swapped out in tests.

use async_trait::async_trait;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::config::EmailConfig;

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    BuildError(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    SendError(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
    /// SMTP transport could not be configured.
    #[error("Failed to configure SMTP transport: {0}")]
    Transport(String),
}

/// A plain-text message ready to hand to a [`MailSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Sender address. Empty means the configured default sender.
    pub from_email: String,
    /// Recipient addresses.
    pub recipients: Vec<String>,
}

/// Something that can deliver an [`OutgoingMail`].
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Delivers the message synchronously with respect to the caller.
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<(), EmailError>;
}

/// SMTP email service.
///
/// The transport is built once and reused for every message.
#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
    /// Creates a new email service.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP relay cannot be configured.
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        let transport = Self::create_transport(&config)?;
        Ok(Self { config, transport })
    }

    /// Creates an SMTP transport.
    fn create_transport(
        config: &EmailConfig,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| EmailError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(creds)
            .build()
            .pipe(Ok)
    }

    /// Default sender mailbox, e.g. `Enterprise Coupons <no-reply@example.com>`.
    fn default_sender(&self) -> String {
        format!("{} <{}>", self.config.from_name, self.config.from_email)
    }

    /// Builds the wire message for `mail`.
    fn build_message(&self, mail: &OutgoingMail) -> Result<Message, EmailError> {
        let from = if mail.from_email.is_empty() {
            self.default_sender()
        } else {
            mail.from_email.clone()
        };

        let mut builder = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?,
            )
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_PLAIN);

        for recipient in &mail.recipients {
            builder = builder.to(recipient
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{recipient}: {e}")))?);
        }

        builder
            .body(mail.body.clone())
            .map_err(|e| EmailError::BuildError(e.to_string()))
    }
}

#[async_trait]
impl MailSender for EmailService {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<(), EmailError> {
        let message = self.build_message(mail)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        Ok(())
    }
}

/// Pipe trait for fluent API.
trait Pipe: Sized {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}
