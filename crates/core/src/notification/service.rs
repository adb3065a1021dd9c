//! New codes notification service.

use std::sync::Arc;

use coupons_shared::{MailSender, NewCodesEmailConfig, OutgoingMail};
use tracing::{error, info};

use crate::enterprise::{EnterpriseCustomerLookup, EnterpriseError, Site};

/// Result of a notification attempt.
///
/// Delivery failures are not errors: they are logged and reported here so the
/// caller can decide what to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// The mail relay accepted the message.
    Sent,
    /// The mail relay rejected the message or was unreachable.
    Failed {
        /// Delivery error as reported by the mail sender.
        reason: String,
    },
}

impl NotificationOutcome {
    /// Whether the message was handed to the relay.
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Sends the "new codes available" email to enterprise customers.
pub struct NewCodesNotifier<M: MailSender, E: EnterpriseCustomerLookup> {
    mailer: Arc<M>,
    enterprise: Arc<E>,
    config: NewCodesEmailConfig,
}

impl<M: MailSender, E: EnterpriseCustomerLookup> NewCodesNotifier<M, E> {
    /// Create a new notifier.
    #[must_use]
    pub fn new(mailer: Arc<M>, enterprise: Arc<E>, config: NewCodesEmailConfig) -> Self {
        Self {
            mailer,
            enterprise,
            config,
        }
    }

    /// Build the message announcing new codes for `enterprise_slug`.
    #[must_use]
    pub fn compose(&self, email_address: &str, enterprise_slug: &str) -> OutgoingMail {
        OutgoingMail {
            subject: self.config.email_subject.clone(),
            body: self.config.render_body(enterprise_slug),
            from_email: self.config.from_email.clone(),
            recipients: vec![email_address.to_string()],
        }
    }

    /// Notify `email_address` that new codes exist for coupon `coupon_id`.
    ///
    /// The enterprise customer is resolved first so its slug can be rendered
    /// into the body.
    ///
    /// # Errors
    ///
    /// Returns an error only when the enterprise customer cannot be resolved;
    /// no mail is attempted in that case. Delivery failures yield
    /// [`NotificationOutcome::Failed`].
    pub async fn send_new_codes_notification(
        &self,
        site: &Site,
        email_address: &str,
        enterprise_id: &str,
        coupon_id: &str,
    ) -> Result<NotificationOutcome, EnterpriseError> {
        let customer = self
            .enterprise
            .get_enterprise_customer(site, enterprise_id)
            .await?;

        let mail = self.compose(email_address, &customer.slug);

        match self.mailer.send_mail(&mail).await {
            Ok(()) => {
                info!(
                    enterprise_id,
                    coupon_id, "New codes email sent to enterprise customer"
                );
                Ok(NotificationOutcome::Sent)
            }
            Err(e) => {
                error!(
                    enterprise_id,
                    coupon_id,
                    error = %e,
                    "New codes email failed for enterprise customer"
                );
                Ok(NotificationOutcome::Failed {
                    reason: e.to_string(),
                })
            }
        }
    }
}
