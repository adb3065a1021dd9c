//! Tests for the new codes notifier.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coupons_shared::{EmailError, MailSender, NewCodesEmailConfig, OutgoingMail};

use super::{NewCodesNotifier, NotificationOutcome};
use crate::enterprise::{EnterpriseCustomer, EnterpriseCustomerLookup, EnterpriseError, Site};

/// Records every message; fails delivery when `fail` is set.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    fail: bool,
}

impl RecordingMailer {
    fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().expect("mailer lock").clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<(), EmailError> {
        self.sent.lock().expect("mailer lock").push(mail.clone());
        if self.fail {
            return Err(EmailError::SendError("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Enterprise customers keyed by id.
struct StaticEnterprises(HashMap<String, EnterpriseCustomer>);

impl StaticEnterprises {
    fn with_acme() -> Self {
        let mut customers = HashMap::new();
        customers.insert(
            "E-123".to_string(),
            EnterpriseCustomer {
                uuid: "E-123".to_string(),
                name: "Acme Corp".to_string(),
                slug: "acme".to_string(),
            },
        );
        Self(customers)
    }
}

impl EnterpriseCustomerLookup for StaticEnterprises {
    async fn get_enterprise_customer(
        &self,
        _site: &Site,
        enterprise_id: &str,
    ) -> Result<EnterpriseCustomer, EnterpriseError> {
        self.0
            .get(enterprise_id)
            .cloned()
            .ok_or_else(|| EnterpriseError::not_found(enterprise_id))
    }
}

fn email_config() -> NewCodesEmailConfig {
    NewCodesEmailConfig {
        email_subject: "New codes available".to_string(),
        email_body: "Find them at https://portal.example.com/{enterprise_slug}/admin/codes"
            .to_string(),
        from_email: "customersuccess@example.com".to_string(),
    }
}

fn site() -> Site {
    Site::new("shop.example.com", "https://enterprise.example.com/api/v1")
}

#[tokio::test]
async fn test_sends_rendered_email() {
    let mailer = Arc::new(RecordingMailer::default());
    let notifier = NewCodesNotifier::new(
        Arc::clone(&mailer),
        Arc::new(StaticEnterprises::with_acme()),
        email_config(),
    );

    let outcome = notifier
        .send_new_codes_notification(&site(), "admin@acme.com", "E-123", "42")
        .await
        .expect("enterprise resolves");

    assert_eq!(outcome, NotificationOutcome::Sent);
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New codes available");
    assert_eq!(
        sent[0].body,
        "Find them at https://portal.example.com/acme/admin/codes"
    );
    assert_eq!(sent[0].from_email, "customersuccess@example.com");
    assert_eq!(sent[0].recipients, vec!["admin@acme.com".to_string()]);
}

#[tokio::test]
async fn test_delivery_failure_is_reported_not_raised() {
    let mailer = Arc::new(RecordingMailer::failing());
    let notifier = NewCodesNotifier::new(
        Arc::clone(&mailer),
        Arc::new(StaticEnterprises::with_acme()),
        email_config(),
    );

    let outcome = notifier
        .send_new_codes_notification(&site(), "admin@acme.com", "E-123", "42")
        .await
        .expect("delivery failure must not be an error");

    assert!(!outcome.is_sent());
    assert!(matches!(
        outcome,
        NotificationOutcome::Failed { ref reason } if reason.contains("connection refused")
    ));
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_unknown_enterprise_propagates_and_sends_nothing() {
    let mailer = Arc::new(RecordingMailer::default());
    let notifier = NewCodesNotifier::new(
        Arc::clone(&mailer),
        Arc::new(StaticEnterprises::with_acme()),
        email_config(),
    );

    let err = notifier
        .send_new_codes_notification(&site(), "admin@acme.com", "E-999", "42")
        .await
        .unwrap_err();

    assert!(matches!(err, EnterpriseError::NotFound { .. }));
    assert!(mailer.sent().is_empty());
}

#[test]
fn test_compose_addresses_single_recipient() {
    let notifier = NewCodesNotifier::new(
        Arc::new(RecordingMailer::default()),
        Arc::new(StaticEnterprises::with_acme()),
        email_config(),
    );

    let mail = notifier.compose("ops@acme.com", "acme-corp");
    assert_eq!(mail.recipients, vec!["ops@acme.com".to_string()]);
    assert!(mail.body.contains("/acme-corp/admin/codes"));
}
