//! A failed delivery is logged exactly once, at ERROR, and never raised.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use coupons_core::enterprise::{EnterpriseCustomer, EnterpriseError};
use coupons_core::{EnterpriseCustomerLookup, NewCodesNotifier, NotificationOutcome, Site};
use coupons_shared::{EmailError, MailSender, NewCodesEmailConfig, OutgoingMail};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts events per level.
#[derive(Clone, Default)]
struct LevelCounter {
    errors: Arc<AtomicUsize>,
    infos: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        match *event.metadata().level() {
            Level::ERROR => {
                self.errors.fetch_add(1, Ordering::SeqCst);
            }
            Level::INFO => {
                self.infos.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }
    }
}

struct DownRelay;

#[async_trait]
impl MailSender for DownRelay {
    async fn send_mail(&self, _mail: &OutgoingMail) -> Result<(), EmailError> {
        Err(EmailError::SendError("421 service not available".to_string()))
    }
}

struct Acme;

impl EnterpriseCustomerLookup for Acme {
    async fn get_enterprise_customer(
        &self,
        _site: &Site,
        enterprise_id: &str,
    ) -> Result<EnterpriseCustomer, EnterpriseError> {
        Ok(EnterpriseCustomer {
            uuid: enterprise_id.to_string(),
            name: "Acme Corp".to_string(),
            slug: "acme".to_string(),
        })
    }
}

#[tokio::test]
async fn test_failed_delivery_logs_one_error_and_no_sent_line() {
    let counter = LevelCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let notifier = NewCodesNotifier::new(
        Arc::new(DownRelay),
        Arc::new(Acme),
        NewCodesEmailConfig::default(),
    );
    let site = Site::new("shop.example.com", "https://enterprise.example.com/api/v1");

    let outcome = notifier
        .send_new_codes_notification(&site, "admin@acme.com", "E-123", "42")
        .await
        .expect("delivery failure is not an error");

    assert!(matches!(outcome, NotificationOutcome::Failed { .. }));
    assert_eq!(counter.errors.load(Ordering::SeqCst), 1);
    assert_eq!(counter.infos.load(Ordering::SeqCst), 0);
}
