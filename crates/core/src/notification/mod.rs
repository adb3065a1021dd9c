//! "New codes available" notifications for enterprise customers.

mod service;

#[cfg(test)]
mod tests;

pub use service::{NewCodesNotifier, NotificationOutcome};
