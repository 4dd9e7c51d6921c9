//! In-process notification center — fire-and-forget delivery of status lines.
//!
//! Subscribers are opaque string identifiers kept in subscription order;
//! duplicates are allowed and each duplicate receives its own delivery.
//! Delivery is one log line per subscriber with no acknowledgment and no
//! retry — stronger guarantees are explicitly out of scope.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::Notifier;

/// Ordered, duplicate-friendly subscriber list with log-based delivery.
#[derive(Default)]
pub struct NotificationCenter {
    subscribers: Mutex<Vec<String>>,
}

impl NotificationCenter {
    /// Create a center with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a subscriber. Subscribing the same id twice means two
    /// deliveries per message.
    pub fn subscribe(&self, id: impl Into<String>) {
        let id = id.into();
        tracing::info!(subscriber = %id, "subscriber added");
        self.lock().push(id);
    }

    /// Snapshot of subscriber ids, in subscription order.
    #[must_use]
    pub fn subscribers(&self) -> Vec<String> {
        self.lock().clone()
    }
}

impl Notifier for NotificationCenter {
    fn publish(&self, message: &str) {
        // Publishing with zero subscribers succeeds; the message is dropped.
        for subscriber in self.lock().iter() {
            tracing::info!(subscriber = %subscriber, %message, "notification delivered");
        }
    }
}
