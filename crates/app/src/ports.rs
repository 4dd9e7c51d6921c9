//! Port definitions — the seams between the scheduler and the outside world.
//!
//! The loop never reads the system clock or prints anything directly; it
//! goes through these traits so tests can pin the time and record deliveries.

use chrono::NaiveTime;

/// Source of the current wall-clock time of day.
pub trait Clock: Send + Sync {
    /// The current time of day, as observed at the start of a tick.
    fn time_of_day(&self) -> NaiveTime;
}

/// System clock backed by the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self) -> NaiveTime {
        homesched_domain::time::wall_clock()
    }
}

/// Receives free-text status messages for delivery to subscribers.
///
/// Delivery is fire-and-forget: no acknowledgment, no retry.
pub trait Notifier: Send + Sync {
    /// Deliver `message` to every current subscriber.
    fn publish(&self, message: &str);
}

impl<T: Notifier> Notifier for std::sync::Arc<T> {
    fn publish(&self, message: &str) {
        (**self).publish(message);
    }
}

impl<T: Clock> Clock for std::sync::Arc<T> {
    fn time_of_day(&self) -> NaiveTime {
        (**self).time_of_day()
    }
}
