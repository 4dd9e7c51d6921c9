//! # homesched-app
//!
//! Application core — the scheduler and the stores it orchestrates.
//!
//! ## Responsibilities
//! - [`DeviceRegistry`](registry::DeviceRegistry) — addressable devices keyed
//!   by name, typed command dispatch
//! - [`ScheduleStore`](schedule_store::ScheduleStore) — lock-guarded pending
//!   entries with atomic remove-when-fired
//! - [`Scheduler`](scheduler::Scheduler) — the recurring background tick that
//!   fires due entries
//! - [`NotificationCenter`](notification::NotificationCenter) — fire-and-forget
//!   delivery of status lines to subscribers
//! - **Port traits** ([`Clock`](ports::Clock), [`Notifier`](ports::Notifier))
//!   so tests can substitute the wall clock and the sink
//!
//! ## Dependency rule
//! Depends on `homesched-domain` only (plus `tokio` sync/time for the loop).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod notification;
pub mod ports;
pub mod registry;
pub mod schedule_store;
pub mod scheduler;
