//! Scheduler — the recurring background tick that fires due entries.
//!
//! The loop is a cancellable tokio task rather than a detached daemon
//! thread: the spawn handle is retained so [`Scheduler::stop`] can request
//! termination and *await* it, guaranteeing no dispatch happens after
//! `stop()` returns.
//!
//! Each tick captures `now` once, snapshots the due entries, and then
//! processes them in insertion order: the entry is atomically removed from
//! the store first (skipping it if a concurrent claimant won), and only
//! then dispatched — outside the store lock, so arbitrary device logic
//! never runs with the lock held and client `add` calls are starved for at
//! most one entry's processing time.
//!
//! An entry added mid-tick may fire in this tick or the next; at minute
//! trigger granularity that race is accepted rather than locked away.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::NaiveTime;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use homesched_domain::error::HomeschedError;

use crate::ports::{Clock, Notifier};
use crate::registry::DeviceRegistry;
use crate::schedule_store::ScheduleStore;

/// Poll interval used when none is configured (matches the original's 1s).
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Externally observable lifecycle state of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Not started yet.
    Idle,
    /// Polling in the background.
    Running,
    /// Terminated. Terminal — a stopped scheduler cannot be restarted.
    Stopped,
}

enum LoopState {
    Idle,
    Running {
        shutdown: watch::Sender<bool>,
        handle: JoinHandle<()>,
    },
    Stopped,
}

/// Background scheduler polling a [`ScheduleStore`] and dispatching due
/// entries through a [`DeviceRegistry`].
pub struct Scheduler<C, N> {
    registry: Arc<DeviceRegistry>,
    store: Arc<ScheduleStore>,
    clock: Arc<C>,
    notifier: Arc<N>,
    tick_interval: Duration,
    state: Mutex<LoopState>,
}

impl<C, N> Scheduler<C, N>
where
    C: Clock + 'static,
    N: Notifier + 'static,
{
    /// Create an idle scheduler with the default 1s tick interval.
    pub fn new(
        registry: Arc<DeviceRegistry>,
        store: Arc<ScheduleStore>,
        clock: Arc<C>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            registry,
            store,
            clock,
            notifier,
            tick_interval: DEFAULT_TICK_INTERVAL,
            state: Mutex::new(LoopState::Idle),
        }
    }

    /// Override the tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    fn lock_state(&self) -> MutexGuard<'_, LoopState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SchedulerState {
        match *self.lock_state() {
            LoopState::Idle => SchedulerState::Idle,
            LoopState::Running { .. } => SchedulerState::Running,
            LoopState::Stopped => SchedulerState::Stopped,
        }
    }

    /// Start the recurring tick task.
    ///
    /// Must be called from within a tokio runtime. The first tick runs
    /// immediately, then once per interval.
    ///
    /// # Errors
    ///
    /// Returns [`HomeschedError::AlreadyRunning`] unless the scheduler is
    /// `Idle` — only one running loop is permitted per registry/store
    /// pairing, and a stopped loop stays stopped.
    pub fn start(&self) -> Result<(), HomeschedError> {
        let mut state = self.lock_state();
        if !matches!(*state, LoopState::Idle) {
            return Err(HomeschedError::AlreadyRunning);
        }

        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let registry = Arc::clone(&self.registry);
        let store = Arc::clone(&self.store);
        let clock = Arc::clone(&self.clock);
        let notifier = Arc::clone(&self.notifier);
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(tick_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        run_tick(&registry, &store, clock.time_of_day(), notifier.as_ref());
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }
        });

        tracing::info!(interval = ?tick_interval, "scheduler started");
        *state = LoopState::Running { shutdown, handle };
        Ok(())
    }

    /// Stop the loop and wait for any in-flight tick to finish.
    ///
    /// Idempotent: stopping an idle or already-stopped scheduler is a
    /// no-op. After this returns, no further dispatches occur.
    pub async fn stop(&self) {
        let previous = {
            let mut state = self.lock_state();
            std::mem::replace(&mut *state, LoopState::Stopped)
        };
        if let LoopState::Running { shutdown, handle } = previous {
            // The select loop only observes the signal between ticks, so
            // awaiting the handle also awaits the tick in flight.
            let _ = shutdown.send(true);
            let _ = handle.await;
            tracing::info!("scheduler stopped");
        }
    }
}

/// One execution of the periodic due-entry check.
///
/// Per-entry dispatch failures are logged and suppressed so one
/// misconfigured entry never blocks the others due in the same tick.
fn run_tick<N: Notifier + ?Sized>(
    registry: &DeviceRegistry,
    store: &ScheduleStore,
    now: NaiveTime,
    notifier: &N,
) {
    for entry in store.due_entries(now) {
        // Claim the entry before dispatching; losing the claim means a
        // concurrent cancellation already took it.
        if !store.remove(&entry) {
            continue;
        }
        match registry.dispatch(&entry.device, &entry.command) {
            Ok(status) => {
                tracing::info!(device = %entry.device, command = %entry.command, "scheduled command fired");
                notifier.publish(&status);
            }
            Err(err) => {
                tracing::warn!(
                    device = %entry.device,
                    command = %entry.command,
                    error = %err,
                    "scheduled dispatch failed"
                );
            }
        }
    }
}
