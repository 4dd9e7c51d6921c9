//! Schedule store — the lock-guarded collection of pending entries.
//!
//! The store exclusively owns the entry collection. The scheduler loop only
//! reads snapshots and requests deletion through [`ScheduleStore::remove`],
//! so there is exactly one mutation point and the lock is held per
//! operation, never across a dispatch.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveTime;

use homesched_domain::command::Command;
use homesched_domain::error::HomeschedError;
use homesched_domain::schedule::ScheduleEntry;

/// Thread-safe store of pending schedule entries, in insertion order.
#[derive(Default)]
pub struct ScheduleStore {
    entries: Mutex<Vec<ScheduleEntry>>,
}

impl ScheduleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ScheduleEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an entry. Duplicates are allowed; this always succeeds.
    pub fn add(&self, entry: ScheduleEntry) {
        tracing::info!(device = %entry.device, command = %entry.command, at = %entry.at.format("%H:%M"), "entry scheduled");
        self.lock().push(entry);
    }

    /// Parse a `HH:MM` trigger time and append the resulting entry.
    ///
    /// # Errors
    ///
    /// Returns [`HomeschedError::InvalidTimeFormat`] on a malformed time
    /// string; the store is left untouched.
    pub fn schedule(
        &self,
        device: impl Into<String>,
        command: Command,
        at: &str,
    ) -> Result<(), HomeschedError> {
        self.add(ScheduleEntry::parse(device, command, at)?);
        Ok(())
    }

    /// Entries whose trigger time has passed at `now`, in insertion order.
    ///
    /// Recomputed fresh on every call — there is no cursor to invalidate
    /// when the store changes between ticks.
    #[must_use]
    pub fn due_entries(&self, now: NaiveTime) -> Vec<ScheduleEntry> {
        self.lock()
            .iter()
            .filter(|entry| entry.is_due(now))
            .cloned()
            .collect()
    }

    /// Remove the first entry equal to `entry`, returning whether one was
    /// removed.
    ///
    /// A missing entry is a silent no-op: a concurrent tick (or an explicit
    /// cancellation) may already have claimed it, and exactly one claimant
    /// must win.
    pub fn remove(&self, entry: &ScheduleEntry) -> bool {
        let mut entries = self.lock();
        if let Some(index) = entries.iter().position(|candidate| candidate == entry) {
            entries.remove(index);
            true
        } else {
            false
        }
    }

    /// Cancel a pending entry. Alias for [`remove`](Self::remove) with
    /// client-facing intent.
    pub fn cancel(&self, entry: &ScheduleEntry) -> bool {
        let cancelled = self.remove(entry);
        if cancelled {
            tracing::info!(device = %entry.device, command = %entry.command, "entry cancelled");
        }
        cancelled
    }

    /// Snapshot of all pending entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<ScheduleEntry> {
        self.lock().clone()
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no entries are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn entry(device: &str, at: NaiveTime) -> ScheduleEntry {
        ScheduleEntry::new(device, Command::TurnOn, at)
    }

    #[test]
    fn should_keep_insertion_order() {
        let store = ScheduleStore::new();
        store.add(entry("B", hm(9, 0)));
        store.add(entry("A", hm(8, 0)));
        store.add(entry("C", hm(10, 0)));

        let names: Vec<_> = store.entries().into_iter().map(|e| e.device).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn should_allow_duplicate_entries() {
        let store = ScheduleStore::new();
        store.add(entry("Lamp", hm(8, 0)));
        store.add(entry("Lamp", hm(8, 0)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn should_return_only_due_entries_in_insertion_order() {
        let store = ScheduleStore::new();
        store.add(entry("Late", hm(20, 0)));
        store.add(entry("Early", hm(6, 0)));
        store.add(entry("Noon", hm(12, 0)));

        let due: Vec<_> = store
            .due_entries(hm(12, 0))
            .into_iter()
            .map(|e| e.device)
            .collect();
        assert_eq!(due, ["Early", "Noon"]);
    }

    #[test]
    fn should_recompute_due_entries_on_every_call() {
        let store = ScheduleStore::new();
        store.add(entry("Lamp", hm(8, 0)));
        assert_eq!(store.due_entries(hm(9, 0)).len(), 1);
        store.add(entry("Lamp", hm(8, 30)));
        assert_eq!(store.due_entries(hm(9, 0)).len(), 2);
    }

    #[test]
    fn should_remove_exactly_one_of_identical_entries() {
        let store = ScheduleStore::new();
        let duplicated = entry("Lamp", hm(8, 0));
        store.add(duplicated.clone());
        store.add(duplicated.clone());

        assert!(store.remove(&duplicated));
        assert_eq!(store.len(), 1);
        assert!(store.remove(&duplicated));
        assert!(store.is_empty());
    }

    #[test]
    fn should_ignore_removal_of_absent_entry() {
        let store = ScheduleStore::new();
        assert!(!store.remove(&entry("Ghost", hm(8, 0))));
    }

    #[test]
    fn should_cancel_pending_entry() {
        let store = ScheduleStore::new();
        let pending = entry("Lamp", hm(8, 0));
        store.add(pending.clone());
        assert!(store.cancel(&pending));
        assert!(store.is_empty());
        assert!(!store.cancel(&pending));
    }

    #[test]
    fn should_schedule_with_valid_time_string() {
        let store = ScheduleStore::new();
        store.schedule("Lamp", Command::TurnOff, "18:00").unwrap();
        assert_eq!(store.entries()[0].at, hm(18, 0));
    }

    #[test]
    fn should_not_store_anything_for_malformed_time() {
        let store = ScheduleStore::new();
        let result = store.schedule("Lamp", Command::TurnOff, "18h00");
        assert!(matches!(
            result,
            Err(HomeschedError::InvalidTimeFormat(_))
        ));
        assert!(store.is_empty());
    }
}
