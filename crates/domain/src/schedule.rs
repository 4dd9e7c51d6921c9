//! Schedule entry — one pending `(device, command, trigger time)` triple.
//!
//! Trigger times have minute granularity and no date component. An entry
//! fires **at most once** and is removed when it does; it is never re-armed
//! for the next day. Duplicates are allowed and compared by value.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::error::HomeschedError;
use crate::time::parse_time_of_day;

/// A pending command for a named device, due at a time of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Name of the target device in the registry.
    pub device: String,
    /// Command to dispatch when due.
    pub command: Command,
    /// Trigger time of day (minute granularity).
    pub at: NaiveTime,
}

impl ScheduleEntry {
    /// Create an entry from an already-parsed trigger time.
    pub fn new(device: impl Into<String>, command: Command, at: NaiveTime) -> Self {
        Self {
            device: device.into(),
            command,
            at,
        }
    }

    /// Create an entry from a `HH:MM` trigger-time string.
    ///
    /// # Errors
    ///
    /// Returns [`HomeschedError::InvalidTimeFormat`] on a malformed time
    /// string; nothing malformed is ever constructed.
    pub fn parse(
        device: impl Into<String>,
        command: Command,
        at: &str,
    ) -> Result<Self, HomeschedError> {
        Ok(Self::new(device, command, parse_time_of_day(at)?))
    }

    /// Whether this entry is due at the given time of day.
    #[must_use]
    pub fn is_due(&self, now: NaiveTime) -> bool {
        self.at <= now
    }
}
