//! Device registry — addressable devices keyed by unique name.
//!
//! The registry owns the devices and is the single place where command
//! semantics live: the empty-battery gate on `turn_on`, the capability query
//! for `set_temperature`. Devices themselves only expose raw state.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use homesched_domain::command::Command;
use homesched_domain::device::Device;
use homesched_domain::error::HomeschedError;

/// Point-in-time view of one registered device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStatus {
    /// Registry key.
    pub name: String,
    /// Power state.
    pub is_on: bool,
    /// Battery level in percent.
    pub battery_level: u8,
}

/// Thread-safe registry of devices, keyed by name.
#[derive(Default)]
pub struct DeviceRegistry {
    devices: Mutex<HashMap<String, Box<dyn Device>>>,
}

impl DeviceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Box<dyn Device>>> {
        // A poisoned lock means a device panicked mid-dispatch; the map
        // itself is still consistent, so keep serving.
        self.devices.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a device under its name.
    ///
    /// Unlike the original list-based store, duplicate names are rejected
    /// rather than silently shadowed.
    ///
    /// # Errors
    ///
    /// Returns [`HomeschedError::DuplicateName`] when a device with the same
    /// name is already registered.
    pub fn add(&self, device: Box<dyn Device>) -> Result<(), HomeschedError> {
        let name = device.name().to_string();
        let mut devices = self.lock();
        if devices.contains_key(&name) {
            return Err(HomeschedError::DuplicateName(name));
        }
        tracing::info!(device = %name, "device registered");
        devices.insert(name, device);
        Ok(())
    }

    /// Remove a device by name. A no-op when absent.
    pub fn remove(&self, name: &str) {
        if self.lock().remove(name).is_some() {
            tracing::info!(device = %name, "device removed");
        }
    }

    /// Whether a device with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Dispatch a command to the named device, returning the resulting
    /// status line.
    ///
    /// `turn_on` on a device with an empty battery is not an error: the
    /// state stays unchanged and the status line reports why.
    ///
    /// # Errors
    ///
    /// Returns [`HomeschedError::DeviceNotFound`] when no device matches
    /// `name`, or [`HomeschedError::UnsupportedCommand`] when the command
    /// requires a capability the device does not advertise.
    pub fn dispatch(&self, name: &str, command: &Command) -> Result<String, HomeschedError> {
        let mut devices = self.lock();
        let device = devices
            .get_mut(name)
            .ok_or_else(|| HomeschedError::DeviceNotFound(name.to_string()))?;

        let status = match command {
            Command::TurnOn => {
                if device.battery_level() == 0 {
                    format!("{name} cannot be turned on: battery is empty.")
                } else {
                    device.set_power(true);
                    format!("{name} turned on.")
                }
            }
            Command::TurnOff => {
                device.set_power(false);
                format!("{name} turned off.")
            }
            Command::SetTemperature { degrees } => {
                let control = device.temperature_control().ok_or_else(|| {
                    HomeschedError::UnsupportedCommand {
                        device: name.to_string(),
                        command: command.clone(),
                    }
                })?;
                control.set_temperature(*degrees)
            }
            Command::PerformAction => device.perform_action(),
        };
        tracing::debug!(device = %name, command = %command, %status, "command dispatched");
        Ok(status)
    }

    /// Snapshot of all registered devices, sorted by name.
    #[must_use]
    pub fn status(&self) -> Vec<DeviceStatus> {
        let devices = self.lock();
        let mut report: Vec<DeviceStatus> = devices
            .values()
            .map(|device| DeviceStatus {
                name: device.name().to_string(),
                is_on: device.is_on(),
                battery_level: device.battery_level(),
            })
            .collect();
        report.sort_by(|a, b| a.name.cmp(&b.name));
        report
    }
}
