//! Command — a controllable action directed at a device through the registry.
//!
//! The original string-based dispatch (`"turn_on"`, `"set_temperature"`, …)
//! is replaced by a typed enum so that a malformed command name cannot be
//! scheduled in the first place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A command the registry can dispatch to a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Command {
    /// Switch the device on. A no-op (with a status line) when the battery
    /// is empty.
    TurnOn,
    /// Switch the device off.
    TurnOff,
    /// Set the target temperature. Only valid on devices advertising the
    /// temperature-control capability.
    SetTemperature {
        /// Target temperature in °C.
        degrees: f64,
    },
    /// Delegate to the device's type-specific behavior.
    PerformAction,
}

impl Command {
    /// The wire/display name of the command, without arguments.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::TurnOn => "turn_on",
            Command::TurnOff => "turn_off",
            Command::SetTemperature { .. } => "set_temperature",
            Command::PerformAction => "perform_action",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetTemperature { degrees } => {
                write!(f, "set_temperature({degrees})")
            }
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_plain_commands_by_name() {
        assert_eq!(Command::TurnOn.to_string(), "turn_on");
        assert_eq!(Command::TurnOff.to_string(), "turn_off");
        assert_eq!(Command::PerformAction.to_string(), "perform_action");
    }

    #[test]
    fn should_display_set_temperature_with_argument() {
        let command = Command::SetTemperature { degrees: 21.5 };
        assert_eq!(command.to_string(), "set_temperature(21.5)");
    }
}
