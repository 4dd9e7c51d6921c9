//! Common error types used across the workspace.
//!
//! Registration-time errors are returned synchronously to the caller.
//! Dispatch errors raised inside a scheduler tick are caught and logged by
//! the loop rather than propagated, so one bad entry never stops the others.

use crate::command::Command;

/// Errors produced by the homesched core.
#[derive(Debug, thiserror::Error)]
pub enum HomeschedError {
    /// A device with the same name is already registered.
    #[error("device {0:?} is already registered")]
    DuplicateName(String),

    /// No registered device matches the requested name.
    #[error("device {0:?} not found")]
    DeviceNotFound(String),

    /// The device does not advertise the capability the command requires.
    #[error("device {device:?} does not support {command}")]
    UnsupportedCommand {
        /// Name of the device the command targeted.
        device: String,
        /// The rejected command.
        command: Command,
    },

    /// A trigger time was not a valid `HH:MM` 24-hour string.
    #[error("invalid trigger time {0:?}, expected HH:MM")]
    InvalidTimeFormat(String),

    /// The scheduler loop was started more than once.
    #[error("scheduler is already running or has been stopped")]
    AlreadyRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_duplicate_name() {
        let err = HomeschedError::DuplicateName("Lamp".to_string());
        assert_eq!(err.to_string(), "device \"Lamp\" is already registered");
    }

    #[test]
    fn should_describe_unsupported_command() {
        let err = HomeschedError::UnsupportedCommand {
            device: "Camera".to_string(),
            command: Command::SetTemperature { degrees: 21.0 },
        };
        assert_eq!(
            err.to_string(),
            "device \"Camera\" does not support set_temperature(21)"
        );
    }

    #[test]
    fn should_describe_invalid_time_format() {
        let err = HomeschedError::InvalidTimeFormat("25:99".to_string());
        assert_eq!(err.to_string(), "invalid trigger time \"25:99\", expected HH:MM");
    }
}
