//! Device — the contract every controllable device fulfils.
//!
//! The scheduler core references devices, it does not own their behavior:
//! concrete device types live in adapter crates. Optional behaviors are
//! modelled as capabilities queried at dispatch time rather than checked by
//! concrete type, so the registry never needs to know which device kinds
//! exist.

/// Core contract for an addressable device.
///
/// Implementations must keep `name` stable for the lifetime of the device —
/// it is the registry key.
pub trait Device: Send {
    /// Unique device name (registry key).
    fn name(&self) -> &str;

    /// Whether the device is currently switched on.
    fn is_on(&self) -> bool;

    /// Battery level in percent, 0–100.
    fn battery_level(&self) -> u8;

    /// Raw power-state mutation. Policy (e.g. the empty-battery gate on
    /// `turn_on`) lives in the registry, not here.
    fn set_power(&mut self, on: bool);

    /// Perform the device's type-specific behavior, returning a
    /// human-readable status line.
    fn perform_action(&mut self) -> String;

    /// Query the temperature-control capability, if the device has one.
    fn temperature_control(&mut self) -> Option<&mut dyn TemperatureControl> {
        None
    }
}

/// Optional capability: the device can hold a target temperature.
pub trait TemperatureControl {
    /// Set the target temperature, returning a human-readable status line.
    fn set_temperature(&mut self, degrees: f64) -> String;
}
