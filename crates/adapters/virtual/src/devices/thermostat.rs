//! Simulated thermostat with the temperature-control capability.

use homesched_domain::device::{Device, TemperatureControl};

/// A simulated thermostat holding a target temperature.
pub struct Thermostat {
    name: String,
    on: bool,
    battery_level: u8,
    temperature: f64,
}

impl Thermostat {
    /// Create a thermostat with the given target temperature, switched off
    /// with a full battery.
    pub fn new(name: impl Into<String>, temperature: f64) -> Self {
        Self {
            name: name.into(),
            on: false,
            battery_level: 100,
            temperature,
        }
    }

    /// Override the battery level (percent).
    #[must_use]
    pub fn with_battery_level(mut self, battery_level: u8) -> Self {
        self.battery_level = battery_level;
        self
    }

    /// The current target temperature in °C.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl Device for Thermostat {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn battery_level(&self) -> u8 {
        self.battery_level
    }

    fn set_power(&mut self, on: bool) {
        self.on = on;
    }

    fn perform_action(&mut self) -> String {
        format!("{} holding {}°C.", self.name, self.temperature)
    }

    fn temperature_control(&mut self) -> Option<&mut dyn TemperatureControl> {
        Some(self)
    }
}

impl TemperatureControl for Thermostat {
    fn set_temperature(&mut self, degrees: f64) -> String {
        // Changing the target while off is a no-op with a status line,
        // matching the device's original behavior.
        if self.on {
            self.temperature = degrees;
            format!("{} set to {degrees}°C.", self.name)
        } else {
            format!("{} is off, cannot change temperature.", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_change_temperature_while_on() {
        let mut thermostat = Thermostat::new("Bedroom Thermostat", 22.0);
        thermostat.set_power(true);
        let status = thermostat.set_temperature(20.0);
        assert_eq!(status, "Bedroom Thermostat set to 20°C.");
        assert!((thermostat.temperature() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_keep_temperature_while_off() {
        let mut thermostat = Thermostat::new("Bedroom Thermostat", 22.0);
        let status = thermostat.set_temperature(20.0);
        assert_eq!(status, "Bedroom Thermostat is off, cannot change temperature.");
        assert!((thermostat.temperature() - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_expose_temperature_capability() {
        let mut thermostat = Thermostat::new("Bedroom Thermostat", 22.0);
        assert!(thermostat.temperature_control().is_some());
    }

    #[test]
    fn should_report_held_temperature_on_perform_action() {
        let mut thermostat = Thermostat::new("Bedroom Thermostat", 22.0);
        assert_eq!(
            thermostat.perform_action(),
            "Bedroom Thermostat holding 22°C."
        );
    }
}
