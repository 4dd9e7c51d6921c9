//! Simulated light with adjustable brightness and color.

use homesched_domain::device::Device;

/// A simulated dimmable light.
pub struct Light {
    name: String,
    on: bool,
    battery_level: u8,
    brightness: u8,
    color: String,
}

impl Light {
    /// Create a light with the given brightness (percent) and color,
    /// switched off with a full battery.
    pub fn new(name: impl Into<String>, brightness: u8, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: false,
            battery_level: 100,
            brightness,
            color: color.into(),
        }
    }

    /// Override the battery level (percent).
    #[must_use]
    pub fn with_battery_level(mut self, battery_level: u8) -> Self {
        self.battery_level = battery_level;
        self
    }
}

impl Device for Light {
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
        format!(
            "{} adjusted: brightness {}%, color {}.",
            self.name, self.brightness, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_off_with_full_battery() {
        let light = Light::new("Living Room Light", 70, "White");
        assert!(!light.is_on());
        assert_eq!(light.battery_level(), 100);
    }

    #[test]
    fn should_report_adjustment_on_perform_action() {
        let mut light = Light::new("Living Room Light", 70, "White");
        assert_eq!(
            light.perform_action(),
            "Living Room Light adjusted: brightness 70%, color White."
        );
    }

    #[test]
    fn should_not_expose_temperature_capability() {
        let mut light = Light::new("Living Room Light", 70, "White");
        assert!(light.temperature_control().is_none());
    }
}
