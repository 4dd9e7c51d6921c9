//! Simulated camera that records only while switched on.

use homesched_domain::device::Device;

/// A simulated security camera.
pub struct Camera {
    name: String,
    on: bool,
    battery_level: u8,
}

impl Camera {
    /// Create a camera, switched off with a full battery.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: false,
            battery_level: 100,
        }
    }

    /// Override the battery level (percent).
    #[must_use]
    pub fn with_battery_level(mut self, battery_level: u8) -> Self {
        self.battery_level = battery_level;
        self
    }
}

impl Device for Camera {
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
        if self.on {
            format!("{} is recording.", self.name)
        } else {
            format!("{} is off.", self.name)
        }
    }
}
