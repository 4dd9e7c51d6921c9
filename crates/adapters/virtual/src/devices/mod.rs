//! Simulated device implementations.

pub mod camera;
pub mod light;
pub mod thermostat;
