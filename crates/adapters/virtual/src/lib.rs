//! # homesched-adapter-virtual
//!
//! Simulated devices for testing and demonstration.
//!
//! ## Provided devices
//!
//! | Device | Capabilities | Behaviour |
//! |--------|--------------|-----------|
//! | [`Light`] | — | `perform_action` reports brightness and color |
//! | [`Thermostat`] | temperature control | holds a target temperature; ignores changes while off |
//! | [`Camera`] | — | `perform_action` reports recording only while on |
//!
//! ## Dependency rule
//!
//! Depends on `homesched-domain` only — these are plain [`Device`]
//! implementations handed to the registry, which owns them.
//!
//! [`Device`]: homesched_domain::device::Device

mod devices;

pub use devices::camera::Camera;
pub use devices::light::Light;
pub use devices::thermostat::Thermostat;
