//! # homesched-domain
//!
//! Pure domain model for the homesched home-automation core.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, time-of-day handling
//! - Define the **Device** contract (on/off state, battery level, optional
//!   capabilities such as temperature control)
//! - Define **Commands** (`turn_on`, `turn_off`, `set_temperature`,
//!   `perform_action`)
//! - Define **Schedule entries** (device + command + trigger time-of-day)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod command;
pub mod device;
pub mod error;
pub mod schedule;
pub mod time;
