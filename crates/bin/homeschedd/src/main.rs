//! # homeschedd — homesched daemon
//!
//! Composition root that wires the registry, schedule store, scheduler, and
//! notification center together and keeps the loop running until ctrl-c.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Register the demo devices and schedule entries (when enabled)
//! - Start the scheduler and stop it deterministically on shutdown
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use homesched_adapter_virtual::{Camera, Light, Thermostat};
use homesched_app::notification::NotificationCenter;
use homesched_app::ports::SystemClock;
use homesched_app::registry::DeviceRegistry;
use homesched_app::schedule_store::ScheduleStore;
use homesched_app::scheduler::Scheduler;
use homesched_domain::command::Command;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let registry = Arc::new(DeviceRegistry::new());
    let store = Arc::new(ScheduleStore::new());
    let notifier = Arc::new(NotificationCenter::new());

    if config.demo.enabled {
        wire_demo(&registry, &store, &notifier)?;
    }

    let scheduler = Scheduler::new(
        Arc::clone(&registry),
        Arc::clone(&store),
        Arc::new(SystemClock),
        Arc::clone(&notifier),
    )
    .with_tick_interval(config.tick_interval());

    scheduler.start()?;
    tracing::info!(pending = store.len(), "homeschedd running, ctrl-c to stop");

    tokio::signal::ctrl_c().await?;
    scheduler.stop().await;
    tracing::info!(pending = store.len(), "homeschedd stopped");

    Ok(())
}

/// Register the simulated devices and a handful of schedule entries.
fn wire_demo(
    registry: &DeviceRegistry,
    store: &ScheduleStore,
    notifier: &NotificationCenter,
) -> Result<(), Box<dyn std::error::Error>> {
    notifier.subscribe("user");

    registry.add(Box::new(Light::new("Living Room Light", 70, "White")))?;
    registry.add(Box::new(Thermostat::new("Bedroom Thermostat", 22.0)))?;
    registry.add(Box::new(Camera::new("Porch Camera")))?;

    store.schedule("Living Room Light", Command::TurnOff, "18:00")?;
    store.schedule("Bedroom Thermostat", Command::TurnOn, "20:00")?;
    store.schedule(
        "Bedroom Thermostat",
        Command::SetTemperature { degrees: 20.0 },
        "20:01",
    )?;
    store.schedule("Porch Camera", Command::PerformAction, "22:00")?;

    Ok(())
}
