//! Port definitions — traits that device adapters implement.
//!
//! Ports are the boundaries between the subsystem modules and the concrete
//! (virtual) devices. Every port is `Send + Sync` so the controller built on
//! top of them can live in a process-wide `static`.

pub mod devices;
pub mod energy;
pub mod security;

pub use devices::{Actuator, DeviceFactory, Sensor};
pub use energy::EnergyDataService;
pub use security::SecurityFeed;
