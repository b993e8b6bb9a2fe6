//! # smartcity-app
//!
//! Application layer — subsystem modules and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that device adapters must implement:
//!   - `Sensor` / `Actuator` / `DeviceFactory` — lighting device families
//!   - `SecurityFeed` — the uniform camera feed
//!   - `EnergyDataService` — the real energy data source
//! - Provide generic wrappers that need no concrete device:
//!   - `FeedDecorator` — encryption/logging around any `SecurityFeed`
//!   - `EnergyDataProxy` — role-gated, lazily connected energy data
//! - Define the four **subsystem modules** (transport, lighting, security, energy)
//! - Define the `SmartCityController` facade over those modules
//!
//! ## Dependency rule
//! Depends on `smartcity-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod controller;
pub mod energy_proxy;
pub mod feed_decorator;
pub mod ports;
pub mod services;
