//! Virtual device implementations — lighting families, camera, energy meter.

mod advanced;
mod basic;
mod camera;
mod meter;

pub use advanced::{AdvancedDeviceFactory, AdvancedStreetLight, AdvancedTrafficSensor};
pub use basic::{BasicDeviceFactory, BasicStreetLight, BasicTrafficSensor};
pub use camera::{LegacySecurityCamera, SecurityCameraAdapter};
pub use meter::CityEnergyMeter;
