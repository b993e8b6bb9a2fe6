//! # smartcity-adapter-virtual
//!
//! Simulated devices for the smartcity demonstration.
//!
//! ## Provided devices
//!
//! | Device | Port | Behaviour |
//! |--------|------|-----------|
//! | Basic / Advanced traffic sensor | `Sensor` | Describes traffic monitoring |
//! | Basic / Advanced street light | `Actuator` | Describes light adjustment |
//! | Legacy camera (adapted) | `SecurityFeed` | Proprietary feed behind the uniform call |
//! | City energy meter | `EnergyDataService` | Basic and sensitive consumption figures |
//!
//! [`build_controller`] wires all of them into a complete
//! [`SmartCityController`].
//!
//! ## Dependency rule
//!
//! Depends on `smartcity-app` (port traits) and `smartcity-domain` only.

pub mod devices;

use smartcity_app::controller::SmartCityController;
use smartcity_app::energy_proxy::EnergyDataProxy;
use smartcity_app::feed_decorator::FeedDecorator;
use smartcity_app::ports::{DeviceFactory, SecurityFeed};
use smartcity_app::services::{EnergyModule, LightingModule, SecurityModule, TransportModule};
use smartcity_domain::device::DeviceFamily;
use smartcity_domain::error::SmartCityError;

use devices::{
    AdvancedDeviceFactory, BasicDeviceFactory, CityEnergyMeter, LegacySecurityCamera,
    SecurityCameraAdapter,
};

/// Concrete factory for `family`.
#[must_use]
pub fn device_factory(family: DeviceFamily) -> Box<dyn DeviceFactory> {
    match family {
        DeviceFamily::Basic => Box::new(BasicDeviceFactory),
        DeviceFamily::Advanced => Box::new(AdvancedDeviceFactory),
    }
}

/// Parse `selector` and return the matching factory.
///
/// # Errors
///
/// Returns [`SmartCityError::InvalidConfiguration`] for anything other than
/// `basic` or `advanced` (case-insensitive).
pub fn factory_from_selector(selector: &str) -> Result<Box<dyn DeviceFactory>, SmartCityError> {
    let family: DeviceFamily = selector.parse()?;
    Ok(device_factory(family))
}

/// The legacy camera, adapted to [`SecurityFeed`] and decorated once.
#[must_use]
pub fn security_feed() -> impl SecurityFeed {
    FeedDecorator::new(SecurityCameraAdapter::new(LegacySecurityCamera))
}

/// A proxy that connects to the [`CityEnergyMeter`] on first use.
#[must_use]
pub fn energy_proxy() -> EnergyDataProxy {
    EnergyDataProxy::new(CityEnergyMeter::connect)
}

/// Build a controller whose lighting module uses `family` devices.
#[must_use]
pub fn build_controller(family: DeviceFamily) -> SmartCityController {
    SmartCityController::new(
        TransportModule::new(),
        LightingModule::new(device_factory(family)),
        SecurityModule::new(security_feed()),
        EnergyModule::new(energy_proxy()),
    )
}
