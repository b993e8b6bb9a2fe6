//! Process-wide controller instance.
//!
//! The first call to [`init`] or [`controller`] builds the controller from
//! the virtual devices; every later call returns that same instance.

use std::sync::OnceLock;

use smartcity_adapter_virtual::build_controller;
use smartcity_app::controller::SmartCityController;
use smartcity_domain::device::DeviceFamily;

static CONTROLLER: OnceLock<SmartCityController> = OnceLock::new();

/// Build the controller with `family` lighting devices if it does not exist
/// yet, and return it.
///
/// The family only matters for the very first call; a mismatch afterwards is
/// logged and the existing instance is returned unchanged.
pub fn init(family: DeviceFamily) -> &'static SmartCityController {
    let controller = CONTROLLER.get_or_init(|| build_controller(family));
    if controller.lighting_family() != family {
        tracing::warn!(
            requested = %family,
            active = %controller.lighting_family(),
            "controller already initialized with another lighting family"
        );
    }
    controller
}

/// The shared controller, built with default devices on first access.
pub fn controller() -> &'static SmartCityController {
    CONTROLLER.get_or_init(|| build_controller(DeviceFamily::default()))
}
