//! Advanced device family — AI-assisted sensing and colour-tunable lights.

use smartcity_app::ports::{Actuator, DeviceFactory, Sensor};
use smartcity_domain::device::DeviceFamily;

/// Camera-based traffic sensor with on-board analysis.
#[derive(Debug, Default)]
pub struct AdvancedTrafficSensor;

impl Sensor for AdvancedTrafficSensor {
    fn family(&self) -> DeviceFamily {
        DeviceFamily::Advanced
    }

    fn monitor(&self) -> String {
        "Monitoring advanced traffic flow with AI analysis.".to_string()
    }
}

/// LED street light with colour temperature control.
#[derive(Debug, Default)]
pub struct AdvancedStreetLight;

impl Actuator for AdvancedStreetLight {
    fn family(&self) -> DeviceFamily {
        DeviceFamily::Advanced
    }

    fn actuate(&self) -> String {
        "Adjusting advanced street light color and intensity.".to_string()
    }
}

/// Factory for the [`DeviceFamily::Advanced`] products.
#[derive(Debug, Default)]
pub struct AdvancedDeviceFactory;

impl DeviceFactory for AdvancedDeviceFactory {
    fn family(&self) -> DeviceFamily {
        DeviceFamily::Advanced
    }

    fn name(&self) -> &'static str {
        "AdvancedDeviceFactory"
    }

    fn create_sensor(&self) -> Box<dyn Sensor> {
        Box::new(AdvancedTrafficSensor)
    }

    fn create_actuator(&self) -> Box<dyn Actuator> {
        Box::new(AdvancedStreetLight)
    }
}
