//! Basic device family — plain traffic counting and on/off style lights.

use smartcity_app::ports::{Actuator, DeviceFactory, Sensor};
use smartcity_domain::device::DeviceFamily;

/// Loop-detector traffic sensor.
#[derive(Debug, Default)]
pub struct BasicTrafficSensor;

impl Sensor for BasicTrafficSensor {
    fn family(&self) -> DeviceFamily {
        DeviceFamily::Basic
    }

    fn monitor(&self) -> String {
        "Monitoring basic traffic flow.".to_string()
    }
}

/// Dimmable sodium street light.
#[derive(Debug, Default)]
pub struct BasicStreetLight;

impl Actuator for BasicStreetLight {
    fn family(&self) -> DeviceFamily {
        DeviceFamily::Basic
    }

    fn actuate(&self) -> String {
        "Adjusting basic street light intensity.".to_string()
    }
}

/// Factory for the [`DeviceFamily::Basic`] products.
#[derive(Debug, Default)]
pub struct BasicDeviceFactory;

impl DeviceFactory for BasicDeviceFactory {
    fn family(&self) -> DeviceFamily {
        DeviceFamily::Basic
    }

    fn name(&self) -> &'static str {
        "BasicDeviceFactory"
    }

    fn create_sensor(&self) -> Box<dyn Sensor> {
        Box::new(BasicTrafficSensor)
    }

    fn create_actuator(&self) -> Box<dyn Actuator> {
        Box::new(BasicStreetLight)
    }
}
