//! Device ports — sensors, actuators and the factories that pair them.

use smartcity_domain::device::DeviceFamily;

/// A device that observes the city.
pub trait Sensor: Send + Sync {
    /// Family this sensor belongs to.
    fn family(&self) -> DeviceFamily;

    /// Describe what the sensor is currently observing.
    fn monitor(&self) -> String;
}

/// A device that acts on the city.
pub trait Actuator: Send + Sync {
    /// Family this actuator belongs to.
    fn family(&self) -> DeviceFamily;

    /// Describe the action the actuator performs.
    fn actuate(&self) -> String;
}

/// Abstract factory producing a matched sensor/actuator pair.
///
/// Implementations must return devices whose [`family`](Sensor::family)
/// equals [`DeviceFactory::family`].
pub trait DeviceFactory: Send + Sync {
    fn family(&self) -> DeviceFamily;

    /// Name of the concrete factory, shown in status reports.
    fn name(&self) -> &'static str;

    fn create_sensor(&self) -> Box<dyn Sensor>;

    fn create_actuator(&self) -> Box<dyn Actuator>;

    /// Convenience: create both products in one call.
    fn create_pair(&self) -> (Box<dyn Sensor>, Box<dyn Actuator>) {
        (self.create_sensor(), self.create_actuator())
    }
}
