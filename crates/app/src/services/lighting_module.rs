//! Lighting module — drives a sensor/actuator pair from one device family.

use smartcity_domain::device::DeviceFamily;
use smartcity_domain::error::SmartCityError;
use smartcity_domain::report::Report;

use crate::ports::{Actuator, DeviceFactory, Sensor};

/// Lighting subsystem built on an abstract [`DeviceFactory`].
pub struct LightingModule {
    factory: Box<dyn DeviceFactory>,
    sensor: Box<dyn Sensor>,
    actuator: Box<dyn Actuator>,
}

impl LightingModule {
    /// Build the module, creating its sensor and actuator from `factory`.
    pub fn new(factory: Box<dyn DeviceFactory>) -> Self {
        let (sensor, actuator) = factory.create_pair();
        tracing::info!(family = %factory.family(), "lighting module initialized");
        Self {
            factory,
            sensor,
            actuator,
        }
    }

    /// Parse `selector` into a [`DeviceFamily`] and build the module with the
    /// factory `resolve` returns for it.
    ///
    /// # Errors
    ///
    /// Returns [`SmartCityError::InvalidConfiguration`] when `selector` is
    /// neither `basic` nor `advanced`.
    pub fn from_selector<R>(selector: &str, resolve: R) -> Result<Self, SmartCityError>
    where
        R: FnOnce(DeviceFamily) -> Box<dyn DeviceFactory>,
    {
        let family: DeviceFamily = selector.parse()?;
        Ok(Self::new(resolve(family)))
    }

    #[must_use]
    pub fn family(&self) -> DeviceFamily {
        self.factory.family()
    }

    pub fn sensor(&self) -> &dyn Sensor {
        self.sensor.as_ref()
    }

    pub fn actuator(&self) -> &dyn Actuator {
        self.actuator.as_ref()
    }

    /// Line announcing how the module was set up.
    pub fn initialized(&self) -> Report {
        Report::from(format!(
            "Lighting Module: Initialized with {} devices.",
            self.family().label()
        ))
    }

    pub fn activate_smart_lighting(&self) -> Report {
        let mut report = Report::new();
        report
            .line("Lighting Module: Smart lighting system activated.")
            .line(format!("Sensor Action: {}", self.sensor.monitor()))
            .line(format!("Actuator Action: {}", self.actuator.actuate()));
        report
    }

    pub fn adjust_brightness_for_saving(&self) -> Report {
        tracing::info!("dimming street lights for energy saving");
        let mut report = Report::new();
        report
            .line("Lighting Module: Adjusting brightness for energy saving.")
            .line(format!(
                "Actuator Action: {} (Energy Saving Mode)",
                self.actuator.actuate()
            ));
        report
    }

    pub fn get_status(&self) -> Report {
        Report::from(format!(
            "Lighting Module Status: Active with {} devices.",
            self.factory.name()
        ))
    }
}
