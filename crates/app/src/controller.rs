//! City controller — the single facade over every subsystem module.
//!
//! Each facade operation frames the narration of exactly one module call
//! (or a fixed sequence of calls for the city-wide operations) and returns
//! it as a [`Report`]. Module errors are not translated.

use smartcity_domain::device::DeviceFamily;
use smartcity_domain::report::Report;
use smartcity_domain::role::Role;

use crate::services::{EnergyModule, LightingModule, SecurityModule, TransportModule};

/// Unified entry point to the transport, lighting, security and energy
/// subsystems.
///
/// The controller is `Send + Sync`; the binary keeps exactly one instance in
/// a process-wide `OnceLock`.
pub struct SmartCityController {
    transport: TransportModule,
    lighting: LightingModule,
    security: SecurityModule,
    energy: EnergyModule,
    initialization: Report,
}

impl SmartCityController {
    /// Assemble a controller from already-built modules.
    pub fn new(
        transport: TransportModule,
        lighting: LightingModule,
        security: SecurityModule,
        energy: EnergyModule,
    ) -> Self {
        tracing::info!(
            lighting_family = %lighting.family(),
            "smart city controller initialized"
        );
        let mut initialization =
            Report::from("SmartCityController initialized (Singleton instance created).");
        initialization
            .append(lighting.initialized())
            .append(security.initialized())
            .append(energy.initialized());
        Self {
            transport,
            lighting,
            security,
            energy,
            initialization,
        }
    }

    /// What happened while the controller and its modules were set up.
    ///
    /// Recorded once at construction; a shared controller reports the same
    /// lines no matter how often it is acquired.
    pub fn initialization_report(&self) -> &Report {
        &self.initialization
    }

    /// Starts all core city operations.
    #[tracing::instrument(skip(self))]
    pub fn start_city_operations(&self) -> Report {
        let mut report = Report::from("--- Starting Smart City Operations ---");
        report
            .append(self.transport.start_traffic_control())
            .append(self.lighting.activate_smart_lighting())
            .append(self.security.deploy_security_system())
            .append(self.energy.start_monitoring())
            .line("--- All core operations are active. ---");
        report
    }

    #[tracing::instrument(skip(self))]
    pub fn optimize_energy_usage(&self) -> Report {
        let mut report = Report::from("--- Optimizing Energy Usage ---");
        report
            .append(self.lighting.adjust_brightness_for_saving())
            .append(self.energy.report_usage())
            .line("--- Optimization complete. ---");
        report
    }

    pub fn get_city_status(&self) -> Report {
        let mut report = Report::from("--- Smart City Status Report ---");
        report
            .append(self.transport.get_status())
            .append(self.lighting.get_status())
            .append(self.security.get_status())
            .append(self.energy.get_status())
            .line("--- End of Status Report ---");
        report
    }

    /// Create a vehicle of `vehicle_type`. Unknown types are reported, not
    /// returned as errors.
    #[tracing::instrument(skip(self))]
    pub fn manage_transport(&self, vehicle_type: &str) -> Report {
        let mut report = Report::from(format!(
            "--- Managing Transport: Creating a {vehicle_type} ---"
        ));
        report.append(self.transport.create_vehicle(vehicle_type));
        report
    }

    #[tracing::instrument(skip(self))]
    pub fn check_security_feed(&self) -> Report {
        let mut report = Report::from("--- Checking Security Feed ---");
        report.append(self.security.check_feed());
        report
    }

    #[tracing::instrument(skip(self))]
    pub fn request_sensitive_energy_data(&self, role: &Role) -> Report {
        let mut report = Report::from(format!(
            "--- Requesting Sensitive Energy Data as {role} ---"
        ));
        report.append(self.energy.get_sensitive_data(role));
        report
    }

    #[must_use]
    pub fn vehicle_count(&self) -> usize {
        self.transport.vehicle_count()
    }

    #[must_use]
    pub fn lighting_family(&self) -> DeviceFamily {
        self.lighting.family()
    }

    pub fn energy(&self) -> &EnergyModule {
        &self.energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy_proxy::EnergyDataProxy;
    use crate::feed_decorator::FeedDecorator;
    use crate::ports::{Actuator, DeviceFactory, EnergyDataService, SecurityFeed, Sensor};

    struct Lamp;
    struct Eye;
    struct Kit;
    struct Cam;
    struct Grid;

    impl Sensor for Eye {
        fn family(&self) -> DeviceFamily {
            DeviceFamily::Basic
        }

        fn monitor(&self) -> String {
            "eye".to_string()
        }
    }

    impl Actuator for Lamp {
        fn family(&self) -> DeviceFamily {
            DeviceFamily::Basic
        }

        fn actuate(&self) -> String {
            "lamp".to_string()
        }
    }

    impl DeviceFactory for Kit {
        fn family(&self) -> DeviceFamily {
            DeviceFamily::Basic
        }

        fn name(&self) -> &'static str {
            "Kit"
        }

        fn create_sensor(&self) -> Box<dyn Sensor> {
            Box::new(Eye)
        }

        fn create_actuator(&self) -> Box<dyn Actuator> {
            Box::new(Lamp)
        }
    }

    impl SecurityFeed for Cam {
        fn start_feed(&self) -> String {
            "cam".to_string()
        }
    }

    impl EnergyDataService for Grid {
        fn basic_data(&self) -> String {
            "grid basic".to_string()
        }

        fn sensitive_data(&self) -> String {
            "grid secret".to_string()
        }
    }

    fn controller() -> SmartCityController {
        SmartCityController::new(
            TransportModule::new(),
            LightingModule::new(Box::new(Kit)),
            SecurityModule::new(FeedDecorator::new(Cam)),
            EnergyModule::new(EnergyDataProxy::new(|| Grid)),
        )
    }

    #[test]
    fn should_frame_city_operations_with_header_and_footer() {
        let report = controller().start_city_operations();
        let lines = report.lines();
        assert_eq!(lines[0], "--- Starting Smart City Operations ---");
        assert_eq!(lines[lines.len() - 1], "--- All core operations are active. ---");
        assert!(report.contains("Traffic control"));
        assert!(report.contains("Sensor Action: eye"));
        assert!(report.contains("security system deployed"));
        assert!(report.contains("grid basic"));
    }

    #[test]
    fn should_report_each_subsystem_in_status() {
        let report = controller().get_city_status();
        for prefix in ["Transport", "Lighting", "Security", "Energy"] {
            assert!(report.contains(&format!("{prefix} Module Status")), "{prefix}");
        }
    }

    #[test]
    fn should_delegate_vehicle_creation_to_transport() {
        let controller = controller();
        controller.manage_transport("tram");
        let report = controller.manage_transport("zeppelin");
        assert_eq!(controller.vehicle_count(), 1);
        assert!(report.contains("Transport Module Error"));
        assert!(
            controller
                .get_city_status()
                .contains("1 vehicles currently deployed")
        );
    }

    #[test]
    fn should_return_decorated_feed() {
        let report = controller().check_security_feed();
        assert!(report.contains("Encrypted and Logged: cam"));
    }

    #[test]
    fn should_gate_sensitive_energy_data_by_role() {
        let controller = controller();
        let denied = controller.request_sensitive_energy_data(&Role::Citizen);
        assert!(!denied.contains("grid secret"));
        assert!(!controller.energy().proxy().is_connected());

        let granted = controller.request_sensitive_energy_data(&Role::EnergyManager);
        assert!(granted.contains("grid secret"));
    }

    #[test]
    fn should_dim_lights_and_report_usage_when_optimizing() {
        let report = controller().optimize_energy_usage();
        assert!(report.contains("lamp (Energy Saving Mode)"));
        assert!(report.contains("basic usage report"));
    }

    #[test]
    fn should_expose_lighting_family() {
        assert_eq!(controller().lighting_family(), DeviceFamily::Basic);
    }

    #[test]
    fn should_record_initialization_of_controller_and_modules() {
        let controller = controller();
        let lines = controller.initialization_report().lines();
        assert_eq!(
            lines[0],
            "SmartCityController initialized (Singleton instance created)."
        );
        assert_eq!(lines[1], "Lighting Module: Initialized with Basic devices.");
        assert!(lines[2].starts_with("Security Module: Initialized"));
        assert!(lines[3].starts_with("Energy Module: Initialized"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn should_narrate_decorator_steps_when_checking_feed() {
        let report = controller().check_security_feed();
        assert_eq!(
            report.lines(),
            [
                "--- Checking Security Feed ---",
                "Decorator: Encrypting security feed...",
                "Decorator: Logging feed activity...",
                "Encrypted and Logged: cam",
            ]
        );
    }

    #[test]
    fn should_deny_unrecognised_role_through_facade() {
        let controller = controller();
        let report = controller.request_sensitive_energy_data(&Role::from("Mayor"));
        assert!(report.contains("Requesting Sensitive Energy Data as Mayor"));
        assert!(report.contains("Access denied"));
        assert!(!report.contains("grid secret"));
        assert!(!controller.energy().proxy().is_connected());
    }
}
