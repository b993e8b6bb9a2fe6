//! Transport module — deploys vehicles through the factory method.

use std::sync::{Mutex, MutexGuard, PoisonError};

use smartcity_domain::error::ConfigurationError;
use smartcity_domain::report::Report;
use smartcity_domain::vehicle::Vehicle;

/// Owns the roster of every vehicle deployed so far.
///
/// The roster only grows; its length is the operations counter shown in the
/// status report.
#[derive(Debug, Default)]
pub struct TransportModule {
    roster: Mutex<Vec<Vehicle>>,
}

impl TransportModule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vehicle from `label` and append it to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownVehicleType`] for an unknown
    /// label; the roster is left unchanged.
    #[tracing::instrument(skip(self))]
    pub fn deploy(&self, label: &str) -> Result<Vehicle, ConfigurationError> {
        let vehicle = Vehicle::create(label)?;
        self.lock_roster().push(vehicle.clone());
        tracing::info!(vehicle_id = %vehicle.id, kind = %vehicle.kind, "vehicle deployed");
        Ok(vehicle)
    }

    /// Deploy a vehicle and narrate the outcome.
    ///
    /// Unknown labels are reported in the returned [`Report`] rather than
    /// propagated.
    pub fn create_vehicle(&self, label: &str) -> Report {
        let mut report = Report::new();
        match self.deploy(label) {
            Ok(vehicle) => {
                report
                    .line(format!(
                        "Transport Module: Created and deployed a new {}.",
                        vehicle.kind
                    ))
                    .line(format!("Operation: {}", vehicle.operate()));
            }
            Err(err) => {
                tracing::warn!(error = %err, "vehicle creation failed");
                report.line(format!("Transport Module Error: {err}"));
            }
        }
        report
    }

    pub fn start_traffic_control(&self) -> Report {
        tracing::info!("traffic control activated");
        Report::from("Transport Module: Traffic control system activated.")
    }

    pub fn get_status(&self) -> Report {
        Report::from(format!(
            "Transport Module Status: {} vehicles currently deployed.",
            self.vehicle_count()
        ))
    }

    #[must_use]
    pub fn vehicle_count(&self) -> usize {
        self.lock_roster().len()
    }

    /// Snapshot of the roster in deployment order.
    #[must_use]
    pub fn roster(&self) -> Vec<Vehicle> {
        self.lock_roster().clone()
    }

    fn lock_roster(&self) -> MutexGuard<'_, Vec<Vehicle>> {
        self.roster.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
