//! Vehicle — a transport unit deployed by the transport subsystem.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::id::VehicleId;

/// The kinds of vehicle the city can deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Bus,
    Tram,
    Taxi,
}

impl VehicleKind {
    /// Capitalised name used in narration.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Tram => "Tram",
            Self::Taxi => "Taxi",
        }
    }

    /// What a vehicle of this kind reports when operating.
    #[must_use]
    pub fn operation(self) -> &'static str {
        match self {
            Self::Bus => "Bus is operating on route 101.",
            Self::Tram => "Tram is operating on the central line.",
            Self::Taxi => "Taxi is available for on-demand service.",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bus" => Ok(Self::Bus),
            "tram" => Ok(Self::Tram),
            "taxi" => Ok(Self::Taxi),
            _ => Err(ConfigurationError::UnknownVehicleType(s.to_string())),
        }
    }
}

/// A deployed vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub kind: VehicleKind,
    pub deployed_at: DateTime<Utc>,
}

impl Vehicle {
    /// Factory method: turn a type label into a freshly deployed vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownVehicleType`] when `label` is not
    /// `bus`, `tram` or `taxi` (case-insensitive).
    pub fn create(label: &str) -> Result<Self, ConfigurationError> {
        label.parse().map(Self::new)
    }

    /// Deploy a vehicle of the given kind now.
    #[must_use]
    pub fn new(kind: VehicleKind) -> Self {
        Self {
            id: VehicleId::new(),
            kind,
            deployed_at: Utc::now(),
        }
    }

    /// Operational description of this vehicle.
    #[must_use]
    pub fn operate(&self) -> &'static str {
        self.kind.operation()
    }
}
