//! Common error types used across the workspace.
//!
//! Each failure has a typed source error converted into [`SmartCityError`]
//! via `#[from]`; no variant carries a free-form message.

use crate::role::Role;

/// Top-level error for every smartcity operation.
#[derive(Debug, thiserror::Error)]
pub enum SmartCityError {
    #[error("invalid configuration")]
    InvalidConfiguration(#[from] ConfigurationError),

    #[error("access denied")]
    AccessDenied(#[from] AccessDenied),
}

/// A selector did not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown device family: {0} (expected 'basic' or 'advanced')")]
    UnknownDeviceFamily(String),

    #[error("unknown vehicle type: {0}")]
    UnknownVehicleType(String),
}

/// A role outside the allow-set asked for protected data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("access denied for role '{role}': cannot retrieve sensitive energy data")]
pub struct AccessDenied {
    pub role: Role,
}
