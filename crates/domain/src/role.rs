//! Roles — who is asking for energy data.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A requester role.
///
/// Any name that is not one of the known roles is kept as [`Role::Other`];
/// such a requester is simply never granted sensitive data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    EnergyManager,
    Operator,
    Citizen,
    Other(String),
}

impl Role {
    /// Roles allowed to read sensitive energy data.
    pub const SENSITIVE_DATA_ALLOWED: [Self; 2] = [Self::Admin, Self::EnergyManager];

    /// Whether this role belongs to [`SENSITIVE_DATA_ALLOWED`](Self::SENSITIVE_DATA_ALLOWED).
    #[must_use]
    pub fn may_read_sensitive_data(&self) -> bool {
        Self::SENSITIVE_DATA_ALLOWED.contains(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Admin => "Admin",
            Self::EnergyManager => "Energy Manager",
            Self::Operator => "Operator",
            Self::Citizen => "Citizen",
            Self::Other(name) => name,
        })
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "admin" => Self::Admin,
            "energymanager" => Self::EnergyManager,
            "operator" => Self::Operator,
            "citizen" => Self::Citizen,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
