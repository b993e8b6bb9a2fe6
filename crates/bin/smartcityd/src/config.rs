//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smartcity.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smartcity_domain::device::DeviceFamily;
use smartcity_domain::error::ConfigurationError;
use smartcity_domain::role::Role;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lighting subsystem settings.
    pub lighting: LightingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Narration output settings.
    pub output: OutputConfig,
    /// Inputs for the demonstration script.
    pub demo: DemoConfig,
}

/// Lighting configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Device family selector (`basic` or `advanced`).
    pub family: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How narration is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::Validation(format!(
                "output format must be 'text' or 'json', got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Demonstration inputs.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Vehicle labels deployed in order. Unknown labels are allowed and get
    /// reported by the transport module.
    pub vehicles: Vec<String>,
    /// Roles asking for sensitive energy data, in order.
    pub roles: Vec<String>,
}

impl Config {
    /// Load configuration from `smartcity.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// selector names an unknown family or output format.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("smartcity.toml", |key| std::env::var(key).ok())
    }

    /// Load from `path`, reading overrides through `var` instead of the
    /// process environment.
    fn load_from<V>(path: &str, var: V) -> Result<Self, ConfigError>
    where
        V: Fn(&str) -> Option<String>,
    {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides(var)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides<V>(&mut self, var: V) -> Result<(), ConfigError>
    where
        V: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("SMARTCITY_LIGHTING_FAMILY") {
            self.lighting.family = val;
        }
        if let Some(val) = var("SMARTCITY_OUTPUT") {
            self.output.format = val.parse()?;
        }
        if let Some(val) = var("SMARTCITY_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.lighting_family()?;
        Ok(())
    }

    /// Parsed lighting device family.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownDeviceFamily`] for an unknown selector.
    pub fn lighting_family(&self) -> Result<DeviceFamily, ConfigurationError> {
        self.lighting.family.parse()
    }

    /// Demonstration roles, in configured order. Names that match no known
    /// role become [`Role::Other`] and are denied by the energy proxy.
    #[must_use]
    pub fn roles(&self) -> Vec<Role> {
        self.demo.roles.iter().map(|r| Role::from(r.as_str())).collect()
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            family: DeviceFamily::default().to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smartcityd=info,smartcity=info".to_string(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            vehicles: vec!["bus".to_string(), "tram".to_string(), "taxi".to_string()],
            roles: vec!["Admin".to_string(), "Citizen".to_string()],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A selector did not match any known variant.
    #[error("invalid configuration")]
    Selector(#[from] ConfigurationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
