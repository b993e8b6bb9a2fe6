//! Subsystem modules — one per city domain.
//!
//! Each module owns the factory, wrapper chain or proxy it demonstrates and
//! returns a [`Report`](smartcity_domain::report::Report) from every
//! operation instead of printing.

pub mod energy_module;
pub mod lighting_module;
pub mod security_module;
pub mod transport_module;

pub use energy_module::EnergyModule;
pub use lighting_module::LightingModule;
pub use security_module::SecurityModule;
pub use transport_module::TransportModule;
