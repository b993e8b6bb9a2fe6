//! Energy port — the real source of consumption data.
//!
//! Modules never talk to this directly; they go through
//! [`EnergyDataProxy`](crate::energy_proxy::EnergyDataProxy), which decides
//! who may read the sensitive half and when the service gets created.

/// Source of city energy data.
pub trait EnergyDataService: Send + Sync {
    /// Aggregate figures anyone may read.
    fn basic_data(&self) -> String;

    /// Per-site breakdown reserved for privileged roles.
    fn sensitive_data(&self) -> String;
}
