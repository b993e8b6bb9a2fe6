//! Protection proxy over an [`EnergyDataService`].
//!
//! The real service is created lazily, at most once, on the first basic read
//! or the first *granted* sensitive read. A denied request never creates it.

use std::fmt;
use std::sync::OnceLock;

use smartcity_domain::error::AccessDenied;
use smartcity_domain::report::Report;
use smartcity_domain::role::Role;

use crate::ports::EnergyDataService;

const CONNECT_STEP: &str = "Proxy: Initializing RealEnergyDataService...";

/// Creates the real service on first use.
pub type Connector = Box<dyn Fn() -> Box<dyn EnergyDataService> + Send + Sync>;

/// Role-gated, lazily connected access to energy data.
pub struct EnergyDataProxy {
    connector: Connector,
    real: OnceLock<Box<dyn EnergyDataService>>,
}

impl EnergyDataProxy {
    /// Create a proxy that will call `connector` the first time data is needed.
    pub fn new<F, S>(connector: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: EnergyDataService + 'static,
    {
        Self {
            connector: Box::new(move || -> Box<dyn EnergyDataService> { Box::new(connector()) }),
            real: OnceLock::new(),
        }
    }

    /// Whether the real service has been created yet.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.real.get().is_some()
    }

    /// Aggregate energy data. Always allowed.
    pub fn get_basic_data(&self) -> String {
        self.read_basic_data(&mut Report::new())
    }

    /// Like [`get_basic_data`](Self::get_basic_data), narrating the lazy
    /// connection into `narration` when it happens.
    pub fn read_basic_data(&self, narration: &mut Report) -> String {
        self.real_service(narration).basic_data()
    }

    /// Detailed energy data, only for roles in [`Role::SENSITIVE_DATA_ALLOWED`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] for any other role, without touching the real
    /// service.
    pub fn get_sensitive_data(&self, role: &Role) -> Result<String, AccessDenied> {
        self.read_sensitive_data(role, &mut Report::new())
    }

    /// Like [`get_sensitive_data`](Self::get_sensitive_data), narrating the
    /// access check and the lazy connection into `narration`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] for any role outside the allow-set.
    #[tracing::instrument(skip(self, narration))]
    pub fn read_sensitive_data(
        &self,
        role: &Role,
        narration: &mut Report,
    ) -> Result<String, AccessDenied> {
        narration.line(format!("Proxy: Checking access for role '{role}'..."));
        if !role.may_read_sensitive_data() {
            tracing::warn!("access denied, insufficient privileges");
            narration.line("Proxy: Access denied. Insufficient privileges.");
            return Err(AccessDenied { role: role.clone() });
        }
        tracing::info!("access granted");
        narration.line("Proxy: Access granted.");
        Ok(self.real_service(narration).sensitive_data())
    }

    fn real_service(&self, narration: &mut Report) -> &dyn EnergyDataService {
        let real = self.real.get_or_init(|| {
            tracing::info!("initializing real energy data service");
            narration.line(CONNECT_STEP);
            (self.connector)()
        });
        &**real
    }
}

impl fmt::Debug for EnergyDataProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnergyDataProxy")
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}
