//! Energy module — reads city energy data through the protection proxy.

use smartcity_domain::error::AccessDenied;
use smartcity_domain::report::Report;
use smartcity_domain::role::Role;

use crate::energy_proxy::EnergyDataProxy;

/// Energy subsystem. Only ever talks to the proxy, never the real service.
#[derive(Debug)]
pub struct EnergyModule {
    proxy: EnergyDataProxy,
}

impl EnergyModule {
    pub fn new(proxy: EnergyDataProxy) -> Self {
        tracing::info!("energy module initialized with access-controlled data proxy");
        Self { proxy }
    }

    pub fn proxy(&self) -> &EnergyDataProxy {
        &self.proxy
    }

    /// Line announcing how the module was set up.
    pub fn initialized(&self) -> Report {
        Report::from("Energy Module: Initialized with EnergyDataProxy for access control.")
    }

    pub fn start_monitoring(&self) -> Report {
        let mut report = Report::from("Energy Module: Energy monitoring started.");
        let data = self.proxy.read_basic_data(&mut report);
        report.line(data);
        report
    }

    pub fn report_usage(&self) -> Report {
        let mut report = Report::from("Energy Module: Generating basic usage report.");
        let data = self.proxy.read_basic_data(&mut report);
        report.line(data);
        report
    }

    /// Sensitive data for `role`, or the typed denial.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when `role` is not allowed.
    pub fn sensitive_data(&self, role: &Role) -> Result<String, AccessDenied> {
        self.proxy.get_sensitive_data(role)
    }

    /// Narrate a sensitive-data request. A denial is an ordinary outcome and
    /// is reported, not returned as an error.
    pub fn get_sensitive_data(&self, role: &Role) -> Report {
        let mut report = Report::new();
        let outcome = match self.proxy.read_sensitive_data(role, &mut report) {
            Ok(data) => data,
            Err(denied) => denied.to_string(),
        };
        report.line(outcome);
        report
    }

    pub fn get_status(&self) -> Report {
        Report::from("Energy Module Status: Monitoring active. Basic data available.")
    }
}
