//! City energy meter — the real service behind the energy proxy.

use smartcity_app::ports::EnergyDataService;

/// Reads consumption figures from the (simulated) city grid.
#[derive(Debug)]
pub struct CityEnergyMeter {
    _private: (),
}

impl CityEnergyMeter {
    /// Connect to the grid. Only the proxy's connector should call this.
    #[must_use]
    pub fn connect() -> Self {
        tracing::debug!("city energy meter connected");
        Self { _private: () }
    }
}

impl EnergyDataService for CityEnergyMeter {
    fn basic_data(&self) -> String {
        "Basic Energy Data: Current city-wide consumption is 1500 MWh.".to_string()
    }

    fn sensitive_data(&self) -> String {
        "Sensitive Energy Data: Detailed breakdown of consumption by critical infrastructure \
         (Power Plant 1: 400 MWh, Data Center: 200 MWh)."
            .to_string()
    }
}
