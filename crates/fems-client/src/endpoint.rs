//! Catalog of FEMS REST channel endpoints

use std::fmt;
use std::str::FromStr;

use crate::error::FemsError;

/// Telemetry channels exposed by the FEMS REST interface.
///
/// The set is closed: every channel the client can read is listed here,
/// and each variant carries a fixed relative URL path under
/// `/rest/channel/_sum/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Overall system state code
    SystemState,
    /// Battery state of charge (percent)
    ChargingState,
    /// Battery active power (W, negative = charging)
    BatteryPower,
    /// Battery reactive power (var)
    BatteryReactivePower,
    /// Grid active power (W, negative = feed-in)
    GridPower,
    /// Minimum grid power seen (W)
    GridMinPower,
    /// Maximum grid power seen (W)
    GridMaxPower,
    /// Total production active power (W)
    ProductionPower,
    /// Maximum production power seen (W)
    ProductionMaxPower,
    /// AC-side production power (W)
    ProductionAcPower,
    /// DC-side production power (W)
    ProductionDcPower,
    /// Total consumption power (W)
    ConsumptionPower,
    /// Maximum consumption power seen (W)
    ConsumptionMaxPower,
}

impl Endpoint {
    /// Returns the fixed relative URL path for this channel.
    pub fn path(&self) -> &'static str {
        match self {
            Self::SystemState => "/rest/channel/_sum/State",
            Self::ChargingState => "/rest/channel/_sum/EssSoc",
            Self::BatteryPower => "/rest/channel/_sum/EssActivePower",
            Self::BatteryReactivePower => "/rest/channel/_sum/EssReactivePower",
            Self::GridPower => "/rest/channel/_sum/GridActivePower",
            Self::GridMinPower => "/rest/channel/_sum/GridMinActivePower",
            Self::GridMaxPower => "/rest/channel/_sum/GridMaxActivePower",
            Self::ProductionPower => "/rest/channel/_sum/ProductionActivePower",
            Self::ProductionMaxPower => "/rest/channel/_sum/ProductionMaxActivePower",
            Self::ProductionAcPower => "/rest/channel/_sum/ProductionAcActivePower",
            Self::ProductionDcPower => "/rest/channel/_sum/ProductionDcActivePower",
            Self::ConsumptionPower => "/rest/channel/_sum/ConsumptionActivePower",
            Self::ConsumptionMaxPower => "/rest/channel/_sum/ConsumptionMaxActivePower",
        }
    }

    /// Returns the snake_case metric name used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SystemState => "system_state",
            Self::ChargingState => "battery_charging_state",
            Self::BatteryPower => "battery_power",
            Self::BatteryReactivePower => "battery_reactive_power",
            Self::GridPower => "grid_power",
            Self::GridMinPower => "grid_min_power",
            Self::GridMaxPower => "grid_max_power",
            Self::ProductionPower => "production_power",
            Self::ProductionMaxPower => "production_max_power",
            Self::ProductionAcPower => "production_ac_power",
            Self::ProductionDcPower => "production_dc_power",
            Self::ConsumptionPower => "consumption_power",
            Self::ConsumptionMaxPower => "consumption_max_power",
        }
    }

    /// All channels, in catalog order.
    pub fn all() -> &'static [Endpoint] {
        &[
            Self::SystemState,
            Self::ChargingState,
            Self::BatteryPower,
            Self::BatteryReactivePower,
            Self::GridPower,
            Self::GridMinPower,
            Self::GridMaxPower,
            Self::ProductionPower,
            Self::ProductionMaxPower,
            Self::ProductionAcPower,
            Self::ProductionDcPower,
            Self::ConsumptionPower,
            Self::ConsumptionMaxPower,
        ]
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = FemsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|endpoint| endpoint.name() == s)
            .ok_or_else(|| FemsError::UnknownEndpoint(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_sum_channels() {
        for endpoint in Endpoint::all() {
            assert!(
                endpoint.path().starts_with("/rest/channel/_sum/"),
                "unexpected path for {endpoint}: {}",
                endpoint.path()
            );
        }
    }

    #[test]
    fn catalog_is_complete() {
        assert_eq!(Endpoint::all().len(), 13);
        assert_eq!(Endpoint::BatteryPower.path(), "/rest/channel/_sum/EssActivePower");
        assert_eq!(Endpoint::ChargingState.path(), "/rest/channel/_sum/EssSoc");
    }

    #[test]
    fn from_str_inverts_name() {
        for endpoint in Endpoint::all() {
            assert_eq!(endpoint.name().parse::<Endpoint>().unwrap(), *endpoint);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "flux_capacitor".parse::<Endpoint>().unwrap_err();
        assert!(matches!(err, FemsError::UnknownEndpoint(name) if name == "flux_capacitor"));
    }
}
