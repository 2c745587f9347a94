use uom::si::f64::{Ratio, ThermodynamicTemperature};

use crate::support::units::SpecificEnthalpy;

/// The single quantity that fixes the moisture content of the air.
///
/// Together with dry bulb and pressure, any one of these fully defines the
/// state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HumidityIndicator {
    /// Relative humidity in `[0, 1]`, or `[0, 100]` when built from `percent`.
    RelativeHumidity(Ratio),

    /// Thermodynamic wet-bulb temperature, no higher than the dry bulb.
    WetBulb(ThermodynamicTemperature),

    /// Dew-point temperature, no higher than the dry bulb.
    DewPoint(ThermodynamicTemperature),

    /// Mass of water vapour per mass of dry air.
    HumidityRatio(Ratio),

    /// Moist-air specific enthalpy per mass of dry air.
    Enthalpy(SpecificEnthalpy),
}

impl HumidityIndicator {
    /// Human-readable name, as used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::RelativeHumidity(_) => "relative humidity",
            Self::WetBulb(_) => "wet bulb",
            Self::DewPoint(_) => "dew point",
            Self::HumidityRatio(_) => "humidity ratio",
            Self::Enthalpy(_) => "enthalpy",
        }
    }
}
