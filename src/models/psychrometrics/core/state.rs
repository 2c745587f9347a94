use uom::si::f64::{
    MassDensity, Pressure, Ratio, SpecificVolume, TemperatureInterval, ThermodynamicTemperature,
};

use crate::support::units::{SpecificEnthalpy, TemperatureDifference};

/// A fully resolved moist-air state.
///
/// Intensive properties are per unit mass of dry air, except [`density`],
/// which is per unit volume of moist air.
///
/// A field that could not be computed (for example a wet bulb whose solver
/// did not converge) is `NaN` rather than failing the whole state.
///
/// [`density`]: PsychrometricState::density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsychrometricState {
    pub dry_bulb: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub humidity_ratio: Ratio,
    pub saturation_humidity_ratio: Ratio,
    pub relative_humidity: Ratio,
    pub wet_bulb: ThermodynamicTemperature,

    /// `NaN` for bone-dry air.
    pub dew_point: ThermodynamicTemperature,

    pub vapour_pressure: Pressure,
    pub saturation_vapour_pressure: Pressure,
    pub enthalpy: SpecificEnthalpy,
    pub specific_volume: SpecificVolume,
    pub density: MassDensity,
    pub degree_of_saturation: Ratio,

    /// Set when the dew point landed on the step in the saturation curve at
    /// 0 °C and was reported as exactly 0 °C.
    pub reduced_precision: bool,
}

impl PsychrometricState {
    /// Dry bulb minus wet bulb.
    #[must_use]
    pub fn wet_bulb_depression(&self) -> TemperatureInterval {
        self.dry_bulb.minus(self.wet_bulb)
    }

    /// Dry bulb minus dew point.
    #[must_use]
    pub fn dew_point_spread(&self) -> TemperatureInterval {
        self.dry_bulb.minus(self.dew_point)
    }

    /// Checks `dew_point ≤ wet_bulb ≤ dry_bulb`, allowing each step to be out
    /// of order by at most `tolerance`.
    ///
    /// A `NaN` dew point (dry air) is ignored; any other `NaN` fails the check.
    #[must_use]
    pub fn check_ordering(&self, tolerance: TemperatureInterval) -> bool {
        let slack = -tolerance;
        let wet_below_dry = self.wet_bulb_depression() >= slack;
        let dew_below_wet =
            self.dew_point.value.is_nan() || self.wet_bulb.minus(self.dew_point) >= slack;
        wet_below_dry && dew_below_wet
    }
}
