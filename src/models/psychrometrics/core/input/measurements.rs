use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Length, Pressure, Ratio, ThermodynamicTemperature},
    length::meter,
    pressure::pascal,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    models::psychrometrics::core::{HumidityIndicator, Known, StateError},
    support::{
        constraint::{Constrained, StrictlyPositive},
        psychro::{STANDARD_PRESSURE, pressure_at_altitude},
        units::SpecificEnthalpy,
    },
};

/// A loose set of readings, any of which may be missing.
///
/// [`Measurements::resolve`] checks that the readings define exactly one
/// state and turns them into [`Inputs`].
///
/// ```
/// use twine_psychrometrics::models::psychrometrics::{Inputs, Measurements, StateError};
///
/// let inputs = Measurements::default()
///     .with_dry_bulb_celsius(24.0)
///     .with_relative_humidity_percent(40.0)
///     .with_altitude_meters(1_600.0)
///     .resolve()
///     .unwrap();
/// assert!(matches!(inputs, Inputs::DryBulb(_)));
///
/// let error = Measurements::default()
///     .with_dry_bulb_celsius(24.0)
///     .resolve()
///     .unwrap_err();
/// assert_eq!(error, StateError::MissingIndicator);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurements {
    pub dry_bulb: Option<ThermodynamicTemperature>,
    pub relative_humidity: Option<Ratio>,
    pub wet_bulb: Option<ThermodynamicTemperature>,
    pub dew_point: Option<ThermodynamicTemperature>,
    pub humidity_ratio: Option<Ratio>,
    pub enthalpy: Option<SpecificEnthalpy>,

    /// Total pressure; defaults to 101 325 Pa if neither this nor
    /// `altitude` is given.
    pub pressure: Option<Pressure>,

    /// Altitude above sea level, converted to pressure with the standard
    /// atmosphere.
    pub altitude: Option<Length>,
}

/// Resolved inputs for [`MoistAir`](crate::models::psychrometrics::MoistAir).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inputs {
    /// Dry bulb plus exactly one humidity indicator.
    DryBulb(Known),

    /// Enthalpy and humidity ratio, which together fix the dry bulb.
    EnthalpyAndHumidityRatio {
        enthalpy: SpecificEnthalpy,
        humidity_ratio: Ratio,
        pressure: Constrained<Pressure, StrictlyPositive>,
    },
}

impl Measurements {
    #[must_use]
    pub fn with_dry_bulb_celsius(self, t: f64) -> Self {
        Self {
            dry_bulb: Some(ThermodynamicTemperature::new::<degree_celsius>(t)),
            ..self
        }
    }

    /// Sets relative humidity on the 0–100 scale.
    #[must_use]
    pub fn with_relative_humidity_percent(self, rh: f64) -> Self {
        Self {
            relative_humidity: Some(Ratio::new::<percent>(rh)),
            ..self
        }
    }

    #[must_use]
    pub fn with_wet_bulb_celsius(self, t: f64) -> Self {
        Self {
            wet_bulb: Some(ThermodynamicTemperature::new::<degree_celsius>(t)),
            ..self
        }
    }

    #[must_use]
    pub fn with_dew_point_celsius(self, t: f64) -> Self {
        Self {
            dew_point: Some(ThermodynamicTemperature::new::<degree_celsius>(t)),
            ..self
        }
    }

    /// Sets humidity ratio in kg water per kg dry air.
    #[must_use]
    pub fn with_humidity_ratio(self, w: f64) -> Self {
        Self {
            humidity_ratio: Some(Ratio::new::<ratio>(w)),
            ..self
        }
    }

    /// Sets enthalpy in J/kg dry air.
    #[must_use]
    pub fn with_enthalpy(self, h: f64) -> Self {
        Self {
            enthalpy: Some(SpecificEnthalpy::new::<joule_per_kilogram>(h)),
            ..self
        }
    }

    #[must_use]
    pub fn with_pressure_pascals(self, p: f64) -> Self {
        Self {
            pressure: Some(Pressure::new::<pascal>(p)),
            ..self
        }
    }

    #[must_use]
    pub fn with_altitude_meters(self, z: f64) -> Self {
        Self {
            altitude: Some(Length::new::<meter>(z)),
            ..self
        }
    }

    /// Checks that the readings define exactly one state.
    ///
    /// # Errors
    ///
    /// - [`StateError::ConflictingPressure`] if both pressure and altitude are set.
    /// - [`StateError::MissingIndicator`] if a dry bulb is given alone.
    /// - [`StateError::ConflictingIndicators`] if a dry bulb is given with
    ///   more than one humidity indicator.
    /// - [`StateError::MissingDryBulb`] if there is no dry bulb and the readings
    ///   are not exactly enthalpy and humidity ratio.
    /// - [`StateError::InvalidInput`] if the pressure, given directly or
    ///   through altitude, is not strictly positive.
    pub fn resolve(&self) -> Result<Inputs, StateError> {
        let pressure = self.total_pressure()?;
        let indicators = self.indicators();

        let Some(dry_bulb) = self.dry_bulb else {
            return match (indicators.as_slice(), self.enthalpy, self.humidity_ratio) {
                ([_, _], Some(enthalpy), Some(humidity_ratio)) => {
                    Ok(Inputs::EnthalpyAndHumidityRatio {
                        enthalpy,
                        humidity_ratio,
                        pressure,
                    })
                }
                _ => Err(StateError::MissingDryBulb),
            };
        };

        match indicators.as_slice() {
            [] => Err(StateError::MissingIndicator),
            [indicator] => {
                let known = Known::from_constrained(dry_bulb, *indicator, pressure);
                Ok(Inputs::DryBulb(known))
            }
            several => Err(StateError::ConflictingIndicators {
                supplied: several.iter().map(HumidityIndicator::name).collect(),
            }),
        }
    }

    fn indicators(&self) -> Vec<HumidityIndicator> {
        [
            self.relative_humidity.map(HumidityIndicator::RelativeHumidity),
            self.wet_bulb.map(HumidityIndicator::WetBulb),
            self.dew_point.map(HumidityIndicator::DewPoint),
            self.humidity_ratio.map(HumidityIndicator::HumidityRatio),
            self.enthalpy.map(HumidityIndicator::Enthalpy),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn total_pressure(&self) -> Result<Constrained<Pressure, StrictlyPositive>, StateError> {
        let pressure = match (self.pressure, self.altitude) {
            (Some(_), Some(_)) => return Err(StateError::ConflictingPressure),
            (Some(pressure), None) => pressure,
            (None, Some(altitude)) => {
                Pressure::new::<pascal>(pressure_at_altitude(altitude.get::<meter>()))
            }
            (None, None) => Pressure::new::<pascal>(STANDARD_PRESSURE),
        };
        StrictlyPositive::new(pressure).map_err(|e| StateError::invalid("pressure", e))
    }
}
