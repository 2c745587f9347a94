use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
};

use crate::{
    models::psychrometrics::core::{HumidityIndicator, StateError},
    support::{
        constraint::{Constrained, StrictlyPositive},
        psychro::STANDARD_PRESSURE,
    },
};

/// Inputs that fully define a moist-air state.
///
/// The total pressure is guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Known {
    dry_bulb: ThermodynamicTemperature,
    indicator: HumidityIndicator,
    pressure: Pressure,
}

impl Known {
    /// Creates a [`Known`] with an explicit total pressure.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidInput`] if `pressure` is not strictly positive.
    pub fn new(
        dry_bulb: ThermodynamicTemperature,
        indicator: HumidityIndicator,
        pressure: Pressure,
    ) -> Result<Self, StateError> {
        let pressure =
            StrictlyPositive::new(pressure).map_err(|e| StateError::invalid("pressure", e))?;
        Ok(Self::from_constrained(dry_bulb, indicator, pressure))
    }

    /// Creates a [`Known`] from a pre-validated pressure.
    #[must_use]
    pub fn from_constrained(
        dry_bulb: ThermodynamicTemperature,
        indicator: HumidityIndicator,
        pressure: Constrained<Pressure, StrictlyPositive>,
    ) -> Self {
        Self {
            dry_bulb,
            indicator,
            pressure: pressure.into_inner(),
        }
    }

    /// Creates a [`Known`] at standard sea-level pressure (101 325 Pa).
    #[must_use]
    pub fn at_standard_pressure(
        dry_bulb: ThermodynamicTemperature,
        indicator: HumidityIndicator,
    ) -> Self {
        Self {
            dry_bulb,
            indicator,
            pressure: Pressure::new::<pascal>(STANDARD_PRESSURE),
        }
    }

    /// Dry-bulb temperature.
    #[must_use]
    pub fn dry_bulb(&self) -> ThermodynamicTemperature {
        self.dry_bulb
    }

    /// The humidity indicator fixing moisture content.
    #[must_use]
    pub fn indicator(&self) -> HumidityIndicator {
        self.indicator
    }

    /// Total (barometric) pressure.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, ratio::percent, thermodynamic_temperature::degree_celsius};

    use crate::support::constraint::ConstraintError;

    #[test]
    fn rejects_non_positive_pressure() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let rh = HumidityIndicator::RelativeHumidity(Ratio::new::<percent>(50.0));

        assert!(Known::new(t, rh, Pressure::new::<pascal>(90_000.0)).is_ok());
        assert_eq!(
            Known::new(t, rh, Pressure::new::<pascal>(0.0)),
            Err(StateError::InvalidInput {
                quantity: "pressure",
                source: ConstraintError::Zero,
            })
        );
        assert!(Known::new(t, rh, Pressure::new::<pascal>(f64::NAN)).is_err());
    }

    #[test]
    fn standard_pressure() {
        let known = Known::at_standard_pressure(
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            HumidityIndicator::RelativeHumidity(Ratio::new::<percent>(50.0)),
        );
        assert_eq!(known.pressure().get::<pascal>(), 101_325.0);
    }
}
