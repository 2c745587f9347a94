//! Moist-air state resolution.
//!
//! Every path first establishes the humidity ratio from the supplied
//! indicator, then derives the remaining properties from dry bulb, humidity
//! ratio and pressure with the scalar engine in [`crate::support::psychro`].

mod config;
mod error;
mod input;
mod state;

pub use config::MoistAirConfig;
pub use error::StateError;
pub use input::{HumidityIndicator, Inputs, Known, Measurements};
pub use state::PsychrometricState;

use tracing::{debug, trace};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, Ratio, SpecificVolume, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative, UnitInterval},
    psychro::{
        DewPointMethod, MAX_TEMPERATURE, MIN_TEMPERATURE, approximate_dew_point,
        degree_of_saturation, density, dry_bulb_from_enthalpy, enthalpy,
        humidity_ratio_from_enthalpy, humidity_ratio_from_relative_humidity,
        humidity_ratio_from_vapour_pressure, humidity_ratio_from_wet_bulb,
        relative_humidity_from_humidity_ratio, saturation_humidity_ratio,
        saturation_vapour_pressure, solve_dew_point, specific_volume,
        vapour_pressure_from_humidity_ratio, wet_bulb_from_humidity_ratio_with,
    },
    units::SpecificEnthalpy,
};

/// Entry point for resolving moist-air states.
#[derive(Debug, Clone, Copy)]
pub struct MoistAir;

/// Moisture content established from the indicator, plus whichever
/// temperatures the indicator already fixed.
#[derive(Debug, Clone, Copy)]
struct Moisture {
    humidity_ratio: f64,
    wet_bulb: Option<f64>,
    dew_point: Option<f64>,
}

impl MoistAir {
    /// Resolves the full state from dry bulb, one humidity indicator and
    /// pressure.
    ///
    /// Fields whose solvers fail after the humidity ratio is known are left
    /// `NaN`.
    ///
    /// # Errors
    ///
    /// - [`StateError::InvalidInput`] for a non-finite or out-of-range input,
    ///   including a wet bulb or dew point above the dry bulb.
    /// - [`StateError::Supersaturated`] if the indicator implies more
    ///   moisture than saturation allows.
    /// - [`StateError::Unresolved`] if the humidity ratio cannot be computed
    ///   (for example when saturation pressure exceeds total pressure).
    pub fn state(known: &Known, config: &MoistAirConfig) -> Result<PsychrometricState, StateError> {
        let t = known.dry_bulb().get::<degree_celsius>();
        let p = known.pressure().get::<pascal>();

        check_temperature("dry bulb", t)?;

        let moisture = moisture(t, p, known.indicator())?;
        complete(t, p, moisture, config)
    }

    /// Resolves the state from enthalpy and humidity ratio, which together fix
    /// the dry bulb.
    ///
    /// # Errors
    ///
    /// As for [`MoistAir::state`].
    pub fn from_enthalpy_and_humidity_ratio(
        h: SpecificEnthalpy,
        w: Ratio,
        pressure: Pressure,
        config: &MoistAirConfig,
    ) -> Result<PsychrometricState, StateError> {
        let h = h.get::<joule_per_kilogram>();
        let w_value = w.get::<ratio>();

        if !h.is_finite() {
            return Err(StateError::invalid("enthalpy", ConstraintError::NotANumber));
        }
        NonNegative::check(&w_value).map_err(|e| StateError::invalid("humidity ratio", e))?;

        let t = dry_bulb_from_enthalpy(h, w_value);
        trace!(h, w = w_value, t_db = t, "dry bulb from enthalpy");

        let known = Known::new(
            ThermodynamicTemperature::new::<degree_celsius>(t),
            HumidityIndicator::HumidityRatio(w),
            pressure,
        )?;
        Self::state(&known, config)
    }

    /// Resolves the state from a set of [`Measurements`].
    ///
    /// # Errors
    ///
    /// Any error from [`Measurements::resolve`], [`MoistAir::state`] or
    /// [`MoistAir::from_enthalpy_and_humidity_ratio`].
    pub fn from_measurements(
        measurements: &Measurements,
        config: &MoistAirConfig,
    ) -> Result<PsychrometricState, StateError> {
        match measurements.resolve()? {
            Inputs::DryBulb(known) => Self::state(&known, config),
            Inputs::EnthalpyAndHumidityRatio {
                enthalpy,
                humidity_ratio,
                pressure,
            } => Self::from_enthalpy_and_humidity_ratio(
                enthalpy,
                humidity_ratio,
                pressure.into_inner(),
                config,
            ),
        }
    }
}

/// Establishes the humidity ratio from the indicator.
fn moisture(t: f64, p: f64, indicator: HumidityIndicator) -> Result<Moisture, StateError> {
    let name = indicator.name();
    let unresolved = StateError::Unresolved {
        quantity: "humidity ratio",
    };

    let moisture = match indicator {
        HumidityIndicator::RelativeHumidity(rh) => {
            let rh = rh.get::<ratio>();
            UnitInterval::check(&rh).map_err(|e| StateError::invalid(name, e))?;

            let w = humidity_ratio_from_relative_humidity(t, rh, p);
            if w.is_nan() {
                return Err(unresolved);
            }
            // Saturated air has all three temperatures equal.
            let at_saturation = (rh >= 1.0).then_some(t);
            Moisture {
                humidity_ratio: w,
                wet_bulb: at_saturation,
                dew_point: at_saturation,
            }
        }

        HumidityIndicator::WetBulb(t_wb) => {
            let t_wb = t_wb.get::<degree_celsius>();
            check_temperature(name, t_wb)?;
            check_not_above_dry_bulb(name, t_wb, t)?;

            let w = humidity_ratio_from_wet_bulb(t, t_wb, p);
            if w.is_nan() {
                return Err(unresolved);
            }
            Moisture {
                humidity_ratio: w,
                wet_bulb: Some(t_wb),
                dew_point: None,
            }
        }

        HumidityIndicator::DewPoint(t_dp) => {
            let t_dp = t_dp.get::<degree_celsius>();
            check_temperature(name, t_dp)?;
            check_not_above_dry_bulb(name, t_dp, t)?;

            let w = humidity_ratio_from_vapour_pressure(saturation_vapour_pressure(t_dp), p);
            if w.is_nan() {
                return Err(unresolved);
            }
            Moisture {
                humidity_ratio: w,
                wet_bulb: None,
                dew_point: Some(t_dp),
            }
        }

        HumidityIndicator::HumidityRatio(w) => {
            let w = w.get::<ratio>();
            NonNegative::check(&w).map_err(|e| StateError::invalid(name, e))?;
            if w.is_infinite() {
                return Err(StateError::invalid(name, ConstraintError::AboveMaximum));
            }
            Moisture {
                humidity_ratio: w,
                wet_bulb: None,
                dew_point: None,
            }
        }

        HumidityIndicator::Enthalpy(h) => {
            let h = h.get::<joule_per_kilogram>();
            if !h.is_finite() {
                return Err(StateError::invalid(name, ConstraintError::NotANumber));
            }

            let w = humidity_ratio_from_enthalpy(h, t);
            if w.is_nan() {
                return Err(StateError::invalid(name, ConstraintError::BelowMinimum));
            }
            Moisture {
                humidity_ratio: w,
                wet_bulb: None,
                dew_point: None,
            }
        }
    };

    Ok(moisture)
}

/// Derives every remaining property once the humidity ratio is known.
fn complete(
    t: f64,
    p: f64,
    moisture: Moisture,
    config: &MoistAirConfig,
) -> Result<PsychrometricState, StateError> {
    let w = moisture.humidity_ratio;

    let rh = relative_humidity_from_humidity_ratio(t, w, p);
    if rh.is_nan() {
        return Err(StateError::Supersaturated {
            humidity_ratio: w,
            saturation: saturation_humidity_ratio(t, p),
        });
    }

    let pv = vapour_pressure_from_humidity_ratio(w, p);

    let wet_bulb = moisture
        .wet_bulb
        .unwrap_or_else(|| wet_bulb_from_humidity_ratio_with(t, w, p, &config.wet_bulb));

    let (dew_point, reduced_precision) = match moisture.dew_point {
        Some(t_dp) => (t_dp, false),
        None => dew_point(t, rh, pv, config),
    };

    trace!(t_db = t, w, rh, t_wb = wet_bulb, t_dp = dew_point, "moist air state");

    Ok(PsychrometricState {
        dry_bulb: ThermodynamicTemperature::new::<degree_celsius>(t),
        pressure: Pressure::new::<pascal>(p),
        humidity_ratio: Ratio::new::<ratio>(w),
        saturation_humidity_ratio: Ratio::new::<ratio>(saturation_humidity_ratio(t, p)),
        relative_humidity: Ratio::new::<ratio>(rh),
        wet_bulb: ThermodynamicTemperature::new::<degree_celsius>(wet_bulb),
        dew_point: ThermodynamicTemperature::new::<degree_celsius>(dew_point),
        vapour_pressure: Pressure::new::<pascal>(pv),
        saturation_vapour_pressure: Pressure::new::<pascal>(saturation_vapour_pressure(t)),
        enthalpy: SpecificEnthalpy::new::<joule_per_kilogram>(enthalpy(t, w)),
        specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(specific_volume(t, w, p)),
        density: MassDensity::new::<kilogram_per_cubic_meter>(density(t, w, p)),
        degree_of_saturation: Ratio::new::<ratio>(degree_of_saturation(t, w, p)),
        reduced_precision,
    })
}

/// Dew point by the configured method, capped at the dry bulb.
///
/// Returns `NaN` for dry air.
fn dew_point(t: f64, rh: f64, pv: f64, config: &MoistAirConfig) -> (f64, bool) {
    if pv == 0.0 {
        return (f64::NAN, false);
    }

    let (t_dp, reduced_precision) = match config.dew_point.method {
        DewPointMethod::Iterative => match solve_dew_point(pv, &config.dew_point) {
            Ok(solution) => (solution.temperature, solution.reduced_precision),
            Err(error) => {
                debug!(t_db = t, pv, %error, "dew point not found");
                (f64::NAN, false)
            }
        },
        DewPointMethod::Approximate => (approximate_dew_point(t, rh), false),
    };

    if t_dp > t {
        (t, reduced_precision)
    } else {
        (t_dp, reduced_precision)
    }
}

fn check_temperature(quantity: &'static str, t: f64) -> Result<(), StateError> {
    if t.is_nan() {
        return Err(StateError::invalid(quantity, ConstraintError::NotANumber));
    }
    if t < MIN_TEMPERATURE {
        return Err(StateError::invalid(quantity, ConstraintError::BelowMinimum));
    }
    if t > MAX_TEMPERATURE {
        return Err(StateError::invalid(quantity, ConstraintError::AboveMaximum));
    }
    Ok(())
}

fn check_not_above_dry_bulb(quantity: &'static str, t: f64, t_db: f64) -> Result<(), StateError> {
    if t > t_db {
        return Err(StateError::invalid(quantity, ConstraintError::AboveMaximum));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::TemperatureInterval, ratio::percent, temperature_interval::kelvin as delta_kelvin,
    };

    use crate::support::psychro::{DewPointConfig, STANDARD_PRESSURE};

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn solve(t: f64, indicator: HumidityIndicator) -> Result<PsychrometricState, StateError> {
        MoistAir::state(
            &Known::at_standard_pressure(celsius(t), indicator),
            &MoistAirConfig::default(),
        )
    }

    fn tolerance() -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(1e-6)
    }

    #[test]
    fn comfortable_room() {
        let state = solve(20.0, HumidityIndicator::RelativeHumidity(Ratio::new::<percent>(50.0)))
            .unwrap();

        assert_relative_eq!(state.humidity_ratio.get::<ratio>(), 0.007_261_7, epsilon = 1e-6);
        assert_relative_eq!(state.wet_bulb.get::<degree_celsius>(), 13.7836, epsilon = 1e-3);
        assert_relative_eq!(state.dew_point.get::<degree_celsius>(), 9.2724, epsilon = 1e-3);
        assert_relative_eq!(state.enthalpy.get::<joule_per_kilogram>(), 38_551.7, epsilon = 1.0);
        assert_relative_eq!(
            state.specific_volume.get::<cubic_meter_per_kilogram>(),
            0.84016,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1.19890,
            epsilon = 1e-5
        );
        assert_relative_eq!(state.relative_humidity.get::<percent>(), 50.0, epsilon = 1e-9);
        assert!(state.check_ordering(tolerance()));
        assert!(!state.reduced_precision);
    }

    #[test]
    fn every_indicator_gives_the_same_state() {
        let reference = solve(20.0, HumidityIndicator::RelativeHumidity(Ratio::new::<ratio>(0.5)))
            .unwrap();

        let indicators = [
            HumidityIndicator::WetBulb(reference.wet_bulb),
            HumidityIndicator::DewPoint(reference.dew_point),
            HumidityIndicator::HumidityRatio(reference.humidity_ratio),
            HumidityIndicator::Enthalpy(reference.enthalpy),
        ];

        for indicator in indicators {
            let state = solve(20.0, indicator).unwrap();
            assert_relative_eq!(
                state.humidity_ratio.get::<ratio>(),
                reference.humidity_ratio.get::<ratio>(),
                epsilon = 1e-8
            );
            assert_relative_eq!(
                state.wet_bulb.get::<degree_celsius>(),
                reference.wet_bulb.get::<degree_celsius>(),
                epsilon = 1e-4
            );
            assert_relative_eq!(
                state.dew_point.get::<degree_celsius>(),
                reference.dew_point.get::<degree_celsius>(),
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn saturated_air() {
        let state =
            solve(25.0, HumidityIndicator::RelativeHumidity(Ratio::new::<percent>(100.0))).unwrap();

        assert_eq!(state.wet_bulb, state.dry_bulb);
        assert_eq!(state.dew_point, state.dry_bulb);
        assert_relative_eq!(state.degree_of_saturation.get::<ratio>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ordering_holds_across_conditions() {
        for t in [-30.0, -5.0, 0.5, 18.0, 35.0, 60.0] {
            for rh in [5.0, 30.0, 70.0, 95.0, 100.0] {
                let indicator = HumidityIndicator::RelativeHumidity(Ratio::new::<percent>(rh));
                let state = solve(t, indicator).unwrap();
                assert!(state.check_ordering(tolerance()), "t = {t}, rh = {rh}");
            }
        }
    }

    #[test]
    fn dry_air() {
        let indicator = HumidityIndicator::HumidityRatio(Ratio::new::<ratio>(0.0));
        let state = solve(20.0, indicator).unwrap();

        assert_eq!(state.relative_humidity.get::<ratio>(), 0.0);
        assert!(state.dew_point.get::<degree_celsius>().is_nan());
        assert_relative_eq!(state.wet_bulb.get::<degree_celsius>(), 5.836, epsilon = 1e-3);
    }

    #[test]
    fn invalid_inputs() {
        let cases = [
            (20.0, HumidityIndicator::RelativeHumidity(Ratio::new::<percent>(120.0))),
            (20.0, HumidityIndicator::RelativeHumidity(Ratio::new::<ratio>(f64::NAN))),
            (20.0, HumidityIndicator::WetBulb(celsius(25.0))),
            (20.0, HumidityIndicator::DewPoint(celsius(20.5))),
            (20.0, HumidityIndicator::HumidityRatio(Ratio::new::<ratio>(-0.001))),
            (20.0, HumidityIndicator::Enthalpy(SpecificEnthalpy::new::<joule_per_kilogram>(-1e5))),
            (f64::NAN, HumidityIndicator::HumidityRatio(Ratio::new::<ratio>(0.005))),
            (250.0, HumidityIndicator::HumidityRatio(Ratio::new::<ratio>(0.005))),
        ];

        for (t, indicator) in cases {
            let result = solve(t, indicator);
            assert!(
                matches!(result, Err(StateError::InvalidInput { .. })),
                "{indicator:?} at {t} °C gave {result:?}"
            );
        }
    }

    #[test]
    fn supersaturated_humidity_ratio() {
        let result = solve(20.0, HumidityIndicator::HumidityRatio(Ratio::new::<ratio>(0.05)));
        let Err(StateError::Supersaturated {
            humidity_ratio,
            saturation,
        }) = result
        else {
            panic!("expected a supersaturation error, got {result:?}");
        };
        assert_relative_eq!(humidity_ratio, 0.05);
        assert!(saturation < humidity_ratio);
    }

    #[test]
    fn unresolved_above_boiling() {
        // Saturation pressure at 105 °C exceeds one atmosphere.
        let indicator = HumidityIndicator::RelativeHumidity(Ratio::new::<percent>(100.0));
        let result = solve(105.0, indicator);
        assert_eq!(
            result,
            Err(StateError::Unresolved {
                quantity: "humidity ratio"
            })
        );
    }

    #[test]
    fn dew_point_on_freezing_step() {
        // Vapour pressure inside the 0 °C step of the saturation curve.
        let w = humidity_ratio_from_vapour_pressure(611.18, STANDARD_PRESSURE);
        let state = solve(10.0, HumidityIndicator::HumidityRatio(Ratio::new::<ratio>(w))).unwrap();

        assert!(state.reduced_precision);
        assert_eq!(state.dew_point.get::<degree_celsius>(), 0.0);
    }

    #[test]
    fn approximate_dew_point_on_request() {
        let config = MoistAirConfig::default()
            .with_dew_point(DewPointConfig::default().with_method(DewPointMethod::Approximate));
        let known = Known::at_standard_pressure(
            celsius(20.0),
            HumidityIndicator::RelativeHumidity(Ratio::new::<percent>(50.0)),
        );

        let state = MoistAir::state(&known, &config).unwrap();
        assert_relative_eq!(state.dew_point.get::<degree_celsius>(), 9.2105, epsilon = 1e-3);
    }

    #[test]
    fn from_enthalpy_and_humidity_ratio() {
        let state = MoistAir::from_enthalpy_and_humidity_ratio(
            SpecificEnthalpy::new::<joule_per_kilogram>(38_551.7),
            Ratio::new::<ratio>(0.007_261_7),
            Pressure::new::<pascal>(STANDARD_PRESSURE),
            &MoistAirConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(state.dry_bulb.get::<degree_celsius>(), 20.0, epsilon = 1e-4);
        assert_relative_eq!(state.relative_humidity.get::<percent>(), 50.0, epsilon = 1e-2);

        let result = MoistAir::from_enthalpy_and_humidity_ratio(
            SpecificEnthalpy::new::<joule_per_kilogram>(38_551.7),
            Ratio::new::<ratio>(0.007_261_7),
            Pressure::new::<pascal>(-1.0),
            &MoistAirConfig::default(),
        );
        assert!(matches!(
            result,
            Err(StateError::InvalidInput {
                quantity: "pressure",
                ..
            })
        ));
    }

    #[test]
    fn from_measurements() {
        let measurements = Measurements::default()
            .with_dry_bulb_celsius(20.0)
            .with_dew_point_celsius(9.2724);
        let state = MoistAir::from_measurements(&measurements, &MoistAirConfig::default()).unwrap();
        assert_relative_eq!(state.relative_humidity.get::<percent>(), 50.0, epsilon = 1e-2);

        let reverse = Measurements::default()
            .with_enthalpy(38_551.7)
            .with_humidity_ratio(0.007_261_7)
            .with_altitude_meters(0.0);
        let state = MoistAir::from_measurements(&reverse, &MoistAirConfig::default()).unwrap();
        assert_relative_eq!(state.dry_bulb.get::<degree_celsius>(), 20.0, epsilon = 1e-4);

        let missing = Measurements::default().with_dry_bulb_celsius(20.0);
        assert_eq!(
            MoistAir::from_measurements(&missing, &MoistAirConfig::default()),
            Err(StateError::MissingIndicator)
        );
    }

    #[test]
    fn deterministic() {
        let indicator = HumidityIndicator::WetBulb(celsius(18.0));
        assert_eq!(solve(27.0, indicator), solve(27.0, indicator));
    }
}
