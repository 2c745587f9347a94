//! Dew-point temperature.
//!
//! The dew point is the temperature at which the current vapour pressure
//! saturates, found by inverting [`ln_saturation_vapour_pressure`] with a
//! Newton iteration on its analytic derivative.
//!
//! Because the saturation curve steps by about 0.06 Pa at the freezing point,
//! a vapour pressure falling inside that step has no exact inverse.
//! The iteration then oscillates across 0 °C, and the solver reports 0 °C with
//! [`DewPointSolution::reduced_precision`] set.

use tracing::debug;

use crate::support::{
    constraint::{Constraint, StrictlyPositive, UnitInterval},
    solve::{NewtonConfig, SolveError, newton_with_derivative},
};

use super::{
    FREEZING_POINT, MAX_TEMPERATURE, MIN_TEMPERATURE, d_ln_saturation_vapour_pressure,
    humidity_ratio_from_relative_humidity, humidity_ratio_from_wet_bulb,
    ln_saturation_vapour_pressure, relative_humidity_from_humidity_ratio,
    saturation_vapour_pressure, vapour_pressure_from_humidity_ratio,
    vapour_pressure_from_relative_humidity,
};

/// How a dew point is computed from dry bulb and relative humidity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DewPointMethod {
    /// Exact inversion of the saturation curve.
    #[default]
    Iterative,

    /// Closed-form approximation, see [`approximate_dew_point`].
    Approximate,
}

/// Configuration for the dew-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewPointConfig {
    pub method: DewPointMethod,
    pub newton: NewtonConfig,

    /// Half-width [K] of the band around 0 °C in which an oscillating
    /// iteration is accepted as landing on the freezing point.
    pub freezing_band: f64,
}

impl Default for DewPointConfig {
    fn default() -> Self {
        Self {
            method: DewPointMethod::default(),
            newton: NewtonConfig::default(),
            freezing_band: 0.01,
        }
    }
}

impl DewPointConfig {
    #[must_use]
    pub fn with_method(self, method: DewPointMethod) -> Self {
        Self { method, ..self }
    }

    #[must_use]
    pub fn with_newton(self, newton: NewtonConfig) -> Self {
        Self { newton, ..self }
    }

    #[must_use]
    pub fn with_freezing_band(self, freezing_band: f64) -> Self {
        Self {
            freezing_band,
            ..self
        }
    }
}

/// A solved dew point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewPointSolution {
    /// Dew-point temperature [°C].
    pub temperature: f64,

    /// Newton steps taken.
    pub iters: usize,

    /// Set when the vapour pressure fell inside the step of the saturation
    /// curve at 0 °C and `temperature` is the freezing point itself.
    pub reduced_precision: bool,
}

/// Inverts the saturation curve at vapour pressure `pv` [Pa].
///
/// Always iterative; [`DewPointConfig::method`] only applies to the
/// relative-humidity entry points.
///
/// # Errors
///
/// - [`SolveError::NotBracketed`] if `pv` is not a finite pressure between the
///   saturation pressures at [`MIN_TEMPERATURE`] and [`MAX_TEMPERATURE`].
/// - Any other [`SolveError`] from the Newton iteration.
pub fn solve_dew_point(pv: f64, config: &DewPointConfig) -> Result<DewPointSolution, SolveError> {
    let range =
        saturation_vapour_pressure(MIN_TEMPERATURE)..=saturation_vapour_pressure(MAX_TEMPERATURE);
    if !range.contains(&pv) {
        return Err(SolveError::NotBracketed {
            lower: MIN_TEMPERATURE,
            upper: MAX_TEMPERATURE,
        });
    }

    let ln_pv = pv.ln();
    let result = newton_with_derivative(
        |t| ln_saturation_vapour_pressure(t) - ln_pv,
        d_ln_saturation_vapour_pressure,
        FREEZING_POINT,
        [MIN_TEMPERATURE, MAX_TEMPERATURE],
        &config.newton,
    );

    match result {
        Ok(solution) => Ok(DewPointSolution {
            temperature: solution.x,
            iters: solution.iters,
            reduced_precision: false,
        }),
        Err(SolveError::MaxIters { x, previous, iters })
            if straddles_freezing(x, previous, config.freezing_band) =>
        {
            debug!(pv, iters, "dew point straddles the freezing point");
            Ok(DewPointSolution {
                temperature: FREEZING_POINT,
                iters,
                reduced_precision: true,
            })
        }
        Err(error) => Err(error),
    }
}

/// Dew-point temperature [°C] from vapour pressure `pv` [Pa].
///
/// Returns `NaN` if `pv` is zero (dry air has no dew point), outside the
/// saturation curve's range, or the solver fails.
#[must_use]
pub fn dew_point_from_vapour_pressure(pv: f64) -> f64 {
    dew_point_from_vapour_pressure_with(pv, &DewPointConfig::default())
}

/// Like [`dew_point_from_vapour_pressure`], with explicit solver configuration.
#[must_use]
pub fn dew_point_from_vapour_pressure_with(pv: f64, config: &DewPointConfig) -> f64 {
    match solve_dew_point(pv, config) {
        Ok(solution) => solution.temperature,
        Err(error) => {
            debug!(pv, %error, "dew point not found");
            f64::NAN
        }
    }
}

/// Dew-point temperature [°C] from dry bulb and humidity ratio.
///
/// Never above `t_db`.
/// Returns `NaN` for dry air and for supersaturated or otherwise invalid input.
#[must_use]
pub fn dew_point_from_humidity_ratio(t_db: f64, w: f64, p: f64) -> f64 {
    if relative_humidity_from_humidity_ratio(t_db, w, p).is_nan() {
        return f64::NAN;
    }
    let t_dp = dew_point_from_vapour_pressure(vapour_pressure_from_humidity_ratio(w, p));
    not_above(t_dp, t_db)
}

/// Dew-point temperature [°C] from dry bulb and relative humidity `rh` ∈ [0, 1].
#[must_use]
pub fn dew_point_from_relative_humidity(t_db: f64, rh: f64, p: f64) -> f64 {
    dew_point_from_relative_humidity_with(t_db, rh, p, &DewPointConfig::default())
}

/// Like [`dew_point_from_relative_humidity`], honoring [`DewPointConfig::method`].
#[must_use]
pub fn dew_point_from_relative_humidity_with(
    t_db: f64,
    rh: f64,
    p: f64,
    config: &DewPointConfig,
) -> f64 {
    if humidity_ratio_from_relative_humidity(t_db, rh, p).is_nan() {
        return f64::NAN;
    }

    let t_dp = match config.method {
        DewPointMethod::Iterative => dew_point_from_vapour_pressure_with(
            vapour_pressure_from_relative_humidity(t_db, rh),
            config,
        ),
        DewPointMethod::Approximate => approximate_dew_point(t_db, rh),
    };
    not_above(t_dp, t_db)
}

/// Dew-point temperature [°C] from dry bulb and wet bulb.
#[must_use]
pub fn dew_point_from_wet_bulb(t_db: f64, t_wb: f64, p: f64) -> f64 {
    dew_point_from_humidity_ratio(t_db, humidity_ratio_from_wet_bulb(t_db, t_wb, p), p)
}

/// Closed-form dew-point approximation [°C].
///
/// `t_dp = rh^(1/8) · (112 + 0.9 t) + 0.1 t − 112`, with `rh` ∈ (0, 1].
/// Within a few tenths of a kelvin of the exact value at everyday conditions.
///
/// ```
/// use twine_psychrometrics::support::psychro::approximate_dew_point;
///
/// assert!((approximate_dew_point(20.0, 0.5) - 9.21).abs() < 0.01);
/// assert!(approximate_dew_point(20.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn approximate_dew_point(t_db: f64, rh: f64) -> f64 {
    if UnitInterval::check(&rh).is_err() || StrictlyPositive::check(&rh).is_err() {
        return f64::NAN;
    }
    rh.powf(0.125) * (112.0 + 0.9 * t_db) + 0.1 * t_db - 112.0
}

fn straddles_freezing(x: f64, previous: f64, band: f64) -> bool {
    (x < FREEZING_POINT) != (previous < FREEZING_POINT)
        && (x - FREEZING_POINT).abs() <= band
        && (previous - FREEZING_POINT).abs() <= band
}

/// Caps a dew point at the dry bulb, keeping `NaN`.
fn not_above(t_dp: f64, t_db: f64) -> f64 {
    if t_db.is_nan() {
        return f64::NAN;
    }
    if t_dp > t_db { t_db } else { t_dp }
}
