//! Thermodynamic wet-bulb temperature.
//!
//! The forward direction (wet bulb to humidity ratio) is the adiabatic
//! saturation energy balance of ASHRAE Fundamentals (2017) ch. 1, eqn 33 above
//! freezing and eqn 35 below.
//! The inverse has no closed form and is solved iteratively.

use tracing::debug;

use crate::support::solve::{NewtonConfig, RootFinderConfig, SolveError, find_root, newton};

use super::{
    FREEZING_POINT, MAX_TEMPERATURE, MIN_TEMPERATURE, humidity_ratio_from_relative_humidity,
    humidity_ratio_from_vapour_pressure, relative_humidity_from_humidity_ratio,
    saturation_vapour_pressure,
};

/// Configuration for the wet-bulb inversion.
///
/// A Newton iteration starting at the dry bulb is tried first.
/// If it fails, a bracketed search over `[MIN_TEMPERATURE, t_db]` is run
/// with the `fallback` tolerances; its bounds are always set per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbConfig {
    pub newton: NewtonConfig,
    pub fallback: RootFinderConfig,
}

impl Default for WetBulbConfig {
    fn default() -> Self {
        Self {
            newton: NewtonConfig::default(),
            fallback: RootFinderConfig::default()
                .with_coarse_step(5.0)
                .with_x_tol(1e-6),
        }
    }
}

impl WetBulbConfig {
    #[must_use]
    pub fn with_newton(self, newton: NewtonConfig) -> Self {
        Self { newton, ..self }
    }

    #[must_use]
    pub fn with_fallback(self, fallback: RootFinderConfig) -> Self {
        Self { fallback, ..self }
    }
}

/// Humidity ratio [kg/kg] from dry-bulb `t_db` and wet-bulb `t_wb` [°C].
///
/// Returns `NaN` if `t_wb > t_db`, if saturation at the wet bulb is not
/// defined at pressure `p`, or if the energy balance gives a negative
/// humidity ratio (a wet bulb too far below the dry bulb).
#[must_use]
pub fn humidity_ratio_from_wet_bulb(t_db: f64, t_wb: f64, p: f64) -> f64 {
    if t_wb > t_db {
        return f64::NAN;
    }
    let w = energy_balance(t_db, t_wb, p);
    if w < 0.0 {
        return f64::NAN;
    }
    w
}

/// Wet-bulb temperature [°C] from dry bulb and humidity ratio.
///
/// Uses [`WetBulbConfig::default`].
/// Returns `NaN` for invalid or supersaturated input, or when neither solver
/// converges.
///
/// ```
/// use twine_psychrometrics::support::psychro::wet_bulb_from_humidity_ratio;
///
/// let t_wb = wet_bulb_from_humidity_ratio(20.0, 0.0, 101_325.0);
/// assert!((t_wb - 5.836).abs() < 1e-3);
/// ```
#[must_use]
pub fn wet_bulb_from_humidity_ratio(t_db: f64, w: f64, p: f64) -> f64 {
    wet_bulb_from_humidity_ratio_with(t_db, w, p, &WetBulbConfig::default())
}

/// Like [`wet_bulb_from_humidity_ratio`], with explicit solver configuration.
#[must_use]
pub fn wet_bulb_from_humidity_ratio_with(t_db: f64, w: f64, p: f64, config: &WetBulbConfig) -> f64 {
    match solve_wet_bulb(t_db, w, p, config) {
        Ok(t_wb) => t_wb,
        Err(error) => {
            debug!(t_db, w, p, %error, "wet bulb not found");
            f64::NAN
        }
    }
}

/// Solves for the wet-bulb temperature [°C].
///
/// Returns `NaN` (not an error) when the input itself is invalid: a dry bulb
/// outside `[MIN_TEMPERATURE, MAX_TEMPERATURE]`, a negative or supersaturated
/// humidity ratio, or a non-positive pressure.
///
/// # Errors
///
/// Returns the fallback search's [`SolveError`] if both the Newton iteration
/// and the bracketed search fail.
pub fn solve_wet_bulb(
    t_db: f64,
    w: f64,
    p: f64,
    config: &WetBulbConfig,
) -> Result<f64, SolveError> {
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&t_db) {
        return Ok(f64::NAN);
    }
    if relative_humidity_from_humidity_ratio(t_db, w, p).is_nan() {
        return Ok(f64::NAN);
    }

    let saturated = humidity_ratio_from_vapour_pressure(saturation_vapour_pressure(t_db), p);
    if w >= saturated {
        return Ok(t_db);
    }

    let residual = |t_wb: f64| energy_balance(t_db, t_wb, p) - w;
    let bounds = [MIN_TEMPERATURE, t_db];

    match newton(residual, t_db, bounds, &config.newton) {
        Ok(solution) => Ok(solution.x),
        Err(error) => {
            debug!(t_db, w, %error, "newton failed, falling back to bracketed search");
            let fallback = config.fallback.with_bounds(MIN_TEMPERATURE, t_db);
            find_root(|t_wb| energy_balance(t_db, t_wb, p), w, &fallback)
        }
    }
}

/// Wet-bulb temperature [°C] from dry bulb and relative humidity `rh` ∈ [0, 1].
#[must_use]
pub fn wet_bulb_from_relative_humidity(t_db: f64, rh: f64, p: f64) -> f64 {
    wet_bulb_from_humidity_ratio(t_db, humidity_ratio_from_relative_humidity(t_db, rh, p), p)
}

/// Wet-bulb temperature [°C] from dry bulb and dew point `t_dp` [°C].
///
/// Returns `NaN` if `t_dp > t_db`.
#[must_use]
pub fn wet_bulb_from_dew_point(t_db: f64, t_dp: f64, p: f64) -> f64 {
    if t_dp > t_db {
        return f64::NAN;
    }
    let w = humidity_ratio_from_vapour_pressure(saturation_vapour_pressure(t_dp), p);
    wet_bulb_from_humidity_ratio(t_db, w, p)
}

/// Relative humidity ∈ [0, 1] from dry bulb and wet bulb.
#[must_use]
pub fn relative_humidity_from_wet_bulb(t_db: f64, t_wb: f64, p: f64) -> f64 {
    relative_humidity_from_humidity_ratio(t_db, humidity_ratio_from_wet_bulb(t_db, t_wb, p), p)
}

/// Adiabatic saturation balance, without the sign and ordering checks.
///
/// Continuous in `t_wb` on each side of the freezing point, which the
/// iterative solvers rely on.
fn energy_balance(t_db: f64, t_wb: f64, p: f64) -> f64 {
    let ws = humidity_ratio_from_vapour_pressure(saturation_vapour_pressure(t_wb), p);

    if t_wb >= FREEZING_POINT {
        ((2501.0 - 2.326 * t_wb) * ws - 1.006 * (t_db - t_wb))
            / (2501.0 + 1.86 * t_db - 4.186 * t_wb)
    } else {
        ((2830.0 - 0.24 * t_wb) * ws - 1.006 * (t_db - t_wb))
            / (2830.0 + 1.86 * t_db - 2.1 * t_wb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::psychro::STANDARD_PRESSURE;

    const P: f64 = STANDARD_PRESSURE;

    #[test]
    fn comfortable_room() {
        let w = humidity_ratio_from_relative_humidity(20.0, 0.5, P);
        assert_relative_eq!(wet_bulb_from_humidity_ratio(20.0, w, P), 13.7836, epsilon = 1e-3);
        assert_relative_eq!(wet_bulb_from_relative_humidity(20.0, 0.5, P), 13.7836, epsilon = 1e-3);
    }

    #[test]
    fn below_freezing() {
        let t_wb = wet_bulb_from_relative_humidity(-5.0, 0.5, P);
        assert_relative_eq!(t_wb, -7.2524, epsilon = 1e-3);
    }

    #[test]
    fn saturated_air_wet_bulb_equals_dry_bulb() {
        for t in [-10.0, 0.0, 25.0, 45.0] {
            assert_relative_eq!(wet_bulb_from_relative_humidity(t, 1.0, P), t, epsilon = 1e-6);
        }
    }

    #[test]
    fn inverse_reproduces_humidity_ratio() {
        for t in [-15.0, 5.0, 20.0, 38.0] {
            for rh in [0.1, 0.4, 0.8] {
                let w = humidity_ratio_from_relative_humidity(t, rh, P);
                let t_wb = wet_bulb_from_humidity_ratio(t, w, P);
                assert!(t_wb < t);
                assert_relative_eq!(humidity_ratio_from_wet_bulb(t, t_wb, P), w, epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn falls_back_to_bracketed_search() {
        let config =
            WetBulbConfig::default().with_newton(NewtonConfig::default().with_max_iters(1));
        let w = humidity_ratio_from_relative_humidity(20.0, 0.5, P);

        let t_wb = wet_bulb_from_humidity_ratio_with(20.0, w, P, &config);
        assert_relative_eq!(t_wb, 13.7836, epsilon = 1e-3);
    }

    #[test]
    fn relative_humidity_round_trip() {
        let t_wb = wet_bulb_from_relative_humidity(30.0, 0.35, P);
        assert_relative_eq!(relative_humidity_from_wet_bulb(30.0, t_wb, P), 0.35, epsilon = 1e-6);
    }

    #[test]
    fn from_dew_point() {
        let t_wb = wet_bulb_from_dew_point(20.0, 9.2724, P);
        assert_relative_eq!(t_wb, 13.7836, epsilon = 1e-3);
        assert!(wet_bulb_from_dew_point(20.0, 21.0, P).is_nan());
    }

    #[test]
    fn invalid_inputs_are_nan() {
        assert!(humidity_ratio_from_wet_bulb(20.0, 25.0, P).is_nan());
        assert!(humidity_ratio_from_wet_bulb(40.0, -20.0, P).is_nan());
        assert!(wet_bulb_from_humidity_ratio(20.0, 0.05, P).is_nan());
        assert!(wet_bulb_from_humidity_ratio(20.0, -0.001, P).is_nan());
        assert!(wet_bulb_from_humidity_ratio(f64::NAN, 0.005, P).is_nan());
        assert!(wet_bulb_from_humidity_ratio(20.0, 0.005, 0.0).is_nan());
        assert!(relative_humidity_from_wet_bulb(f64::NAN, 10.0, P).is_nan());
    }
}
