//! Closed-form conversions between humidity representations.
//!
//! All functions take total pressure explicitly and return `NaN` for invalid
//! or physically impossible input rather than failing.

use crate::support::constraint::{Constraint, NonNegative, StrictlyPositive, UnitInterval};

use super::{MOLAR_MASS_RATIO, SATURATION_TOLERANCE, saturation_vapour_pressure};

/// Partial pressure of water vapour [Pa] from humidity ratio `w` [kg/kg].
///
/// ASHRAE Fundamentals (2017) ch. 1 eqn 20 solved for `pv`.
#[must_use]
pub fn vapour_pressure_from_humidity_ratio(w: f64, p: f64) -> f64 {
    if NonNegative::check(&w).is_err() || StrictlyPositive::check(&p).is_err() {
        return f64::NAN;
    }
    p * w / (MOLAR_MASS_RATIO + w)
}

/// Humidity ratio [kg/kg] from partial pressure of water vapour `pv` [Pa].
///
/// ASHRAE Fundamentals (2017) ch. 1 eqn 20.
/// Returns `NaN` when `pv ≥ p`.
#[must_use]
pub fn humidity_ratio_from_vapour_pressure(pv: f64, p: f64) -> f64 {
    if NonNegative::check(&pv).is_err() || StrictlyPositive::check(&(p - pv)).is_err() {
        return f64::NAN;
    }
    MOLAR_MASS_RATIO * pv / (p - pv)
}

/// Partial pressure of water vapour [Pa] from relative humidity `rh` ∈ [0, 1].
#[must_use]
pub fn vapour_pressure_from_relative_humidity(t: f64, rh: f64) -> f64 {
    if UnitInterval::check(&rh).is_err() {
        return f64::NAN;
    }
    rh * saturation_vapour_pressure(t)
}

/// Relative humidity ∈ [0, 1] from partial pressure of water vapour `pv` [Pa].
///
/// Returns `NaN` if `pv` exceeds the saturation pressure at `t`.
#[must_use]
pub fn relative_humidity_from_vapour_pressure(t: f64, pv: f64) -> f64 {
    if NonNegative::check(&pv).is_err() {
        return f64::NAN;
    }
    let rh = pv / saturation_vapour_pressure(t);
    if rh.is_nan() || rh > 1.0 + SATURATION_TOLERANCE {
        return f64::NAN;
    }
    rh.min(1.0)
}

/// Humidity ratio [kg/kg] from relative humidity `rh` ∈ [0, 1].
///
/// ```
/// use twine_psychrometrics::support::psychro::humidity_ratio_from_relative_humidity;
///
/// let w = humidity_ratio_from_relative_humidity(20.0, 0.5, 101_325.0);
/// assert!((w - 0.00726).abs() < 1e-5);
///
/// assert_eq!(humidity_ratio_from_relative_humidity(20.0, 0.0, 101_325.0), 0.0);
/// assert!(humidity_ratio_from_relative_humidity(20.0, 1.5, 101_325.0).is_nan());
/// ```
#[must_use]
pub fn humidity_ratio_from_relative_humidity(t: f64, rh: f64, p: f64) -> f64 {
    humidity_ratio_from_vapour_pressure(vapour_pressure_from_relative_humidity(t, rh), p)
}

/// Relative humidity ∈ [0, 1] from humidity ratio `w` [kg/kg].
///
/// Returns `NaN` for a humidity ratio above saturation at `(t, p)`.
#[must_use]
pub fn relative_humidity_from_humidity_ratio(t: f64, w: f64, p: f64) -> f64 {
    relative_humidity_from_vapour_pressure(t, vapour_pressure_from_humidity_ratio(w, p))
}

/// Specific humidity [kg water / kg moist air] from humidity ratio.
#[must_use]
pub fn specific_humidity_from_humidity_ratio(w: f64) -> f64 {
    if NonNegative::check(&w).is_err() {
        return f64::NAN;
    }
    w / (1.0 + w)
}

/// Humidity ratio from specific humidity `q` ∈ [0, 1).
#[must_use]
pub fn humidity_ratio_from_specific_humidity(q: f64) -> f64 {
    if NonNegative::check(&q).is_err() || StrictlyPositive::check(&(1.0 - q)).is_err() {
        return f64::NAN;
    }
    q / (1.0 - q)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn relative_humidity_round_trip() {
        for t in [-20.0, -7.5, 0.0, 12.0, 35.0, 50.0] {
            for rh_percent in [0.0, 1.0, 25.0, 50.0, 75.0, 99.0, 100.0] {
                for p in [80_000.0, 92_500.0, 105_000.0] {
                    let rh = rh_percent / 100.0;
                    let w = humidity_ratio_from_relative_humidity(t, rh, p);
                    let back = relative_humidity_from_humidity_ratio(t, w, p);
                    assert_relative_eq!(back, rh, epsilon = 1e-6);
                }
            }
        }
    }

    #[test]
    fn dry_air_is_exactly_zero() {
        assert_eq!(humidity_ratio_from_relative_humidity(25.0, 0.0, 101_325.0), 0.0);
        assert_eq!(vapour_pressure_from_humidity_ratio(0.0, 101_325.0), 0.0);
        assert_eq!(relative_humidity_from_humidity_ratio(25.0, 0.0, 101_325.0), 0.0);
    }

    #[test]
    fn vapour_pressure_round_trip() {
        let p = 95_000.0;
        let pv = 1_500.0;
        let w = humidity_ratio_from_vapour_pressure(pv, p);
        assert_relative_eq!(vapour_pressure_from_humidity_ratio(w, p), pv, epsilon = 1e-9);
    }

    #[test]
    fn impossible_states_are_nan() {
        // Vapour pressure at or above total pressure.
        assert!(humidity_ratio_from_vapour_pressure(101_325.0, 101_325.0).is_nan());
        assert!(humidity_ratio_from_vapour_pressure(2_000.0, 1_000.0).is_nan());

        // Saturation pressure above total pressure (boiling at altitude).
        assert!(humidity_ratio_from_relative_humidity(100.0, 1.0, 80_000.0).is_nan());

        // More vapour than saturation allows.
        assert!(relative_humidity_from_humidity_ratio(20.0, 0.05, 101_325.0).is_nan());
    }

    #[test]
    fn invalid_inputs_are_nan() {
        assert!(humidity_ratio_from_relative_humidity(20.0, -0.1, 101_325.0).is_nan());
        assert!(humidity_ratio_from_relative_humidity(20.0, 0.5, 0.0).is_nan());
        assert!(humidity_ratio_from_relative_humidity(f64::NAN, 0.5, 101_325.0).is_nan());
        assert!(vapour_pressure_from_humidity_ratio(-0.001, 101_325.0).is_nan());
        assert!(vapour_pressure_from_humidity_ratio(0.01, f64::NAN).is_nan());
        assert!(relative_humidity_from_humidity_ratio(20.0, f64::NAN, 101_325.0).is_nan());
    }

    #[test]
    fn nan_temperature_is_not_saturation() {
        assert!(relative_humidity_from_vapour_pressure(f64::NAN, 1_000.0).is_nan());
        assert!(relative_humidity_from_humidity_ratio(f64::NAN, 0.007, 101_325.0).is_nan());
    }

    #[test]
    fn specific_humidity() {
        let w = 0.01;
        let q = specific_humidity_from_humidity_ratio(w);
        assert_relative_eq!(q, 0.01 / 1.01);
        assert_relative_eq!(humidity_ratio_from_specific_humidity(q), w, epsilon = 1e-15);
        assert!(humidity_ratio_from_specific_humidity(1.0).is_nan());
    }
}
