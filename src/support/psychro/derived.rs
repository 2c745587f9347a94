//! Properties that follow directly from dry bulb, humidity ratio and pressure.

use crate::support::constraint::{Constraint, NonNegative, StrictlyPositive};

use super::{
    DRY_AIR_GAS_CONSTANT, MOLAR_MASS_RATIO, ZERO_CELSIUS, humidity_ratio_from_relative_humidity,
    humidity_ratio_from_vapour_pressure, humidity_ratio_from_wet_bulb, saturation_vapour_pressure,
};

/// Moist-air specific enthalpy [J/kg dry air].
///
/// ASHRAE Fundamentals (2017) ch. 1 eqn 30, referenced to dry air and liquid
/// water at 0 °C.
#[must_use]
pub fn enthalpy(t_db: f64, w: f64) -> f64 {
    if NonNegative::check(&w).is_err() {
        return f64::NAN;
    }
    (1.006 * t_db + w * (2501.0 + 1.86 * t_db)) * 1000.0
}

/// Humidity ratio [kg/kg] from enthalpy `h` [J/kg] and dry bulb `t_db` [°C].
///
/// Returns `NaN` if the enthalpy is too low for dry air at `t_db`.
#[must_use]
pub fn humidity_ratio_from_enthalpy(h: f64, t_db: f64) -> f64 {
    let w = (h / 1000.0 - 1.006 * t_db) / (2501.0 + 1.86 * t_db);
    if NonNegative::check(&w).is_err() {
        return f64::NAN;
    }
    w
}

/// Moist-air specific volume [m³/kg dry air].
///
/// ASHRAE Fundamentals (2017) ch. 1 eqn 26.
#[must_use]
pub fn specific_volume(t_db: f64, w: f64, p: f64) -> f64 {
    if NonNegative::check(&w).is_err() || StrictlyPositive::check(&p).is_err() {
        return f64::NAN;
    }
    DRY_AIR_GAS_CONSTANT * (t_db + ZERO_CELSIUS) * (1.0 + w / MOLAR_MASS_RATIO) / p
}

/// Moist-air density [kg moist air/m³].
#[must_use]
pub fn density(t_db: f64, w: f64, p: f64) -> f64 {
    (1.0 + w) / specific_volume(t_db, w, p)
}

/// Humidity ratio [kg/kg] of saturated air at `t_db` and `p`.
#[must_use]
pub fn saturation_humidity_ratio(t_db: f64, p: f64) -> f64 {
    humidity_ratio_from_vapour_pressure(saturation_vapour_pressure(t_db), p)
}

/// Ratio of the humidity ratio to its saturation value at the same `t_db`
/// and `p`.
#[must_use]
pub fn degree_of_saturation(t_db: f64, w: f64, p: f64) -> f64 {
    if NonNegative::check(&w).is_err() {
        return f64::NAN;
    }
    w / saturation_humidity_ratio(t_db, p)
}

/// [`enthalpy`] from relative humidity `rh` ∈ [0, 1].
#[must_use]
pub fn enthalpy_from_relative_humidity(t_db: f64, rh: f64, p: f64) -> f64 {
    enthalpy(t_db, humidity_ratio_from_relative_humidity(t_db, rh, p))
}

/// [`enthalpy`] from wet bulb.
#[must_use]
pub fn enthalpy_from_wet_bulb(t_db: f64, t_wb: f64, p: f64) -> f64 {
    enthalpy(t_db, humidity_ratio_from_wet_bulb(t_db, t_wb, p))
}

/// [`specific_volume`] from relative humidity `rh` ∈ [0, 1].
#[must_use]
pub fn specific_volume_from_relative_humidity(t_db: f64, rh: f64, p: f64) -> f64 {
    specific_volume(t_db, humidity_ratio_from_relative_humidity(t_db, rh, p), p)
}

/// [`specific_volume`] from wet bulb.
#[must_use]
pub fn specific_volume_from_wet_bulb(t_db: f64, t_wb: f64, p: f64) -> f64 {
    specific_volume(t_db, humidity_ratio_from_wet_bulb(t_db, t_wb, p), p)
}

/// [`density`] from relative humidity `rh` ∈ [0, 1].
#[must_use]
pub fn density_from_relative_humidity(t_db: f64, rh: f64, p: f64) -> f64 {
    density(t_db, humidity_ratio_from_relative_humidity(t_db, rh, p), p)
}

/// [`density`] from wet bulb.
#[must_use]
pub fn density_from_wet_bulb(t_db: f64, t_wb: f64, p: f64) -> f64 {
    density(t_db, humidity_ratio_from_wet_bulb(t_db, t_wb, p), p)
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

        assert_relative_eq!(enthalpy(20.0, w), 38_551.7, epsilon = 1.0);
        assert_relative_eq!(specific_volume(20.0, w, P), 0.84016, epsilon = 1e-5);
        assert_relative_eq!(density(20.0, w, P), 1.19890, epsilon = 1e-5);

        assert_relative_eq!(enthalpy_from_relative_humidity(20.0, 0.5, P), enthalpy(20.0, w));
        assert_relative_eq!(density_from_relative_humidity(20.0, 0.5, P), density(20.0, w, P));
    }

    #[test]
    fn enthalpy_inverts() {
        let h = enthalpy(32.0, 0.012);
        assert_relative_eq!(humidity_ratio_from_enthalpy(h, 32.0), 0.012, epsilon = 1e-12);
        assert!(humidity_ratio_from_enthalpy(h, 80.0).is_nan());
    }

    #[test]
    fn density_decreases_with_temperature() {
        let w = 0.008;
        let mut previous = f64::INFINITY;
        for i in 0_i32..=24 {
            let t = -20.0 + 5.0 * f64::from(i);
            let rho = density(t, w, P);
            assert!(rho < previous);
            previous = rho;
        }
    }

    #[test]
    fn degree_of_saturation_bounds() {
        assert_relative_eq!(degree_of_saturation(20.0, 0.0, P), 0.0);
        let ws = saturation_humidity_ratio(20.0, P);
        assert_relative_eq!(degree_of_saturation(20.0, ws, P), 1.0);

        let mu = degree_of_saturation(20.0, humidity_ratio_from_relative_humidity(20.0, 0.5, P), P);
        assert!(mu < 0.5);
    }

    #[test]
    fn wet_bulb_variants_agree() {
        let t_wb = 13.7836;
        let w = humidity_ratio_from_wet_bulb(20.0, t_wb, P);
        assert_relative_eq!(enthalpy_from_wet_bulb(20.0, t_wb, P), enthalpy(20.0, w));
        assert_relative_eq!(
            specific_volume_from_wet_bulb(20.0, t_wb, P),
            specific_volume(20.0, w, P)
        );
        assert_relative_eq!(density_from_wet_bulb(20.0, t_wb, P), density(20.0, w, P));
        assert!(enthalpy_from_wet_bulb(20.0, 25.0, P).is_nan());
    }

    #[test]
    fn invalid_inputs_are_nan() {
        assert!(enthalpy(20.0, -0.01).is_nan());
        assert!(specific_volume(20.0, 0.01, 0.0).is_nan());
        assert!(density(20.0, 0.01, -1.0).is_nan());
        assert!(specific_volume_from_relative_humidity(20.0, 1.5, P).is_nan());
        assert!(saturation_humidity_ratio(120.0, P).is_nan());
    }
}
