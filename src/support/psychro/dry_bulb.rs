//! Dry-bulb temperature from other properties.

use tracing::debug;

use crate::support::{
    constraint::{Constraint, NonNegative},
    solve::{RootFinderConfig, find_root},
};

use super::{density, density_from_relative_humidity};

/// Dry-bulb temperature [°C] from enthalpy `h` [J/kg] and humidity ratio `w`.
///
/// Inverse of [`enthalpy`](super::enthalpy).
#[must_use]
pub fn dry_bulb_from_enthalpy(h: f64, w: f64) -> f64 {
    if NonNegative::check(&w).is_err() {
        return f64::NAN;
    }
    (h / 1000.0 - 2501.0 * w) / (1.006 + 1.86 * w)
}

/// Dry-bulb temperature [°C] at which moist air of humidity ratio `w` has
/// density `rho` [kg/m³].
///
/// Searches `[-20, 100]` °C to 0.005 K; see [`dry_bulb_from_density_with`].
/// Returns `NaN` if no temperature in the interval matches.
#[must_use]
pub fn dry_bulb_from_density(rho: f64, w: f64, p: f64) -> f64 {
    dry_bulb_from_density_with(rho, w, p, &RootFinderConfig::default())
}

/// Like [`dry_bulb_from_density`], with explicit search bounds and tolerance.
#[must_use]
pub fn dry_bulb_from_density_with(rho: f64, w: f64, p: f64, config: &RootFinderConfig) -> f64 {
    find_root(|t| density(t, w, p), rho, config).unwrap_or_else(|error| {
        debug!(rho, w, p, %error, "no dry bulb matches density");
        f64::NAN
    })
}

/// Dry-bulb temperature [°C] at which air of relative humidity `rh` ∈ [0, 1]
/// has density `rho` [kg/m³].
///
/// Temperatures where `rh` cannot exist at `p` (saturation pressure above
/// total pressure) are skipped by the search.
#[must_use]
pub fn dry_bulb_from_density_and_relative_humidity(rho: f64, rh: f64, p: f64) -> f64 {
    dry_bulb_from_density_and_relative_humidity_with(rho, rh, p, &RootFinderConfig::default())
}

/// Like [`dry_bulb_from_density_and_relative_humidity`], with explicit search
/// bounds and tolerance.
#[must_use]
pub fn dry_bulb_from_density_and_relative_humidity_with(
    rho: f64,
    rh: f64,
    p: f64,
    config: &RootFinderConfig,
) -> f64 {
    find_root(|t| density_from_relative_humidity(t, rh, p), rho, config).unwrap_or_else(|error| {
        debug!(rho, rh, p, %error, "no dry bulb matches density");
        f64::NAN
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::psychro::{STANDARD_PRESSURE, enthalpy};

    const P: f64 = STANDARD_PRESSURE;

    #[test]
    fn enthalpy_round_trip() {
        for (t, w) in [(-10.0, 0.001), (20.0, 0.007_261_7), (45.0, 0.03)] {
            assert_relative_eq!(dry_bulb_from_enthalpy(enthalpy(t, w), w), t, epsilon = 1e-10);
        }
        assert!(dry_bulb_from_enthalpy(40_000.0, -0.01).is_nan());
    }

    #[test]
    fn from_density() {
        let w = 0.007_261_7;
        let rho = density(20.0, w, P);

        let config = RootFinderConfig::default();
        assert_relative_eq!(dry_bulb_from_density(rho, w, P), 20.0, epsilon = config.x_tol);

        let fine = config.with_x_tol(1e-8);
        assert_relative_eq!(dry_bulb_from_density_with(rho, w, P, &fine), 20.0, epsilon = 1e-7);
    }

    #[test]
    fn from_density_and_relative_humidity() {
        let rho = density_from_relative_humidity(35.0, 0.6, P);
        let fine = RootFinderConfig::default().with_x_tol(1e-8);

        let t = dry_bulb_from_density_and_relative_humidity_with(rho, 0.6, P, &fine);
        assert_relative_eq!(t, 35.0, epsilon = 1e-7);
    }

    #[test]
    fn saturated_air_near_boiling() {
        // Saturation pressure exceeds total pressure just below 100 °C.
        let rho = density_from_relative_humidity(99.0, 1.0, P);
        let t = dry_bulb_from_density_and_relative_humidity(rho, 1.0, P);
        assert_relative_eq!(t, 99.0, epsilon = 0.005);
    }

    #[test]
    fn density_out_of_range() {
        // Denser than any air in the default interval.
        assert!(dry_bulb_from_density(2.0, 0.0, P).is_nan());

        let narrow = RootFinderConfig::default().with_bounds(-80.0, -40.0);
        let rho = density(-60.0, 0.0, P);
        let t = dry_bulb_from_density_with(rho, 0.0, P, &narrow);
        assert_relative_eq!(t, -60.0, epsilon = 0.005);
        assert!(dry_bulb_from_density(rho, 0.0, P).is_nan());
    }
}
