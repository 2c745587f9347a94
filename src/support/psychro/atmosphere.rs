//! ICAO standard atmosphere in the troposphere.
//!
//! ASHRAE Fundamentals (2017) ch. 1 eqns 3 and 4, valid up to about 11 km.

use super::STANDARD_PRESSURE;

/// Standard atmospheric pressure [Pa] at altitude `z` [m] above sea level.
#[must_use]
pub fn pressure_at_altitude(z: f64) -> f64 {
    STANDARD_PRESSURE * (1.0 - 2.255_77e-5 * z).powf(5.2559)
}

/// Standard atmospheric temperature [°C] at altitude `z` [m] above sea level.
#[must_use]
pub fn temperature_at_altitude(z: f64) -> f64 {
    15.0 - 0.0065 * z
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sea_level() {
        assert_relative_eq!(pressure_at_altitude(0.0), 101_325.0);
        assert_relative_eq!(temperature_at_altitude(0.0), 15.0);
    }

    #[test]
    fn one_kilometre() {
        assert_relative_eq!(pressure_at_altitude(1000.0), 89_874.5, epsilon = 0.5);
        assert_relative_eq!(temperature_at_altitude(1000.0), 8.5, epsilon = 1e-12);
    }

    #[test]
    fn below_sea_level() {
        assert!(pressure_at_altitude(-400.0) > 101_325.0);
    }
}
