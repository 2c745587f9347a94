//! Saturation vapour pressure of water.
//!
//! ASHRAE Handbook, Fundamentals (2017) ch. 1 eqn 5 (over ice) and eqn 6
//! (over liquid water), with temperatures in kelvin inside the correlation.
//!
//! The two branches meet at the freezing point (0 °C) rather than the triple
//! point (0.01 °C), so the curve has a small step there: about 0.06 Pa, or
//! roughly 1e-4 in `ln pws`.
//! Inversions that land on that step are flagged by the dew-point solver.

use super::{FREEZING_POINT, ZERO_CELSIUS};

const ICE: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024e-13,
    4.163_501_9,
];

const WATER: [f64; 6] = [
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    6.545_967_3,
];

/// Saturation vapour pressure [Pa] at dry-bulb temperature `t` [°C].
///
/// Accurate on roughly `[-100, 200]` °C; outside that range it still returns a
/// number.
/// `NaN` in gives `NaN` out.
#[must_use]
pub fn saturation_vapour_pressure(t: f64) -> f64 {
    ln_saturation_vapour_pressure(t).exp()
}

/// Natural logarithm of [`saturation_vapour_pressure`].
#[must_use]
pub fn ln_saturation_vapour_pressure(t: f64) -> f64 {
    let tk = t + ZERO_CELSIUS;

    if t < FREEZING_POINT {
        let [c1, c2, c3, c4, c5, c6, c7] = ICE;
        c1 / tk + c2 + tk * (c3 + tk * (c4 + tk * (c5 + tk * c6))) + c7 * tk.ln()
    } else {
        let [c8, c9, c10, c11, c12, c13] = WATER;
        c8 / tk + c9 + tk * (c10 + tk * (c11 + tk * c12)) + c13 * tk.ln()
    }
}

/// Derivative of [`ln_saturation_vapour_pressure`] with respect to `t` [1/K].
#[must_use]
pub fn d_ln_saturation_vapour_pressure(t: f64) -> f64 {
    let tk = t + ZERO_CELSIUS;

    if t < FREEZING_POINT {
        let [c1, _, c3, c4, c5, c6, c7] = ICE;
        -c1 / (tk * tk) + c3 + tk * (2.0 * c4 + tk * (3.0 * c5 + tk * 4.0 * c6)) + c7 / tk
    } else {
        let [c8, _, c10, c11, c12, c13] = WATER;
        -c8 / (tk * tk) + c10 + tk * (2.0 * c11 + tk * 3.0 * c12) + c13 / tk
    }
}
