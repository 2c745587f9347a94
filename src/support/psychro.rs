//! Scalar psychrometric property engine.
//!
//! Moist-air properties following ASHRAE Handbook, Fundamentals (2017) ch. 1,
//! in SI units throughout:
//!
//! - temperatures in °C
//! - pressures in Pa
//! - humidity ratios in kg water / kg dry air
//! - relative humidity as a fraction in `[0, 1]`
//! - specific enthalpy in J/kg dry air
//!
//! Every function here is pure and takes total pressure explicitly where it
//! matters.
//! Invalid or physically impossible input yields `NaN` instead of an error, so
//! these functions compose freely; the typed API in
//! [`crate::models::psychrometrics`] turns `NaN`s into errors.
//!
//! # Example
//!
//! ```
//! use twine_psychrometrics::support::psychro::{
//!     STANDARD_PRESSURE, dew_point_from_humidity_ratio, enthalpy,
//!     humidity_ratio_from_relative_humidity, wet_bulb_from_humidity_ratio,
//! };
//!
//! let (t, p) = (20.0, STANDARD_PRESSURE);
//! let w = humidity_ratio_from_relative_humidity(t, 0.5, p);
//!
//! let t_wb = wet_bulb_from_humidity_ratio(t, w, p);
//! let t_dp = dew_point_from_humidity_ratio(t, w, p);
//!
//! assert!((t_wb - 13.78).abs() < 0.05);
//! assert!((t_dp - 9.27).abs() < 0.05);
//! assert!((enthalpy(t, w) / 1000.0 - 38.55).abs() < 0.05);
//! ```

mod atmosphere;
mod derived;
mod dew_point;
mod dry_bulb;
mod humidity;
mod saturation;
mod wet_bulb;

pub use atmosphere::{pressure_at_altitude, temperature_at_altitude};
pub use derived::{
    degree_of_saturation, density, density_from_relative_humidity, density_from_wet_bulb,
    enthalpy, enthalpy_from_relative_humidity, enthalpy_from_wet_bulb,
    humidity_ratio_from_enthalpy, saturation_humidity_ratio, specific_volume,
    specific_volume_from_relative_humidity, specific_volume_from_wet_bulb,
};
pub use dew_point::{
    DewPointConfig, DewPointMethod, DewPointSolution, approximate_dew_point,
    dew_point_from_humidity_ratio, dew_point_from_relative_humidity,
    dew_point_from_relative_humidity_with, dew_point_from_vapour_pressure,
    dew_point_from_vapour_pressure_with, dew_point_from_wet_bulb, solve_dew_point,
};
pub use dry_bulb::{
    dry_bulb_from_density, dry_bulb_from_density_and_relative_humidity,
    dry_bulb_from_density_and_relative_humidity_with, dry_bulb_from_density_with,
    dry_bulb_from_enthalpy,
};
pub use humidity::{
    humidity_ratio_from_relative_humidity, humidity_ratio_from_specific_humidity,
    humidity_ratio_from_vapour_pressure, relative_humidity_from_humidity_ratio,
    relative_humidity_from_vapour_pressure, specific_humidity_from_humidity_ratio,
    vapour_pressure_from_humidity_ratio, vapour_pressure_from_relative_humidity,
};
pub use saturation::{
    d_ln_saturation_vapour_pressure, ln_saturation_vapour_pressure, saturation_vapour_pressure,
};
pub use wet_bulb::{
    WetBulbConfig, humidity_ratio_from_wet_bulb, relative_humidity_from_wet_bulb,
    solve_wet_bulb, wet_bulb_from_dew_point, wet_bulb_from_humidity_ratio,
    wet_bulb_from_humidity_ratio_with, wet_bulb_from_relative_humidity,
};

/// Ratio of the molar mass of water vapour to that of dry air.
pub const MOLAR_MASS_RATIO: f64 = 0.621_945;

/// Specific gas constant of dry air [J/(kg·K)].
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.042;

/// Offset between the Celsius and Kelvin scales [K].
pub const ZERO_CELSIUS: f64 = 273.15;

/// Standard sea-level atmospheric pressure [Pa].
pub const STANDARD_PRESSURE: f64 = 101_325.0;

/// Temperature at which the saturation curve switches from ice to water [°C].
pub const FREEZING_POINT: f64 = 0.0;

/// Lower end of the saturation correlation's domain [°C].
pub const MIN_TEMPERATURE: f64 = -100.0;

/// Upper end of the saturation correlation's domain [°C].
pub const MAX_TEMPERATURE: f64 = 200.0;

/// Relative slack allowed above saturation before a state counts as
/// supersaturated.
const SATURATION_TOLERANCE: f64 = 1e-9;
