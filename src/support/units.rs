//! Extensions to [`uom`].
//!
//! The typed state API uses [`uom`] for every physical quantity.
//! This module fills the gaps that matter for moist air:
//!
//! - [`SpecificEnthalpy`]: J/kg of dry air, which [`uom`] only offers under the
//!   name `AvailableEnergy`.
//! - [`TemperatureDifference`]: subtraction of absolute temperatures, used for
//!   wet-bulb depression and dew-point spread.
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use twine_psychrometrics::support::units::TemperatureDifference;
//!
//! let dry_bulb = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let wet_bulb = ThermodynamicTemperature::new::<degree_celsius>(13.8);
//! let depression = dry_bulb.minus(wet_bulb);
//! assert!((depression.get::<temperature_interval::kelvin>() - 6.2).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::SpecificEnthalpy;
pub use temperature_difference::TemperatureDifference;
