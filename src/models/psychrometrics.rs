//! Moist-air (psychrometric) state models.
//!
//! This module provides a [`twine_core::Model`] implementation that resolves
//! the full thermodynamic state of humid air from a dry-bulb temperature and
//! one humidity indicator.
//! The computational core is in the internal `core` module and is reachable
//! directly through [`MoistAir`].
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_psychrometrics::models::psychrometrics::{HumidityIndicator, Known, MoistAirModel};
//! use uom::si::{
//!     f64::{Ratio, ThermodynamicTemperature},
//!     ratio::percent,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let known = Known::at_standard_pressure(
//!     ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!     HumidityIndicator::RelativeHumidity(Ratio::new::<percent>(50.0)),
//! );
//!
//! let state = MoistAirModel::default().call(&known).unwrap();
//! assert!((state.wet_bulb.get::<degree_celsius>() - 13.78).abs() < 0.01);
//! assert!((state.dew_point.get::<degree_celsius>() - 9.27).abs() < 0.01);
//! ```

mod core;

pub use self::core::{
    HumidityIndicator, Inputs, Known, Measurements, MoistAir, MoistAirConfig,
    PsychrometricState, StateError,
};

use twine_core::Model;

/// [`twine_core::Model`] adapter around [`MoistAir::state`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoistAirModel {
    config: MoistAirConfig,
}

impl MoistAirModel {
    /// Creates a model that solves with the given configuration.
    #[must_use]
    pub fn new(config: MoistAirConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &MoistAirConfig {
        &self.config
    }
}

impl Model for MoistAirModel {
    type Input = Known;
    type Output = PsychrometricState;
    type Error = StateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        MoistAir::state(input, &self.config)
    }
}
