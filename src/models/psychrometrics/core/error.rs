use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while resolving a moist-air state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    /// A dry bulb was given without any humidity indicator.
    #[error("no humidity indicator supplied")]
    MissingIndicator,

    /// More than one humidity indicator was given alongside the dry bulb.
    #[error("exactly one humidity indicator is allowed, got {supplied:?}")]
    ConflictingIndicators {
        /// Names of the indicators that were supplied.
        supplied: Vec<&'static str>,
    },

    /// No dry bulb was given, and the inputs are not the enthalpy and
    /// humidity ratio pair that determines one.
    #[error("dry-bulb temperature is required")]
    MissingDryBulb,

    /// Both a pressure and an altitude were given.
    #[error("pressure and altitude are mutually exclusive")]
    ConflictingPressure,

    /// An input value is out of its physical range.
    #[error("invalid {quantity}")]
    InvalidInput {
        /// The offending input.
        quantity: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// The humidity ratio exceeds saturation at the given dry bulb and pressure.
    #[error("humidity ratio {humidity_ratio} exceeds saturation ({saturation})")]
    Supersaturated {
        /// Humidity ratio [kg/kg].
        humidity_ratio: f64,

        /// Saturation humidity ratio [kg/kg], `NaN` if saturation is undefined.
        saturation: f64,
    },

    /// A quantity needed to define the state could not be computed.
    #[error("could not resolve {quantity}")]
    Unresolved {
        /// The quantity that failed.
        quantity: &'static str,
    },
}

impl StateError {
    pub(super) fn invalid(quantity: &'static str, source: ConstraintError) -> Self {
        Self::InvalidInput { quantity, source }
    }
}
