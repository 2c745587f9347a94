use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Humidity ratios, vapour pressures and degrees of saturation are all
/// non-negative; zero is meaningful (bone-dry air).
///
/// # Examples
///
/// ```
/// use twine_psychrometrics::support::constraint::{Constrained, NonNegative};
///
/// // A humidity ratio in kg/kg:
/// let w = NonNegative::new(0.0073).unwrap();
/// assert_eq!(w.into_inner(), 0.0073);
///
/// // Dry air is allowed:
/// assert!(Constrained::<f64, NonNegative>::new(0.0).is_ok());
///
/// // Error cases:
/// assert!(NonNegative::new(-1e-6).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
