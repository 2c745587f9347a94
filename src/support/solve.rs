//! Scalar root finding for property inversions.
//!
//! Many moist-air relations have no closed-form inverse: the dew point is the
//! temperature at which the saturation curve reaches a given vapour pressure,
//! the wet-bulb temperature is defined implicitly by an energy balance, and the
//! dry-bulb temperature for a given density must be searched for.
//! This module provides the two solvers those inversions share:
//!
//! - [`find_root`]: a bracketed search for monotonic functions.
//!   A coarse scan locates a sign change of `f(x) - target`, then
//!   [`twine_solvers::equation::bisection`] refines the bracket.
//! - [`newton`] and [`newton_with_derivative`]: bounded Newton–Raphson
//!   iteration, with a numerically estimated or caller-supplied derivative.
//!
//! Both report failure as a [`SolveError`] and never panic.
//! Callers in [`psychro`](crate::support::psychro) map failures to `NaN`.
//!
//! # Example
//!
//! ```
//! use twine_psychrometrics::support::solve::{RootFinderConfig, find_root};
//!
//! // Invert a decreasing function on the default interval [-20, 100].
//! let x = find_root(|x| 50.0 - x, 12.5, &RootFinderConfig::default()).unwrap();
//! assert!((x - 37.5).abs() < 0.005);
//! ```

mod error;
mod newton;
mod root_finder;

pub use error::SolveError;
pub use newton::{NewtonConfig, NewtonSolution, newton, newton_with_derivative};
pub use root_finder::{RootFinderConfig, find_root};
