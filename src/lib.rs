//! # Twine Psychrometrics
//!
//! Moist-air (psychrometric) property models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a dry-bulb temperature, one humidity indicator and the total
//! pressure, the crate resolves the full state of humid air: humidity ratio,
//! relative humidity, wet-bulb and dew-point temperatures, vapour pressures,
//! enthalpy, specific volume, density and degree of saturation.
//! Correlations follow the ASHRAE Handbook, Fundamentals (2017), ch. 1.
//!
//! ## Crate layout
//!
//! - [`models`]: The typed [`twine_core::Model`] for moist-air states.
//! - [`support`]: Supporting utilities, including the scalar property engine
//!   in [`support::psychro`] and the root finders in [`support::solve`].
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Logging
//!
//! Solver fallbacks and failures are reported as [`tracing`] events at the
//! `debug` level, and iteration counts at `trace`.
//! The crate never installs a subscriber.

pub mod models;
pub mod support;
