use twine_solvers::equation::bisection;

/// Search configuration for [`find_root`](super::find_root).
///
/// The defaults cover the dry-bulb range of ordinary building and weather
/// conditions: a `[-20, 100]` interval scanned in 10-unit steps and refined to
/// 0.005 units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFinderConfig {
    /// Lower end of the search interval.
    pub lower: f64,

    /// Upper end of the search interval.
    pub upper: f64,

    /// Step of the coarse scan that brackets the root.
    pub coarse_step: f64,

    /// Absolute tolerance on `x` for the bracket refinement.
    pub x_tol: f64,

    /// Absolute tolerance on the residual `f(x) - target`.
    pub residual_tol: f64,

    /// Maximum iteration count for the bracket refinement.
    pub max_iters: usize,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            lower: -20.0,
            upper: 100.0,
            coarse_step: 10.0,
            x_tol: 0.005,
            residual_tol: 1e-12,
            max_iters: 100,
        }
    }
}

impl RootFinderConfig {
    /// Returns this configuration with a different search interval.
    #[must_use]
    pub fn with_bounds(self, lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            ..self
        }
    }

    #[must_use]
    pub fn with_coarse_step(self, coarse_step: f64) -> Self {
        Self {
            coarse_step,
            ..self
        }
    }

    #[must_use]
    pub fn with_x_tol(self, x_tol: f64) -> Self {
        Self { x_tol, ..self }
    }

    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.x_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
