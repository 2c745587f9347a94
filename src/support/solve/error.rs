use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while inverting a scalar function.
#[derive(Debug, Error)]
pub enum SolveError {
    /// No sign change of the residual was found within the search interval.
    ///
    /// For a monotonic function this means the target lies outside the range
    /// the function covers on `[lower, upper]`.
    #[error("target not bracketed on [{lower}, {upper}]")]
    NotBracketed { lower: f64, upper: f64 },

    /// The iteration limit was reached without meeting the tolerance.
    #[error("solver hit iteration limit: x={x}, previous={previous}, iters={iters}")]
    MaxIters {
        /// Last iterate.
        x: f64,

        /// Iterate before the last one.
        ///
        /// Comparing `x` and `previous` shows whether the iteration was
        /// oscillating, for example across a discontinuity.
        previous: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The function or its derivative was not finite at `x`.
    #[error("non-finite evaluation at x={x}")]
    NonFinite { x: f64 },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),
}
