//! Bounded Newton–Raphson iteration.

use tracing::trace;

use super::SolveError;

/// Configuration for [`newton`] and [`newton_with_derivative`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonConfig {
    /// Maximum iteration count.
    pub max_iters: usize,

    /// Absolute tolerance on the step size `|x_{n+1} - x_n|`.
    pub x_tol: f64,

    /// Step used for the central-difference derivative in [`newton`].
    pub derivative_step: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iters: 50,
            x_tol: 1e-6,
            derivative_step: 1e-4,
        }
    }
}

impl NewtonConfig {
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    #[must_use]
    pub fn with_x_tol(self, x_tol: f64) -> Self {
        Self { x_tol, ..self }
    }
}

/// A converged Newton iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSolution {
    /// Final iterate.
    pub x: f64,

    /// Iterate before `x`.
    ///
    /// Equal to `x` when the residual vanished before any step was taken.
    pub previous: f64,

    /// Number of Newton steps taken.
    pub iters: usize,
}

/// Solves `f(x) = 0` with a central-difference derivative.
///
/// The derivative is estimated over `[x - h, x + h]` with `h` from
/// [`NewtonConfig::derivative_step`], shortened to one side near a bound so
/// that `f` is never evaluated outside `bounds`.
///
/// # Errors
///
/// See [`newton_with_derivative`].
pub fn newton(
    f: impl Fn(f64) -> f64,
    x0: f64,
    bounds: [f64; 2],
    config: &NewtonConfig,
) -> Result<NewtonSolution, SolveError> {
    let [lower, upper] = bounds;
    let h = config.derivative_step;

    let derivative = |x: f64| {
        let a = (x - h).max(lower);
        let b = (x + h).min(upper);
        (f(b) - f(a)) / (b - a)
    };

    newton_with_derivative(&f, derivative, x0, bounds, config)
}

/// Solves `f(x) = 0` given the derivative `df`.
///
/// Iterates are clamped to `bounds` (`[lower, upper]`).
/// Iteration stops when a step is no larger than [`NewtonConfig::x_tol`] or
/// the residual is exactly zero.
///
/// # Errors
///
/// - [`SolveError::NotBracketed`] if the bounds are not an ordered interval,
///   or if the iteration is pinned against a bound (the root lies outside).
/// - [`SolveError::NonFinite`] if `f` or `df` is not finite, or `df` is zero.
/// - [`SolveError::MaxIters`] if the step tolerance is not met in time.
pub fn newton_with_derivative(
    f: impl Fn(f64) -> f64,
    df: impl Fn(f64) -> f64,
    x0: f64,
    bounds: [f64; 2],
    config: &NewtonConfig,
) -> Result<NewtonSolution, SolveError> {
    let [lower, upper] = bounds;
    if lower.is_nan() || upper.is_nan() || lower >= upper {
        return Err(SolveError::NotBracketed { lower, upper });
    }
    if !x0.is_finite() {
        return Err(SolveError::NonFinite { x: x0 });
    }

    let mut x = x0.clamp(lower, upper);
    let mut previous = x;

    for iter in 1..=config.max_iters {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(SolveError::NonFinite { x });
        }
        if fx == 0.0 {
            return Ok(NewtonSolution {
                x,
                previous,
                iters: iter - 1,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() || dfx == 0.0 {
            return Err(SolveError::NonFinite { x });
        }

        let unclamped = x - fx / dfx;
        let next = unclamped.clamp(lower, upper);
        if next == x && unclamped != next {
            return Err(SolveError::NotBracketed { lower, upper });
        }

        previous = x;
        x = next;

        if (x - previous).abs() <= config.x_tol {
            trace!(iters = iter, x, "newton converged");
            return Ok(NewtonSolution {
                x,
                previous,
                iters: iter,
            });
        }
    }

    Err(SolveError::MaxIters {
        x,
        previous,
        iters: config.max_iters,
    })
}
