//! Bracketed inversion of monotonic functions.

mod config;
mod problem;

pub use config::RootFinderConfig;

use tracing::{debug, trace};
use twine_solvers::equation::bisection;

use super::SolveError;

use problem::{MatchTarget, ScalarModel};

/// A bracket `[lower, upper]` across which `f(x) - target` changes sign.
#[derive(Debug, Clone, Copy)]
struct Bracket {
    lower: f64,
    upper: f64,
    increasing: bool,
}

/// Finds `x` in `[config.lower, config.upper]` such that `f(x) = target`.
///
/// `f` must be monotonic over the search interval; its direction is found by
/// probing the bracket ends.
/// The interval is scanned from the upper bound downward in steps of
/// [`RootFinderConfig::coarse_step`] until `f(x) - target` changes sign, and the
/// bracket is then refined by bisection.
///
/// Non-finite samples are treated as infeasible: the scan skips over them, and
/// during refinement they are taken to lie past the upper end of the root.
///
/// # Errors
///
/// Returns [`SolveError::NotBracketed`] if no sign change exists on the
/// interval (or the configuration is degenerate), and [`SolveError::MaxIters`]
/// or [`SolveError::Bisection`] if the refinement fails.
pub fn find_root(
    f: impl Fn(f64) -> f64,
    target: f64,
    config: &RootFinderConfig,
) -> Result<f64, SolveError> {
    let not_bracketed = SolveError::NotBracketed {
        lower: config.lower,
        upper: config.upper,
    };

    if !target.is_finite() {
        return Err(not_bracketed);
    }

    let Some(bracket) = scan(&f, target, config) else {
        debug!(
            target_value = target,
            lower = config.lower,
            upper = config.upper,
            "no sign change found"
        );
        return Err(not_bracketed);
    };

    for x in [bracket.lower, bracket.upper] {
        if f(x) == target {
            return Ok(x);
        }
    }

    let model = ScalarModel::new(&f);
    let problem = MatchTarget::new(target, bracket.increasing);

    let solution = bisection::solve(
        &model,
        &problem,
        [bracket.lower, bracket.upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Non-finite values come from the infeasible end of the domain
            // (e.g. saturation pressure exceeding total pressure), which the
            // oriented residual places above the root.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    let x = solution.snapshot.output.x;

    if solution.status != bisection::Status::Converged {
        return Err(SolveError::MaxIters {
            x,
            previous: x,
            iters: solution.iters,
        });
    }

    trace!(iters = solution.iters, x, "bracket refined");
    Ok(x)
}

/// Scans downward from the upper bound for a sign change of `f(x) - target`.
///
/// A segment whose upper sample is infeasible is first narrowed to its
/// feasible edge, so a root just below an infeasible region is still found.
fn scan(f: &impl Fn(f64) -> f64, target: f64, config: &RootFinderConfig) -> Option<Bracket> {
    let RootFinderConfig {
        lower,
        upper,
        coarse_step,
        ..
    } = *config;

    if lower.is_nan() || upper.is_nan() || lower >= upper {
        return None;
    }
    if coarse_step.is_nan() || coarse_step <= 0.0 {
        return None;
    }

    let residual = |x: f64| f(x) - target;

    let mut hi = upper;
    let mut r_hi = residual(hi);

    while hi > lower {
        let lo = (hi - coarse_step).max(lower);
        if lo >= hi {
            break;
        }
        let r_lo = residual(lo);

        let (edge, r_edge) = if r_hi.is_finite() || !r_lo.is_finite() {
            (hi, r_hi)
        } else {
            feasible_edge(&residual, lo, hi, config)
        };

        // Comparisons with NaN are false, so infeasible samples never bracket.
        let straddles = (r_lo <= 0.0 && r_edge >= 0.0) || (r_lo >= 0.0 && r_edge <= 0.0);
        if straddles {
            return Some(Bracket {
                lower: lo,
                upper: edge,
                increasing: r_edge > r_lo,
            });
        }

        hi = lo;
        r_hi = r_lo;
    }

    None
}

/// Narrows `[feasible, infeasible]` to the highest feasible sample found
/// within [`RootFinderConfig::x_tol`] of the boundary.
fn feasible_edge(
    residual: &impl Fn(f64) -> f64,
    mut feasible: f64,
    mut infeasible: f64,
    config: &RootFinderConfig,
) -> (f64, f64) {
    let mut r_feasible = residual(feasible);

    for _ in 0..config.max_iters {
        if infeasible - feasible <= config.x_tol {
            break;
        }
        let mid = 0.5 * (feasible + infeasible);
        let r_mid = residual(mid);
        if r_mid.is_finite() {
            feasible = mid;
            r_feasible = r_mid;
        } else {
            infeasible = mid;
        }
    }

    trace!(edge = feasible, "feasible edge located");
    (feasible, r_feasible)
}
