//! Problem formulation for bracket refinement.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};

/// A single evaluation of the function being inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Sample {
    pub(super) x: f64,
    pub(super) value: f64,
}

/// The function produced a non-finite value.
///
/// Reported to the bisection observer so it can steer away from the
/// infeasible region.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("non-finite value at x={x}")]
pub(super) struct NonFiniteValue {
    x: f64,
}

/// Model adapter exposing a scalar function to the bisection solver.
pub(super) struct ScalarModel<F> {
    f: F,
}

impl<F: Fn(f64) -> f64> ScalarModel<F> {
    pub(super) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: Fn(f64) -> f64> Model for ScalarModel<F> {
    type Input = f64;
    type Output = Sample;
    type Error = NonFiniteValue;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let x = *input;
        let value = (self.f)(x);
        if value.is_finite() {
            Ok(Sample { x, value })
        } else {
            Err(NonFiniteValue { x })
        }
    }
}

/// Equation problem matching a target value.
///
/// Computes the residual as `direction * (f(x) - target)`, where `direction`
/// orients the residual so that it increases with `x` across the bracket.
pub(super) struct MatchTarget {
    target: f64,
    direction: f64,
}

impl MatchTarget {
    pub(super) fn new(target: f64, increasing: bool) -> Self {
        Self {
            target,
            direction: if increasing { 1.0 } else { -1.0 },
        }
    }
}

impl EquationProblem<1> for MatchTarget {
    type Input = f64;
    type Output = Sample;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.direction * (output.value - self.target)])
    }
}
