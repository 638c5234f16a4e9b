//! Solver output types.

use std::fmt;

/// Which root-finding method produced the solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveMethod {
    /// Newton-Raphson iteration on the vega-scaled residual.
    Newton,
    /// Interval bisection over the volatility bracket.
    Bisection,
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveMethod::Newton => write!(f, "newton"),
            SolveMethod::Bisection => write!(f, "bisection"),
        }
    }
}

/// A converged implied volatility solution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// The implied volatility (annualized).
    pub volatility: f64,
    /// Total iterations consumed across both phases.
    pub iterations: usize,
    /// The method that produced the converged value.
    pub method: SolveMethod,
}
