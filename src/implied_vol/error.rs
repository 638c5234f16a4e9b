//! Solver failure types.

use thiserror::Error;

use super::result::SolveMethod;
use crate::types::DomainError;

/// Root-finding failed to isolate or reach the implied volatility.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConvergenceError {
    /// The model price does not cross the market price anywhere in the
    /// volatility bracket, so no root exists inside it.
    #[error(
        "no sign change over volatility bracket [{lo}, {hi}]: \
         residual(lo) = {f_lo}, residual(hi) = {f_hi}"
    )]
    BracketInvalid {
        /// Lower volatility bound.
        lo: f64,
        /// Upper volatility bound.
        hi: f64,
        /// Price residual at the lower bound.
        f_lo: f64,
        /// Price residual at the upper bound.
        f_hi: f64,
    },

    /// The iteration cap was reached without meeting the tolerance.
    #[error(
        "{phase} phase exhausted {iterations} iterations: \
         last sigma = {last_sigma}, residual = {last_residual}"
    )]
    Exhausted {
        /// The phase that ran out of iterations.
        phase: SolveMethod,
        /// Volatility at the final iterate.
        last_sigma: f64,
        /// Price residual at the final iterate.
        last_residual: f64,
        /// Iterations consumed by the phase.
        iterations: usize,
    },
}

/// Any failure of an implied volatility solve.
#[derive(Debug, Error)]
pub enum ImpliedVolError {
    /// The observed market price is not usable as a calibration target.
    #[error("market price must be positive and finite, got {price}")]
    InvalidMarketPrice {
        /// The rejected price.
        price: f64,
    },

    /// The market inputs violate the pricing domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Root-finding failed.
    #[error(transparent)]
    Convergence(#[from] ConvergenceError),
}
