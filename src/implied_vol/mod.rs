//! Implied volatility inversion.
//!
//! Recovers the annualized volatility that makes the closed-form price
//! match an observed market quote, using Newton-Raphson with a
//! bisection fallback.

mod config;
mod error;
mod result;
mod solver;

pub use config::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use error::{ConvergenceError, ImpliedVolError};
pub use result::{SolveMethod, SolverResult};
pub use solver::{ImpliedVolSolver, DEFAULT_BOUNDS};
