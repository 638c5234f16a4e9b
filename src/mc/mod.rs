//! Monte Carlo simulation pricer.
//!
//! Terminal-draw simulation of the risk-neutral lognormal model with
//! seeded, bit-reproducible runs, matched-draw finite-difference
//! Greeks, and a convergence sweep over increasing sample counts.

mod config;
mod error;
mod pricer;
mod result;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS};
pub use error::SimulationError;
pub use pricer::{MonteCarloPricer, DEFAULT_BUMP};
pub use result::{ConvergencePoint, ConvergenceRecord, PricingResult};
