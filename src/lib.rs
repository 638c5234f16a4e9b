//! # optpricer: European Option Pricing Library
//!
//! Pricing and calibration tools for European vanilla options under the
//! Black-Scholes model with a continuous dividend yield:
//! - Closed-form prices and analytical Greeks (`analytical`)
//! - Monte Carlo simulation with reproducible seeded runs,
//!   matched-draw finite-difference Greeks, and convergence sweeps
//!   (`mc`)
//! - Implied volatility inversion via Newton-Raphson with a bisection
//!   fallback (`implied_vol`)
//!
//! ## Reproducibility
//!
//! Every simulation is driven by an explicit 64-bit seed. The parallel
//! payoff reduction uses fixed-size chunks combined in order, so a
//! given seed reproduces the same price bit-for-bit regardless of
//! thread count.
//!
//! ## Usage Examples
//!
//! ```rust
//! use optpricer::analytical::BlackScholes;
//! use optpricer::implied_vol::ImpliedVolSolver;
//! use optpricer::mc::{MonteCarloConfig, MonteCarloPricer};
//! use optpricer::types::{MarketInputs, OptionType};
//!
//! let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)?;
//!
//! // Closed form
//! let analytical = BlackScholes::new(inputs)?;
//! let reference = analytical.price();
//!
//! // Simulation
//! let config = MonteCarloConfig::builder().n_paths(100_000).seed(42).build()?;
//! let mut mc = MonteCarloPricer::new(config)?;
//! let estimate = mc.price(&inputs)?;
//! assert!((estimate.price - reference).abs() < 3.0 * estimate.std_error + 0.1);
//!
//! // Calibration
//! let solver = ImpliedVolSolver::with_defaults();
//! let implied = solver.solve(&inputs, reference)?;
//! assert!((implied.volatility - 0.2).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialisation support for input and result types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied_vol;
pub mod mc;
pub mod rng;
pub mod types;

pub use analytical::BlackScholes;
pub use implied_vol::ImpliedVolSolver;
pub use mc::MonteCarloPricer;
pub use types::{GreeksResult, MarketInputs, OptionType};
