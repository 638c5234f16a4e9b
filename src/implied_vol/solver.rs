//! Two-phase implied volatility root finder.

use std::f64::consts::PI;

use tracing::{debug, trace};

use super::config::SolverConfig;
use super::error::{ConvergenceError, ImpliedVolError};
use super::result::{SolveMethod, SolverResult};
use crate::analytical::BlackScholes;
use crate::types::{ConfigError, MarketInputs};

/// Default volatility bracket searched by the fallback phase.
pub const DEFAULT_BOUNDS: (f64, f64) = (1e-6, 5.0);

/// Vega below this floor makes a Newton step numerically meaningless.
const VEGA_FLOOR: f64 = 1e-8;

/// Implied volatility solver for European options.
///
/// Inverts the closed-form price for the volatility that reproduces an
/// observed market price. Runs Newton-Raphson from the
/// Brenner-Subrahmanyam starting guess, and falls back to bisection
/// over the volatility bracket whenever Newton stalls, leaves the
/// bracket, or runs out of iterations.
///
/// # Examples
///
/// ```
/// use optpricer::implied_vol::ImpliedVolSolver;
/// use optpricer::types::{MarketInputs, OptionType};
///
/// let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let solver = ImpliedVolSolver::with_defaults();
///
/// let result = solver.solve(&inputs, 10.450583572185565).unwrap();
/// assert!((result.volatility - 0.2).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ImpliedVolSolver {
    config: SolverConfig,
    bounds: (f64, f64),
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ImpliedVolSolver {
    /// Creates a solver with explicit config and volatility bracket.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the bracket is not a finite interval
    /// with `0 < lo < hi`.
    pub fn new(config: SolverConfig, bounds: (f64, f64)) -> Result<Self, ConfigError> {
        let (lo, hi) = bounds;
        if !lo.is_finite() || !hi.is_finite() || lo <= 0.0 || hi <= lo {
            return Err(ConfigError::DegenerateBounds { lo, hi });
        }
        Ok(Self { config, bounds })
    }

    /// Creates a solver with default tolerances and [`DEFAULT_BOUNDS`].
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
            bounds: DEFAULT_BOUNDS,
        }
    }

    /// Returns the tuning parameters.
    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the volatility bracket.
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    /// Solves for the volatility that reprices to `market_price`.
    ///
    /// The `volatility` field of `inputs` is ignored; the solver
    /// substitutes its own candidates.
    ///
    /// # Errors
    ///
    /// - [`ImpliedVolError::InvalidMarketPrice`] if `market_price` is
    ///   not positive and finite.
    /// - [`ImpliedVolError::Domain`] if the remaining inputs violate
    ///   the pricing domain.
    /// - [`ImpliedVolError::Convergence`] if the price never crosses
    ///   `market_price` inside the bracket, or both phases run out of
    ///   iterations.
    pub fn solve(
        &self,
        inputs: &MarketInputs,
        market_price: f64,
    ) -> Result<SolverResult, ImpliedVolError> {
        inputs.validate()?;
        if !market_price.is_finite() || market_price <= 0.0 {
            return Err(ImpliedVolError::InvalidMarketPrice {
                price: market_price,
            });
        }

        let newton_iterations = match self.newton(inputs, market_price)? {
            NewtonOutcome::Converged(result) => return Ok(result),
            NewtonOutcome::Failed { iterations } => iterations,
        };
        debug!(
            newton_iterations,
            "newton phase failed, falling back to bisection"
        );
        self.bisect(inputs, market_price, newton_iterations)
    }

    /// Model price residual at a candidate volatility.
    fn residual(
        &self,
        inputs: &MarketInputs,
        sigma: f64,
        market_price: f64,
    ) -> Result<f64, ImpliedVolError> {
        let pricer = BlackScholes::new(MarketInputs {
            volatility: sigma,
            ..*inputs
        })?;
        Ok(pricer.price() - market_price)
    }

    fn newton(
        &self,
        inputs: &MarketInputs,
        market_price: f64,
    ) -> Result<NewtonOutcome, ImpliedVolError> {
        let (lo, hi) = self.bounds;
        let tolerance = self.config.tolerance();

        // Brenner-Subrahmanyam approximation as the starting point.
        let guess = (2.0 * PI / inputs.expiry).sqrt() * market_price / inputs.spot;
        let mut sigma = guess.clamp(lo, hi);
        debug!(guess, sigma, "starting newton phase");

        for iteration in 1..=self.config.max_iterations() {
            let pricer = BlackScholes::new(MarketInputs {
                volatility: sigma,
                ..*inputs
            })?;
            let residual = pricer.price() - market_price;
            trace!(iteration, sigma, residual, "newton iterate");

            if residual.abs() < tolerance {
                debug!(sigma, iteration, "newton converged");
                return Ok(NewtonOutcome::Converged(SolverResult {
                    volatility: sigma,
                    iterations: iteration,
                    method: SolveMethod::Newton,
                }));
            }

            let vega = pricer.vega();
            if vega < VEGA_FLOOR {
                trace!(vega, "vega below floor, abandoning newton");
                return Ok(NewtonOutcome::Failed {
                    iterations: iteration,
                });
            }

            let next = sigma - residual / vega;
            if !next.is_finite() || next <= lo || next >= hi {
                trace!(next, "newton step left the bracket");
                return Ok(NewtonOutcome::Failed {
                    iterations: iteration,
                });
            }
            sigma = next;
        }

        Ok(NewtonOutcome::Failed {
            iterations: self.config.max_iterations(),
        })
    }

    fn bisect(
        &self,
        inputs: &MarketInputs,
        market_price: f64,
        prior_iterations: usize,
    ) -> Result<SolverResult, ImpliedVolError> {
        let (mut lo, mut hi) = self.bounds;
        let tolerance = self.config.tolerance();

        let mut f_lo = self.residual(inputs, lo, market_price)?;
        let f_hi = self.residual(inputs, hi, market_price)?;
        if f_lo * f_hi > 0.0 {
            return Err(ConvergenceError::BracketInvalid { lo, hi, f_lo, f_hi }.into());
        }

        let mut mid = 0.5 * (lo + hi);
        let mut f_mid = 0.0;
        for iteration in 1..=self.config.max_iterations() {
            mid = 0.5 * (lo + hi);
            f_mid = self.residual(inputs, mid, market_price)?;
            trace!(iteration, lo, hi, f_mid, "bisection iterate");

            if f_mid.abs() < tolerance || (hi - lo) < tolerance {
                debug!(sigma = mid, iteration, "bisection converged");
                return Ok(SolverResult {
                    volatility: mid,
                    iterations: prior_iterations + iteration,
                    method: SolveMethod::Bisection,
                });
            }

            if f_lo * f_mid <= 0.0 {
                hi = mid;
            } else {
                lo = mid;
                f_lo = f_mid;
            }
        }

        Err(ConvergenceError::Exhausted {
            phase: SolveMethod::Bisection,
            last_sigma: mid,
            last_residual: f_mid,
            iterations: self.config.max_iterations(),
        }
        .into())
    }
}

enum NewtonOutcome {
    Converged(SolverResult),
    Failed { iterations: usize },
}
