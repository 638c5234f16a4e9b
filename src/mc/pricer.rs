//! Monte Carlo pricing engine.
//!
//! Estimates European option prices by sampling terminal prices under
//! the risk-neutral lognormal model and discounting the average payoff.
//! Greeks are computed by finite differences with matched random draws:
//! every bumped revaluation replays the same seed, so the bumped and
//! base estimates share their simulation noise and the difference
//! isolates the sensitivity signal.

use rayon::prelude::*;
use tracing::debug;

use super::config::{MonteCarloConfig, MAX_PATHS};
use super::error::SimulationError;
use super::result::{ConvergencePoint, ConvergenceRecord, PricingResult};
use crate::rng::SimRng;
use crate::types::{ConfigError, DomainError, GreeksResult, MarketInputs};

/// Default relative/absolute bump for finite-difference Greeks.
pub const DEFAULT_BUMP: f64 = 0.01;

/// Fixed chunk size for the parallel payoff reduction.
///
/// Per-chunk partial sums are combined sequentially, so a given seed
/// reproduces the same price bit-for-bit regardless of thread count.
const REDUCTION_CHUNK: usize = 16_384;

/// Monte Carlo pricing engine for European options.
///
/// Holds a seeded RNG and a reusable draw buffer; all pricing state is
/// reset explicitly, never shared between calls.
///
/// # Examples
///
/// ```
/// use optpricer::mc::{MonteCarloConfig, MonteCarloPricer};
/// use optpricer::types::{MarketInputs, OptionType};
///
/// let config = MonteCarloConfig::builder().n_paths(10_000).seed(42).build().unwrap();
/// let mut pricer = MonteCarloPricer::new(config).unwrap();
///
/// let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let result = pricer.price(&inputs).unwrap();
/// assert!(result.price > 0.0);
/// assert!(result.std_error > 0.0);
/// ```
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    rng: SimRng,
    /// Reusable buffer of standard normal draws.
    randoms: Vec<f64>,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// If the configuration carries no seed, one is drawn from OS
    /// entropy and recorded, so the run stays replayable (see
    /// [`MonteCarloPricer::seed`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed() {
            Some(seed) => SimRng::from_seed(seed),
            None => SimRng::from_entropy(),
        };
        let randoms = vec![0.0; config.n_paths()];

        Ok(Self {
            config,
            rng,
            randoms,
        })
    }

    /// Creates a new pricer with a specific seed, overriding the config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn with_seed(config: MonteCarloConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let randoms = vec![0.0; config.n_paths()];
        Ok(Self {
            config,
            rng: SimRng::from_seed(seed),
            randoms,
        })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns the seed that determines all draws of this pricer.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Resets the RNG to its seed, replaying the draw sequence.
    pub fn reset(&mut self) {
        let seed = self.rng.seed();
        self.rng = SimRng::from_seed(seed);
    }

    /// Resets the RNG with a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = SimRng::from_seed(seed);
    }

    /// Prices a European option by simulation.
    ///
    /// Draws `n_paths` terminal prices
    /// S_T = S·exp[(r − q − σ²/2)T + σ√T·Z], discounts the mean payoff
    /// by e^(−rT), and reports the standard error of the mean.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the inputs violate the domain
    /// invariants.
    pub fn price(&mut self, inputs: &MarketInputs) -> Result<PricingResult, DomainError> {
        inputs.validate()?;
        Ok(self.simulate(inputs, self.config.n_paths()))
    }

    /// Computes finite-difference Greeks with the default bump size.
    ///
    /// Equivalent to [`MonteCarloPricer::greeks_with_bump`] with
    /// [`DEFAULT_BUMP`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the inputs violate the domain
    /// invariants.
    pub fn greeks(&mut self, inputs: &MarketInputs) -> Result<GreeksResult, DomainError> {
        inputs.validate()?;
        Ok(self.greeks_paired(inputs, DEFAULT_BUMP))
    }

    /// Computes finite-difference Greeks with an explicit bump size.
    ///
    /// Central differences for delta, vega, theta, and rho; three-point
    /// second difference for gamma. The spot bump is relative
    /// (`bump · S`); the volatility, expiry, and rate bumps are
    /// absolute, with the volatility and expiry bumps capped at half
    /// their value so bumped inputs stay in-domain. Every revaluation
    /// replays the same seed (matched draws).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] on invalid inputs and [`ConfigError`] if
    /// `bump` is not a positive finite value.
    pub fn greeks_with_bump(
        &mut self,
        inputs: &MarketInputs,
        bump: f64,
    ) -> Result<GreeksResult, SimulationError> {
        inputs.validate()?;
        if !bump.is_finite() || bump <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "bump",
                value: format!("must be a positive finite value, got {bump}"),
            }
            .into());
        }
        Ok(self.greeks_paired(inputs, bump))
    }

    /// Runs the price estimate at each requested sample count.
    ///
    /// The same seed is replayed for every count (common random
    /// numbers), so larger counts extend the smaller samples and the
    /// standard error decreases monotonically along the record.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] on invalid inputs, and [`ConfigError`]
    /// if `sample_counts` is empty, contains a count outside
    /// [1, 10_000_000], or is not strictly increasing.
    pub fn convergence_sweep(
        &mut self,
        inputs: &MarketInputs,
        sample_counts: &[usize],
    ) -> Result<ConvergenceRecord, SimulationError> {
        inputs.validate()?;
        validate_sample_counts(sample_counts)?;

        let seed = self.rng.seed();
        let mut points = Vec::with_capacity(sample_counts.len());

        for &n_paths in sample_counts {
            self.reset_with_seed(seed);
            let result = self.simulate(inputs, n_paths);
            debug!(
                n_paths,
                price = result.price,
                std_error = result.std_error,
                "convergence sweep point"
            );
            points.push(ConvergencePoint {
                n_paths,
                price: result.price,
                std_error: result.std_error,
            });
        }
        self.reset_with_seed(seed);

        Ok(ConvergenceRecord::new(points))
    }

    /// Simulates `n_paths` terminal draws for validated inputs.
    fn simulate(&mut self, inputs: &MarketInputs, n_paths: usize) -> PricingResult {
        if self.randoms.len() < n_paths {
            self.randoms.resize(n_paths, 0.0);
        }
        self.rng.fill_normal(&mut self.randoms[..n_paths]);

        let drift = (inputs.rate - inputs.dividend_yield
            - 0.5 * inputs.volatility * inputs.volatility)
            * inputs.expiry;
        let vol_sqrt_t = inputs.volatility * inputs.expiry.sqrt();
        let spot = inputs.spot;
        let strike = inputs.strike;
        let option_type = inputs.option_type;

        // Fixed-size chunks; partials are combined in chunk order below
        // so the reduction is independent of the thread schedule.
        let partials: Vec<(f64, f64)> = self.randoms[..n_paths]
            .par_chunks(REDUCTION_CHUNK)
            .map(|chunk| {
                let mut sum = 0.0;
                let mut sum_sq = 0.0;
                for &z in chunk {
                    let terminal = spot * (drift + vol_sqrt_t * z).exp();
                    let payoff = option_type.payoff(terminal, strike);
                    sum += payoff;
                    sum_sq += payoff * payoff;
                }
                (sum, sum_sq)
            })
            .collect();

        let (sum, sum_sq) = partials
            .iter()
            .fold((0.0, 0.0), |(s, sq), &(ps, psq)| (s + ps, sq + psq));

        let n = n_paths as f64;
        let mean = sum / n;
        let variance = if n_paths > 1 {
            ((sum_sq - n * mean * mean) / (n - 1.0)).max(0.0)
        } else {
            0.0
        };
        let std_error = (variance / n).sqrt();
        let discount = inputs.discount_factor();

        PricingResult {
            price: discount * mean,
            std_error: discount * std_error,
        }
    }

    /// Replays the seed and re-prices with perturbed inputs.
    fn paired_price(&mut self, inputs: &MarketInputs, seed: u64) -> f64 {
        self.reset_with_seed(seed);
        self.simulate(inputs, self.config.n_paths()).price
    }

    fn greeks_paired(&mut self, inputs: &MarketInputs, bump: f64) -> GreeksResult {
        let seed = self.rng.seed();

        // Relative bump for spot, absolute for σ, T, r; σ and T bumps
        // are capped so the down-bumped inputs remain strictly positive.
        let h_spot = bump.min(0.5) * inputs.spot;
        let h_vol = bump.min(0.5 * inputs.volatility);
        let h_time = bump.min(0.5 * inputs.expiry);
        let h_rate = bump;

        let base = self.paired_price(inputs, seed);

        let spot_up = self.paired_price(
            &MarketInputs {
                spot: inputs.spot + h_spot,
                ..*inputs
            },
            seed,
        );
        let spot_down = self.paired_price(
            &MarketInputs {
                spot: inputs.spot - h_spot,
                ..*inputs
            },
            seed,
        );
        let delta = (spot_up - spot_down) / (2.0 * h_spot);
        let gamma = (spot_up - 2.0 * base + spot_down) / (h_spot * h_spot);

        let vol_up = self.paired_price(
            &MarketInputs {
                volatility: inputs.volatility + h_vol,
                ..*inputs
            },
            seed,
        );
        let vol_down = self.paired_price(
            &MarketInputs {
                volatility: inputs.volatility - h_vol,
                ..*inputs
            },
            seed,
        );
        let vega = (vol_up - vol_down) / (2.0 * h_vol);

        // Theta is the negative of the expiry derivative: shorter
        // expiry minus longer expiry over the bump width.
        let time_short = self.paired_price(
            &MarketInputs {
                expiry: inputs.expiry - h_time,
                ..*inputs
            },
            seed,
        );
        let time_long = self.paired_price(
            &MarketInputs {
                expiry: inputs.expiry + h_time,
                ..*inputs
            },
            seed,
        );
        let theta = (time_short - time_long) / (2.0 * h_time);

        // The discount factor is re-derived from the bumped rate inside
        // the simulation, so rho includes the discounting effect.
        let rate_up = self.paired_price(
            &MarketInputs {
                rate: inputs.rate + h_rate,
                ..*inputs
            },
            seed,
        );
        let rate_down = self.paired_price(
            &MarketInputs {
                rate: inputs.rate - h_rate,
                ..*inputs
            },
            seed,
        );
        let rho = (rate_up - rate_down) / (2.0 * h_rate);

        self.reset_with_seed(seed);

        GreeksResult {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }
}

fn validate_sample_counts(sample_counts: &[usize]) -> Result<(), ConfigError> {
    if sample_counts.is_empty() {
        return Err(ConfigError::InvalidSampleCounts {
            reason: "at least one sample count is required".to_string(),
        });
    }
    for &count in sample_counts {
        if count == 0 || count > MAX_PATHS {
            return Err(ConfigError::InvalidSampleCounts {
                reason: format!("count {count} outside valid range [1, {MAX_PATHS}]"),
            });
        }
    }
    if sample_counts.windows(2).any(|w| w[0] >= w[1]) {
        return Err(ConfigError::InvalidSampleCounts {
            reason: "counts must be strictly increasing".to_string(),
        });
    }
    Ok(())
}
