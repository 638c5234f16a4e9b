//! Solver tuning parameters.

use crate::types::ConfigError;

/// Default absolute tolerance on the price residual.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default iteration cap applied to each solver phase.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Tuning parameters for the implied volatility solver.
///
/// # Examples
///
/// ```
/// use optpricer::implied_vol::SolverConfig;
///
/// let config = SolverConfig::new(1e-6, 50).unwrap();
/// assert_eq!(config.tolerance(), 1e-6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a config with explicit tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `tolerance` is not a positive finite
    /// value or `max_iterations` is zero.
    pub fn new(tolerance: f64, max_iterations: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "tolerance",
                value: format!("must be a positive finite value, got {tolerance}"),
            });
        }
        if max_iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_iterations",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }

    /// Absolute tolerance on the price residual.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Iteration cap applied to each phase.
    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}
