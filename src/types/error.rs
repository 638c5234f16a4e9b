//! Error types shared across the pricing engines.
//!
//! This module provides:
//! - `DomainError`: Invalid market inputs (downstream math is undefined)
//! - `ConfigError`: Invalid tuning parameters for an engine

use thiserror::Error;

/// Invalid market inputs.
///
/// Raised immediately when a `MarketInputs` snapshot violates the domain
/// of the pricing formulas: spot, strike, expiry, and volatility must be
/// strictly positive, and the dividend yield must be non-negative. Never
/// recovered internally.
///
/// # Examples
/// ```
/// use optpricer::types::DomainError;
///
/// let err = DomainError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid time to expiration (non-positive).
    #[error("Invalid time to expiration: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value, in years
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid dividend yield (negative).
    #[error("Invalid dividend yield: q = {dividend_yield}")]
    InvalidDividendYield {
        /// The invalid dividend yield value
        dividend_yield: f64,
    },
}

/// Invalid tuning parameter.
///
/// Raised during construction of a pricer or solver when a tuning
/// parameter is outside its valid range (path counts, iteration limits,
/// tolerances, volatility bounds).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Path count outside the valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Sample counts for a convergence sweep must be non-empty and
    /// strictly increasing.
    #[error("Invalid sample counts: {reason}")]
    InvalidSampleCounts {
        /// Description of the violation
        reason: String,
    },

    /// Degenerate volatility bounds (lo must be positive and below hi).
    #[error("Degenerate volatility bounds: [{lo}, {hi}]")]
    DegenerateBounds {
        /// Lower volatility bound
        lo: f64,
        /// Upper volatility bound
        hi: f64,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
