//! Market input parameters for option pricing.

use std::fmt;

use super::error::DomainError;

/// Option exercise payoff type.
///
/// European options only; the two variants are closed and both pricing
/// engines select formulas on this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: payoff max(S_T - K, 0).
    Call,
    /// Put option: payoff max(K - S_T, 0).
    Put,
}

impl OptionType {
    /// Returns the exercise payoff for a terminal price and strike.
    ///
    /// # Examples
    /// ```
    /// use optpricer::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (terminal - strike).max(0.0),
            OptionType::Put => (strike - terminal).max(0.0),
        }
    }

    /// True for the call variant.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Immutable market parameter snapshot consumed by every pricing engine.
///
/// Fields are public so callers (and the finite-difference Greeks) can
/// build perturbed copies with struct-update syntax; every engine entry
/// point re-validates via [`MarketInputs::validate`] before computing.
///
/// # Invariants
///
/// `spot`, `strike`, `expiry`, and `volatility` must be strictly
/// positive; `dividend_yield` must be non-negative.
///
/// # Examples
///
/// ```
/// use optpricer::types::{MarketInputs, OptionType};
///
/// let inputs = MarketInputs::new(100.0, 105.0, 0.25, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(inputs.dividend_yield, 0.0);
///
/// // Invalid volatility
/// assert!(MarketInputs::new(100.0, 105.0, 0.25, 0.05, 0.0, OptionType::Call).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInputs {
    /// Current spot price (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to expiration (T) in years.
    pub expiry: f64,
    /// Risk-free interest rate (r), annualised; may be negative.
    pub rate: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Continuous dividend yield (q), annualised.
    pub dividend_yield: f64,
    /// Call or put.
    pub option_type: OptionType,
}

impl MarketInputs {
    /// Creates a validated snapshot with zero dividend yield.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if any of spot, strike, expiry, or
    /// volatility is non-positive.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, DomainError> {
        let inputs = Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            dividend_yield: 0.0,
            option_type,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Returns a copy with the given dividend yield.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDividendYield`] if `q` is negative.
    pub fn with_dividend_yield(self, dividend_yield: f64) -> Result<Self, DomainError> {
        let inputs = Self {
            dividend_yield,
            ..self
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Returns a copy with the given volatility.
    ///
    /// Used by the implied-volatility solver to thread trial values of σ
    /// through the analytical pricer.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidVolatility`] if `volatility` is
    /// non-positive.
    pub fn with_volatility(self, volatility: f64) -> Result<Self, DomainError> {
        let inputs = Self { volatility, ..self };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Validates the domain invariants.
    ///
    /// # Errors
    ///
    /// Returns the [`DomainError`] naming the first offending field:
    /// spot, strike, expiry, or volatility non-positive, or dividend
    /// yield negative. NaN values fail the corresponding check.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(self.spot > 0.0) {
            return Err(DomainError::InvalidSpot { spot: self.spot });
        }
        if !(self.strike > 0.0) {
            return Err(DomainError::InvalidStrike {
                strike: self.strike,
            });
        }
        if !(self.expiry > 0.0) {
            return Err(DomainError::InvalidExpiry {
                expiry: self.expiry,
            });
        }
        if !(self.volatility > 0.0) {
            return Err(DomainError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        if !(self.dividend_yield >= 0.0) {
            return Err(DomainError::InvalidDividendYield {
                dividend_yield: self.dividend_yield,
            });
        }
        Ok(())
    }

    /// Discount factor to expiry: e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Dividend discount factor to expiry: e^(-qT).
    #[inline]
    pub fn dividend_factor(&self) -> f64 {
        (-self.dividend_yield * self.expiry).exp()
    }
}
