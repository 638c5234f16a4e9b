//! Black-Scholes pricing model for European options.
//!
//! Closed-form pricing and analytical Greeks under lognormal dynamics
//! with a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::{norm_cdf, norm_pdf};
use crate::types::{DomainError, GreeksResult, MarketInputs, OptionType};

/// Black-Scholes model for European option pricing.
///
/// Wraps a validated [`MarketInputs`] snapshot; once constructed, every
/// method is an infallible pure function of the snapshot.
///
/// # Examples
/// ```
/// use optpricer::analytical::BlackScholes;
/// use optpricer::types::{MarketInputs, OptionType};
///
/// let call = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let put = MarketInputs { option_type: OptionType::Put, ..call };
///
/// let c = BlackScholes::new(call).unwrap().price();
/// let p = BlackScholes::new(put).unwrap().price();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = c - p - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    inputs: MarketInputs,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model from a market snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the snapshot violates the domain
    /// invariants (non-positive S, K, T, or σ; negative q).
    pub fn new(inputs: MarketInputs) -> Result<Self, DomainError> {
        inputs.validate()?;
        Ok(Self { inputs })
    }

    /// Returns the underlying market snapshot.
    #[inline]
    pub fn inputs(&self) -> &MarketInputs {
        &self.inputs
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        let m = &self.inputs;
        let sqrt_t = m.expiry.sqrt();
        let log_moneyness = (m.spot / m.strike).ln();
        let drift = (m.rate - m.dividend_yield + 0.5 * m.volatility * m.volatility) * m.expiry;
        (log_moneyness + drift) / (m.volatility * sqrt_t)
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.inputs.volatility * self.inputs.expiry.sqrt()
    }

    /// Computes the European option price for the snapshot's option type.
    ///
    /// # Examples
    /// ```
    /// use optpricer::analytical::BlackScholes;
    /// use optpricer::types::{MarketInputs, OptionType};
    ///
    /// let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    /// let price = BlackScholes::new(inputs).unwrap().price();
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    pub fn price(&self) -> f64 {
        let m = &self.inputs;
        let d1 = self.d1();
        let d2 = self.d2();
        let discount = m.discount_factor();
        let div_discount = m.dividend_factor();

        match m.option_type {
            OptionType::Call => {
                m.spot * div_discount * norm_cdf(d1) - m.strike * discount * norm_cdf(d2)
            }
            OptionType::Put => {
                m.strike * discount * norm_cdf(-d2) - m.spot * div_discount * norm_cdf(-d1)
            }
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = e^(-qT)·N(d₁)
    /// - Put Delta = e^(-qT)·(N(d₁) - 1)
    #[inline]
    pub fn delta(&self) -> f64 {
        let div_discount = self.inputs.dividend_factor();
        let n_d1 = norm_cdf(self.d1());
        match self.inputs.option_type {
            OptionType::Call => div_discount * n_d1,
            OptionType::Put => div_discount * (n_d1 - 1.0),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = e^(-qT)·φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> f64 {
        let m = &self.inputs;
        m.dividend_factor() * norm_pdf(self.d1()) / (m.spot * m.volatility * m.expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ), per unit of volatility.
    ///
    /// Vega = S·e^(-qT)·φ(d₁)·√T, identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> f64 {
        let m = &self.inputs;
        m.spot * m.dividend_factor() * norm_pdf(self.d1()) * m.expiry.sqrt()
    }

    /// Computes Theta (−∂V/∂T), the time-decay convention.
    ///
    /// - Call Theta = -S·e^(-qT)·σ·φ(d₁)/(2√T) + q·S·e^(-qT)·N(d₁) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -S·e^(-qT)·σ·φ(d₁)/(2√T) - q·S·e^(-qT)·N(-d₁) + r·K·e^(-rT)·N(-d₂)
    pub fn theta(&self) -> f64 {
        let m = &self.inputs;
        let d1 = self.d1();
        let d2 = self.d2();
        let sqrt_t = m.expiry.sqrt();
        let discount = m.discount_factor();
        let div_discount = m.dividend_factor();

        let decay = -(m.spot * div_discount * m.volatility * norm_pdf(d1)) / (2.0 * sqrt_t);

        match m.option_type {
            OptionType::Call => {
                decay + m.dividend_yield * m.spot * div_discount * norm_cdf(d1)
                    - m.rate * m.strike * discount * norm_cdf(d2)
            }
            OptionType::Put => {
                decay - m.dividend_yield * m.spot * div_discount * norm_cdf(-d1)
                    + m.rate * m.strike * discount * norm_cdf(-d2)
            }
        }
    }

    /// Computes Rho (∂V/∂r), per unit of rate.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self) -> f64 {
        let m = &self.inputs;
        let d2 = self.d2();
        let discount = m.discount_factor();
        match m.option_type {
            OptionType::Call => m.strike * m.expiry * discount * norm_cdf(d2),
            OptionType::Put => -m.strike * m.expiry * discount * norm_cdf(-d2),
        }
    }

    /// Computes all five analytical Greeks at once.
    ///
    /// # Examples
    /// ```
    /// use optpricer::analytical::BlackScholes;
    /// use optpricer::types::{MarketInputs, OptionType};
    ///
    /// let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    /// let greeks = BlackScholes::new(inputs).unwrap().greeks();
    /// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
    /// assert!(greeks.gamma > 0.0);
    /// assert!(greeks.vega > 0.0);
    /// ```
    pub fn greeks(&self) -> GreeksResult {
        GreeksResult {
            delta: self.delta(),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(),
            rho: self.rho(),
        }
    }
}
