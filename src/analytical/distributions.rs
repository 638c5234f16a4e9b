//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! The CDF is computed through `libm::erf`, which is accurate to full
//! double precision across the real line. Extreme arguments saturate at
//! 0 or 1 rather than raising numeric exceptions.

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) via the identity
/// Φ(x) = (1 + erf(x/√2)) / 2.
///
/// # Examples
/// ```
/// use optpricer::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-6.0) < 1e-8);
/// assert!(norm_cdf(6.0) > 1.0 - 1e-8);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Standard normal probability density function.
///
/// φ(x) = e^(-x²/2) / √(2π)
///
/// # Examples
/// ```
/// use optpricer::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
