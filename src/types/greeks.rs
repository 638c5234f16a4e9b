//! Greeks result type shared by both pricing engines.

/// Option price sensitivities.
///
/// Produced fresh by each pricer and always fully populated: a `greeks`
/// call either yields all five sensitivities or fails.
///
/// # Conventions
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `vega`: ∂V/∂σ, per unit of volatility
/// - `theta`: −∂V/∂T (time decay; typically negative)
/// - `rho`: ∂V/∂r, per unit of rate
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: f64,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: f64,
    /// Vega: ∂V/∂σ (sensitivity to volatility).
    pub vega: f64,
    /// Theta: −∂V/∂T (time decay).
    pub theta: f64,
    /// Rho: ∂V/∂r (sensitivity to interest rate).
    pub rho: f64,
}
