//! Result types for the simulation engine.

/// Monte Carlo pricing result.
///
/// Contains the price estimate and the standard error of the mean, both
/// already discounted to present value.
///
/// # Examples
///
/// ```
/// use optpricer::mc::PricingResult;
///
/// let result = PricingResult { price: 10.5, std_error: 0.05 };
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// One entry of a convergence sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergencePoint {
    /// Number of simulated paths for this estimate.
    pub n_paths: usize,
    /// Discounted price estimate.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
}

/// Ordered record of a convergence sweep.
///
/// Points are strictly increasing in `n_paths` and the record is never
/// mutated after the sweep completes. Intended for diagnostics and
/// plotting by the caller.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceRecord {
    points: Vec<ConvergencePoint>,
}

impl ConvergenceRecord {
    /// Wraps a completed sweep.
    ///
    /// Callers obtain records from
    /// [`MonteCarloPricer::convergence_sweep`](super::MonteCarloPricer::convergence_sweep),
    /// which guarantees the ordering invariant.
    pub(crate) fn new(points: Vec<ConvergencePoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].n_paths < w[1].n_paths));
        Self { points }
    }

    /// Returns the recorded points in sweep order.
    #[inline]
    pub fn points(&self) -> &[ConvergencePoint] {
        &self.points
    }

    /// Returns the number of recorded points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no points were recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the recorded points.
    pub fn iter(&self) -> std::slice::Iter<'_, ConvergencePoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a ConvergenceRecord {
    type Item = &'a ConvergencePoint;
    type IntoIter = std::slice::Iter<'a, ConvergencePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
