//! Moments of a discrete distribution.
//!
//! Every public function validates the distribution first and
//! propagates validation failures unchanged. All functions are pure;
//! repeated calls on the same distribution give identical results.

use crate::distribution::Distribution;
use crate::error::StatResult;

/// Probability-weighted mean of the outcome values: Σ x·p.
pub fn expectation(dist: &Distribution) -> StatResult<f64> {
    dist.validate()?;
    Ok(raw_expectation(dist))
}

/// Variance via E[X²] − E[X]².
///
/// Floating-point cancellation can leave a tiny negative value when
/// the true variance is at or near zero; that is left to the caller,
/// except that [`standard_deviation`] clamps it before the root.
pub fn variance(dist: &Distribution) -> StatResult<f64> {
    dist.validate()?;
    let mean = raw_expectation(dist);
    let var = expectation_of_square(dist) - mean * mean;
    log::debug!("variance: mean={mean} var={var}");
    Ok(var)
}

/// Square root of the variance.
///
/// A negative variance produced by floating-point error is clamped to
/// zero; a valid distribution cannot have negative variance.
pub fn standard_deviation(dist: &Distribution) -> StatResult<f64> {
    dist.validate()?;
    let mean = raw_expectation(dist);
    let var = expectation_of_square(dist) - mean * mean;
    Ok(var.max(0.0).sqrt())
}

fn raw_expectation(dist: &Distribution) -> f64 {
    dist.iter().map(|(x, p)| x * p).sum()
}

// Σ x²·p; only reached after the caller validated.
fn expectation_of_square(dist: &Distribution) -> f64 {
    dist.iter().map(|(x, p)| x * x * p).sum()
}
