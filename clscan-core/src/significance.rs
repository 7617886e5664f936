//! Tail probability to significance conversion.

use statrs::distribution::{ContinuousCDF, Normal};

/// Converts a p-value into a one-sided Gaussian significance.
///
/// `p = 0.5` maps to zero; `p` at or past the ends of the unit interval
/// maps to an infinite significance, which callers must treat as a failed
/// computation rather than a reportable result.
#[must_use]
pub fn p_value_to_significance(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    Normal::standard().inverse_cdf(1.0 - p)
}
