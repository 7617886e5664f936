//! Significance estimation from accumulated toys — no search involved.

use thiserror::Error;

use clscan_core::{TestOutcome, significance::p_value_to_significance};

/// Conventional reference signal strength for the alternate hypothesis.
pub const REFERENCE_R: f64 = 1.0;

/// A significance estimate with asymmetric error bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Significance {
    pub significance: f64,
    /// Shift from varying `CLb` down by one standard error.
    pub sigma_low: f64,
    /// Shift from varying `CLb` up by one standard error.
    pub sigma_high: f64,
    pub clb: f64,
    pub clb_error: f64,
}

/// Errors that can occur while estimating a significance.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no stored outcomes to merge")]
    NoOutcomes,

    #[error("significance is not finite: {value}")]
    NonFinite { value: f64 },
}

/// Merges previously persisted outcomes in the order given.
///
/// # Errors
///
/// Returns `Error::NoOutcomes` when the slice is empty.
pub fn merge_outcomes(outcomes: &[TestOutcome]) -> Result<TestOutcome, Error> {
    let (first, rest) = outcomes.split_first().ok_or(Error::NoOutcomes)?;
    Ok(rest.iter().fold(*first, |acc, o| acc.merge(o)))
}

/// Converts the background-only tail probability into a significance.
///
/// # Errors
///
/// Returns `Error::NonFinite` when `CLb` sits at 0 or 1 and the quantile
/// transform diverges; such a run has failed rather than measured an
/// infinite significance.
pub fn from_outcome(outcome: &TestOutcome) -> Result<Significance, Error> {
    let significance = p_value_to_significance(outcome.clb);
    if !significance.is_finite() {
        return Err(Error::NonFinite {
            value: significance,
        });
    }

    let sigma_high = p_value_to_significance(outcome.clb + outcome.clb_error) - significance;
    let sigma_low = p_value_to_significance(outcome.clb - outcome.clb_error) - significance;

    Ok(Significance {
        significance,
        sigma_low,
        sigma_high,
        clb: outcome.clb,
        clb_error: outcome.clb_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn outcome_with_clb(clb: f64, clb_error: f64) -> TestOutcome {
        TestOutcome {
            n_toys: 1000,
            cls_plus_b: 0.1,
            cls_plus_b_error: 0.01,
            clb,
            clb_error,
            cls: 0.1 / clb.max(f64::MIN_POSITIVE),
            cls_error: 0.0,
        }
    }

    #[test]
    fn median_clb_gives_zero_significance() {
        let sig = from_outcome(&outcome_with_clb(0.5, 0.0)).expect("finite");

        assert_relative_eq!(sig.significance, 0.0, epsilon = 1e-12);
        assert_relative_eq!(sig.sigma_low, 0.0, epsilon = 1e-12);
        assert_relative_eq!(sig.sigma_high, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn error_bars_are_asymmetric_off_median() {
        let sig = from_outcome(&outcome_with_clb(0.1, 0.02)).expect("finite");

        assert!(sig.significance > 0.0);
        assert!(sig.sigma_low > 0.0);
        assert!(sig.sigma_high < 0.0);
        assert_relative_eq!(sig.clb, 0.1);
    }

    #[test]
    fn degenerate_clb_is_a_failure() {
        assert!(matches!(
            from_outcome(&outcome_with_clb(0.0, 0.0)),
            Err(Error::NonFinite { .. })
        ));
        assert!(matches!(
            from_outcome(&outcome_with_clb(1.0, 0.0)),
            Err(Error::NonFinite { .. })
        ));
    }

    #[test]
    fn merge_outcomes_requires_input() {
        assert!(matches!(merge_outcomes(&[]), Err(Error::NoOutcomes)));
    }

    #[test]
    fn merge_outcomes_accumulates_in_order() {
        let a = TestOutcome::from_tail_fractions(200, 0.1, 0.4);
        let b = TestOutcome::from_tail_fractions(600, 0.2, 0.6);

        let merged = merge_outcomes(&[a, b]).expect("non-empty");

        assert_eq!(merged.n_toys, 800);
        assert_relative_eq!(merged.clb, 0.55, epsilon = 1e-12);
    }
}
