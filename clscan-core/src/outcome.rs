use serde::{Deserialize, Serialize};

/// The result of one toy ensemble at a fixed signal strength.
///
/// Holds the two measured tail probabilities (`CLs+b`, `CLb`), the derived
/// `CLs = CLs+b / CLb` ratio, their statistical errors, and the ensemble
/// size the estimates are based on. Outcomes are immutable; variance
/// reduction happens by [`merge`](Self::merge)-ing independent outcomes
/// into a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Number of toy pseudo-experiments behind the estimates.
    pub n_toys: u32,
    pub cls_plus_b: f64,
    pub cls_plus_b_error: f64,
    pub clb: f64,
    pub clb_error: f64,
    pub cls: f64,
    pub cls_error: f64,
}

impl TestOutcome {
    /// Builds an outcome from measured tail fractions.
    ///
    /// Errors are binomial (`sqrt(p(1-p)/n)`); the `CLs` error combines the
    /// relative errors of numerator and denominator in quadrature.
    #[must_use]
    pub fn from_tail_fractions(n_toys: u32, cls_plus_b: f64, clb: f64) -> Self {
        let n = f64::from(n_toys.max(1));
        let cls_plus_b_error = binomial_error(cls_plus_b, n);
        let clb_error = binomial_error(clb, n);

        let (cls, cls_error) = if clb > 0.0 {
            let cls = cls_plus_b / clb;
            let error = if cls_plus_b > 0.0 {
                cls * ((cls_plus_b_error / cls_plus_b).powi(2)
                    + (clb_error / clb).powi(2))
                .sqrt()
            } else {
                cls_plus_b_error / clb
            };
            (cls, error)
        } else {
            (0.0, 0.0)
        };

        Self {
            n_toys,
            cls_plus_b,
            cls_plus_b_error,
            clb,
            clb_error,
            cls,
            cls_error,
        }
    }

    /// Merges two independent outcomes at the same signal strength.
    ///
    /// Tail fractions are pooled weighted by toy count and the errors are
    /// recomputed from the pooled ensemble, so merging is commutative and
    /// the error shrinks roughly as `1/sqrt(n)`.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let n_a = f64::from(self.n_toys);
        let n_b = f64::from(other.n_toys);
        let n = n_a + n_b;
        if n == 0.0 {
            return *self;
        }

        let cls_plus_b = (n_a * self.cls_plus_b + n_b * other.cls_plus_b) / n;
        let clb = (n_a * self.clb + n_b * other.clb) / n;

        Self::from_tail_fractions(self.n_toys + other.n_toys, cls_plus_b, clb)
    }
}

fn binomial_error(p: f64, n: f64) -> f64 {
    (p.clamp(0.0, 1.0) * (1.0 - p.clamp(0.0, 1.0)) / n).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn binomial_errors_from_fractions() {
        let outcome = TestOutcome::from_tail_fractions(400, 0.2, 0.5);

        assert_relative_eq!(outcome.cls_plus_b_error, (0.2_f64 * 0.8 / 400.0).sqrt());
        assert_relative_eq!(outcome.clb_error, (0.5_f64 * 0.5 / 400.0).sqrt());
        assert_relative_eq!(outcome.cls, 0.4);
    }

    #[test]
    fn cls_is_zero_when_clb_vanishes() {
        let outcome = TestOutcome::from_tail_fractions(100, 0.0, 0.0);

        assert_relative_eq!(outcome.cls, 0.0);
        assert_relative_eq!(outcome.cls_error, 0.0);
    }

    #[test]
    fn merge_pools_by_toy_count() {
        let a = TestOutcome::from_tail_fractions(100, 0.1, 0.4);
        let b = TestOutcome::from_tail_fractions(300, 0.3, 0.8);

        let merged = a.merge(&b);

        assert_eq!(merged.n_toys, 400);
        assert_relative_eq!(merged.cls_plus_b, 0.25, epsilon = 1e-12);
        assert_relative_eq!(merged.clb, 0.7, epsilon = 1e-12);
    }

    #[test]
    fn merge_is_order_independent() {
        let a = TestOutcome::from_tail_fractions(250, 0.12, 0.55);
        let b = TestOutcome::from_tail_fractions(750, 0.08, 0.47);

        let ab = a.merge(&b);
        let ba = b.merge(&a);

        assert_relative_eq!(ab.cls_plus_b, ba.cls_plus_b, epsilon = 1e-12);
        assert_relative_eq!(ab.clb, ba.clb, epsilon = 1e-12);
        assert_relative_eq!(ab.cls, ba.cls, epsilon = 1e-12);
        assert_eq!(ab.n_toys, ba.n_toys);
    }

    #[test]
    fn merge_shrinks_errors() {
        let a = TestOutcome::from_tail_fractions(500, 0.2, 0.5);
        let b = TestOutcome::from_tail_fractions(500, 0.2, 0.5);

        let merged = a.merge(&b);

        assert!(merged.cls_plus_b_error < a.cls_plus_b_error);
        assert!(merged.clb_error < a.clb_error);
    }
}
