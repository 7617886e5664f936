use clscan_core::Rule;

/// Configuration for a limit search.
///
/// Set once before a search and immutable for its duration. Defaults match
/// the conventional hybrid-scan settings: 500 toys per evaluation, a 95%
/// confidence level, and the CLs rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Toys per engine call.
    pub n_toys: u32,
    /// Absolute accuracy on the driving statistic; reaching it at the
    /// target terminates the scan early.
    pub cls_accuracy: f64,
    /// Absolute accuracy on `r` for bracket convergence.
    pub r_abs_accuracy: f64,
    /// Relative accuracy on `r` for bracket convergence.
    pub r_rel_accuracy: f64,
    /// Statistic driving the search (CLs or CLs+b).
    pub rule: Rule,
    /// Confidence level of the reported limit.
    pub confidence_level: f64,
    /// Tighten the bracket edges around a lucky exit.
    pub compute_interval: bool,
    /// Bisection iteration cap.
    pub max_iters: usize,
    /// Cap on accumulation rounds within one adaptive evaluation.
    pub max_adaptive_rounds: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n_toys: 500,
            cls_accuracy: 0.005,
            r_abs_accuracy: 0.1,
            r_rel_accuracy: 0.05,
            rule: Rule::default(),
            confidence_level: 0.95,
            compute_interval: false,
            max_iters: 100,
            max_adaptive_rounds: 100,
        }
    }
}

impl Config {
    /// The statistic value the search converges toward.
    #[must_use]
    pub fn cls_target(&self) -> f64 {
        1.0 - self.confidence_level
    }

    /// Combined absolute/relative tolerance on `r` near the given point.
    #[must_use]
    pub fn r_tolerance(&self, r: f64) -> f64 {
        self.r_abs_accuracy.max(self.r_rel_accuracy * r)
    }

    /// Validates the configuration before any toys are run.
    ///
    /// # Errors
    ///
    /// Returns a reason string if any field is out of range.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.n_toys == 0 {
            return Err("n_toys must be at least 1");
        }
        if !self.cls_accuracy.is_finite() || self.cls_accuracy <= 0.0 {
            return Err("cls_accuracy must be finite and positive");
        }
        if !self.r_abs_accuracy.is_finite() || self.r_abs_accuracy < 0.0 {
            return Err("r_abs_accuracy must be finite and non-negative");
        }
        if !self.r_rel_accuracy.is_finite() || self.r_rel_accuracy < 0.0 {
            return Err("r_rel_accuracy must be finite and non-negative");
        }
        if self.r_abs_accuracy == 0.0 && self.r_rel_accuracy == 0.0 {
            return Err("at least one of r_abs_accuracy and r_rel_accuracy must be positive");
        }
        if !self.confidence_level.is_finite()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err("confidence_level must lie strictly between 0 and 1");
        }
        Ok(())
    }
}
