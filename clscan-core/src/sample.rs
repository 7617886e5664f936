/// A single estimate of the driving statistic at one signal strength.
///
/// Immutable once created; evaluators produce a fresh sample after every
/// accumulation round rather than mutating an old one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSample {
    /// Estimated tail probability (`CLs` or `CLs+b` depending on the rule).
    pub value: f64,
    /// Statistical error on the estimate.
    pub error: f64,
}

impl StatSample {
    #[must_use]
    pub fn new(value: f64, error: f64) -> Self {
        Self { value, error }
    }

    /// Returns true if the sample lies within `accuracy` of `target`.
    #[must_use]
    pub fn is_at_target(&self, target: f64, accuracy: f64) -> bool {
        (self.value - target).abs() <= accuracy
    }
}
