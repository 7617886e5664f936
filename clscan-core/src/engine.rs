use crate::outcome::TestOutcome;

/// A Monte-Carlo hypothesis-testing engine.
///
/// Given a fixed signal strength `r`, an engine generates `n_toys`
/// pseudo-experiments under the background-only and signal-plus-background
/// hypotheses and returns the resulting tail probabilities. Toy generation
/// is expected to dominate the cost of a scan, so implementations may be
/// arbitrarily expensive per call.
pub trait HypoTestEngine {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs one toy ensemble at signal strength `r`.
    ///
    /// Independent calls at the same `r` must produce statistically
    /// independent outcomes so they can be merged via
    /// [`TestOutcome::merge`].
    ///
    /// # Errors
    ///
    /// Returns an error if no usable outcome can be produced.
    fn run_toys(&mut self, r: f64, n_toys: u32) -> Result<TestOutcome, Self::Error>;
}
