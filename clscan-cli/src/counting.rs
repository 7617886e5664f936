//! Built-in toy engine: a single-bin counting experiment.

use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Poisson};
use thiserror::Error;

use clscan_core::{HypoTestEngine, TestOutcome, TestStatParams};

/// Errors from the counting-experiment engine.
#[derive(Debug, Error)]
pub enum CountingError {
    #[error("toy mean is not a valid Poisson rate: {mean}")]
    InvalidMean { mean: f64 },
}

/// Poisson counting experiment with expected background `b`, expected
/// signal `r * s`, and an observed count.
///
/// For a single bin the LEP ratio is monotone in the count, so the
/// signal-like tail `{q >= q_obs}` is exactly `{n <= n_obs}` and the tail
/// probabilities reduce to Poisson CDF estimates:
/// `CLs+b = P_{r*s+b}(n <= n_obs)`, `CLb = P_b(n <= n_obs)`. Floating-POI
/// statistic variants evaluate the alternate hypothesis at the best-fit
/// strength instead of the tested one, which makes the tails independent
/// of `r`; they are only meaningful for significance estimation here.
pub struct CountingEngine {
    observed: u64,
    background: f64,
    signal: f64,
    params: TestStatParams,
    rng: StdRng,
}

impl CountingEngine {
    pub fn new(
        observed: u64,
        background: f64,
        signal: f64,
        params: TestStatParams,
        seed: u64,
    ) -> Self {
        Self {
            observed,
            background,
            signal,
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn alternate_mean(&self, r: f64) -> f64 {
        if self.params.float_poi {
            let fitted = ((self.observed as f64 - self.background) / self.signal).max(0.0);
            self.background + fitted * self.signal
        } else {
            self.background + r * self.signal
        }
    }
}

impl HypoTestEngine for CountingEngine {
    type Error = CountingError;

    fn run_toys(&mut self, r: f64, n_toys: u32) -> Result<TestOutcome, CountingError> {
        let alt_mean = self.alternate_mean(r);
        let null_mean = self.background;
        let alt = Poisson::new(alt_mean).map_err(|_| CountingError::InvalidMean { mean: alt_mean })?;
        let null =
            Poisson::new(null_mean).map_err(|_| CountingError::InvalidMean { mean: null_mean })?;

        let mut sb_tail = 0u32;
        let mut b_tail = 0u32;
        for _ in 0..n_toys {
            if alt.sample(&mut self.rng) as u64 <= self.observed {
                sb_tail += 1;
            }
            if null.sample(&mut self.rng) as u64 <= self.observed {
                b_tail += 1;
            }
        }

        let n = f64::from(n_toys.max(1));
        Ok(TestOutcome::from_tail_fractions(
            n_toys,
            f64::from(sb_tail) / n,
            f64::from(b_tail) / n,
        ))
    }
}
