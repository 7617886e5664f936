use clscan_core::StatSample;

/// Progress event emitted during a limit search.
///
/// Presentational only: events carry enough to reproduce the conventional
/// scan progress lines but never influence the search.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// One engine call finished; `n_toys` counts all toys accumulated at
    /// this `r` so far within the current evaluation.
    Evaluated {
        r: f64,
        sample: StatSample,
        n_toys: u32,
    },
    /// The upper bound was doubled while expanding the bracket.
    BracketDoubled { r_max: f64 },
    /// A valid search bracket was established.
    BracketFound { r_max: f64 },
    /// One bisection iteration finished; `bracket` is the shrunk bracket.
    Bisected {
        iter: usize,
        bracket: [f64; 2],
        sample: StatSample,
    },
    /// The midpoint statistic landed within accuracy of the target.
    ReachedAccuracy { r: f64 },
}
