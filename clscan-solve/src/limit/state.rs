use clscan_core::StatSample;

/// Current search bracket and the freshest statistic samples at its ends.
///
/// Maintains `r_min <= r_max` throughout; the samples are the most recent
/// evaluations at or near each endpoint, not necessarily re-evaluated every
/// iteration.
#[derive(Debug, Clone, Copy)]
pub(super) struct SearchState {
    r_min: f64,
    r_max: f64,
    cls_min: StatSample,
    cls_max: StatSample,
}

impl SearchState {
    /// Starts a search on `[0, r_max]` with the expansion sample at the top.
    ///
    /// The lower endpoint carries the exact `r = 0` value of the statistic
    /// (unity) without spending toys on it.
    pub(super) fn new(r_max: f64, cls_max: StatSample) -> Self {
        Self {
            r_min: 0.0,
            r_max,
            cls_min: StatSample::new(1.0, 0.0),
            cls_max,
        }
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.r_min + self.r_max)
    }

    pub(super) fn width(&self) -> f64 {
        self.r_max - self.r_min
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.r_min, self.r_max]
    }

    pub(super) fn r_min(&self) -> f64 {
        self.r_min
    }

    pub(super) fn r_max(&self) -> f64 {
        self.r_max
    }

    pub(super) fn cls_min(&self) -> StatSample {
        self.cls_min
    }

    pub(super) fn cls_max(&self) -> StatSample {
        self.cls_max
    }

    /// Shrinks the bracket with a midpoint sample.
    ///
    /// The midpoint replaces whichever endpoint's sample falls on the same
    /// side of `target`, preserving the straddle invariant.
    pub(super) fn shrink(&mut self, r_mid: f64, sample: StatSample, target: f64) {
        if (sample.value > target) == (self.cls_max.value > target) {
            self.r_max = r_mid;
            self.cls_max = sample;
        } else {
            self.r_min = r_mid;
            self.cls_min = sample;
        }
    }

    /// Advances the lower edge during interval refinement.
    pub(super) fn set_lower(&mut self, r: f64, sample: StatSample) {
        self.r_min = r;
        self.cls_min = sample;
    }

    /// Advances the upper edge during interval refinement.
    pub(super) fn set_upper(&mut self, r: f64, sample: StatSample) {
        self.r_max = r;
        self.cls_max = sample;
    }
}
