//! Property tests for the limit search over randomized statistic curves.
//!
//! Curves are exponentials `f(r) = exp(-r / scale)` with the crossing at
//! `scale * ln(1 / target)`. The noisy variant adds bounded uniform noise
//! strictly smaller than `cls_accuracy`, which guarantees every non-lucky
//! bisection decision still lands on the correct side of the target.

use std::convert::Infallible;

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

use clscan_core::{HypoTestEngine, TestOutcome};
use clscan_solve::limit::{self, Config, Event, Status};

/// Noise amplitude for the noisy engine; must stay below `cls_accuracy`.
const NOISE_AMP: f64 = 0.004;

struct ExpCurveEngine {
    scale: f64,
    noise_seed: Option<u64>,
    calls: u64,
}

impl ExpCurveEngine {
    fn noiseless(scale: f64) -> Self {
        Self {
            scale,
            noise_seed: None,
            calls: 0,
        }
    }

    fn noisy(scale: f64, seed: u64) -> Self {
        Self {
            scale,
            noise_seed: Some(seed),
            calls: 0,
        }
    }

    fn curve(&self, r: f64) -> f64 {
        (-r / self.scale).exp()
    }
}

impl HypoTestEngine for ExpCurveEngine {
    type Error = Infallible;

    fn run_toys(&mut self, r: f64, n_toys: u32) -> Result<TestOutcome, Infallible> {
        self.calls += 1;
        let (value, error) = match self.noise_seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed ^ r.to_bits() ^ self.calls);
                let noise = rng.gen_range(-NOISE_AMP..NOISE_AMP);
                ((self.curve(r) + noise).clamp(0.0, 1.0), NOISE_AMP)
            }
            None => (self.curve(r), 0.0),
        };
        Ok(TestOutcome {
            n_toys,
            cls_plus_b: value,
            cls_plus_b_error: error,
            clb: 1.0,
            clb_error: 0.0,
            cls: value,
            cls_error: error,
        })
    }
}

proptest! {
    #[test]
    fn bracket_straddles_the_target_every_iteration(scale in 0.3_f64..5.0) {
        let mut engine = ExpCurveEngine::noiseless(scale);
        let config = Config::default();
        let target = config.cls_target();

        let curve = move |r: f64| (-r / scale).exp();
        let mut brackets = Vec::new();
        let observer = |event: &Event| {
            if let Event::Bisected { bracket, .. } = *event {
                brackets.push(bracket);
            }
        };

        limit::solve(&mut engine, &config, 1.0, observer).expect("search");

        for [lo, hi] in brackets {
            prop_assert!(lo <= hi);
            prop_assert!(curve(lo) > target, "lower edge fell below target at r = {lo}");
            prop_assert!(curve(hi) < target, "upper edge rose above target at r = {hi}");
        }
    }

    #[test]
    fn limit_lands_at_the_crossing(scale in 0.3_f64..5.0) {
        let mut engine = ExpCurveEngine::noiseless(scale);
        let config = Config::default();
        let target = config.cls_target();
        let crossing = -scale * target.ln();

        let result = limit::solve(&mut engine, &config, 1.0, ()).expect("search");

        match result.status {
            Status::Lucky => {
                let at_limit = (-result.limit / scale).exp();
                prop_assert!((at_limit - target).abs() <= config.cls_accuracy);
            }
            Status::Converged => {
                // The crossing stays inside the bracket and the limit is its
                // midpoint, so the distance is bounded by the half width.
                prop_assert!((result.limit - crossing).abs() <= result.half_width + 1e-9);
            }
        }
    }

    #[test]
    fn expansion_needs_few_doublings_inside_the_cap(scale in 0.3_f64..5.0) {
        let mut engine = ExpCurveEngine::noiseless(scale);
        let config = Config::default();

        let mut doublings = 0usize;
        let observer = |event: &Event| {
            if matches!(event, Event::BracketDoubled { .. }) {
                doublings += 1;
            }
        };

        limit::solve(&mut engine, &config, 1.0, observer).expect("search");

        // Crossings lie below 20x the initial bound for every scale drawn.
        prop_assert!(doublings <= 5, "took {doublings} doublings");
    }

    #[test]
    fn expansion_fails_cleanly_without_a_crossing(floor in 0.1_f64..0.9) {
        // Statistic plateaus above the target: no valid bracket exists.
        struct PlateauEngine {
            floor: f64,
        }
        impl HypoTestEngine for PlateauEngine {
            type Error = Infallible;

            fn run_toys(&mut self, _r: f64, n_toys: u32) -> Result<TestOutcome, Infallible> {
                Ok(TestOutcome::from_tail_fractions(n_toys, self.floor, 1.0))
            }
        }

        let mut engine = PlateauEngine { floor };
        let config = Config::default();

        let result = limit::solve(&mut engine, &config, 1.0, ());
        let failed_expansion = matches!(result, Err(limit::Error::BracketExpansion { .. }));
        prop_assert!(failed_expansion, "expected expansion failure, got {result:?}");
    }

    #[test]
    fn bounded_noise_cannot_flip_a_decision(scale in 0.3_f64..5.0, seed in 0_u64..1024) {
        let mut engine = ExpCurveEngine::noisy(scale, seed);
        let config = Config::default();
        let target = config.cls_target();
        let crossing = -scale * target.ln();

        let slack = config.cls_accuracy + NOISE_AMP;
        let curve = move |r: f64| (-r / scale).exp();
        let mut brackets = Vec::new();
        let observer = |event: &Event| {
            if let Event::Bisected { bracket, .. } = *event {
                brackets.push(bracket);
            }
        };

        let result = limit::solve(&mut engine, &config, 1.0, observer).expect("search");

        for [lo, hi] in brackets {
            prop_assert!(curve(lo) > target - slack);
            prop_assert!(curve(hi) < target + slack);
        }

        // Lucky exits sit within accuracy-plus-noise of the target in
        // statistic space; converged exits keep the crossing bracketed.
        let tolerance = config.r_tolerance(crossing) + 0.25 * scale;
        prop_assert!(
            (result.limit - crossing).abs() <= tolerance,
            "limit {} vs crossing {}",
            result.limit,
            crossing,
        );
    }
}
