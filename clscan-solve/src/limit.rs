mod config;
mod error;
mod evaluate;
mod event;
mod expand;
mod refine;
mod solution;
mod state;

pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Limit, Status};

use clscan_core::HypoTestEngine;

use crate::observe::Observer;
use evaluate::EvalContext;
use state::SearchState;

/// Searches for the upper limit on the signal strength `r`.
///
/// Expands `[0, initial_max]` into a valid bracket, then bisects toward
/// the `r` where the driving statistic crosses `1 - confidence_level`,
/// resampling adaptively near the decision boundary. A midpoint that lands
/// within `cls_accuracy` of the target is accepted directly
/// ([`Status::Lucky`]); with `compute_interval` set, the bracket edges are
/// then tightened around it. Observers see each evaluation and iteration.
///
/// # Errors
///
/// Returns an error if the config is invalid, the engine fails, the upper
/// bound grows past its cap without bracketing the target, or the
/// iteration cap is hit.
pub fn solve<E, Obs>(
    engine: &mut E,
    config: &Config,
    initial_max: f64,
    mut observer: Obs,
) -> Result<Limit, Error>
where
    E: HypoTestEngine,
    Obs: Observer<Event>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;
    if !initial_max.is_finite() || initial_max <= 0.0 {
        return Err(Error::InvalidConfig {
            reason: "initial upper bound must be finite and positive",
        });
    }

    let target = config.cls_target();
    let mut ctx = EvalContext::new(engine, config, &mut observer);

    let (r_max, cls_max) = expand::expand_upper(&mut ctx, initial_max, target)?;
    let mut state = SearchState::new(r_max, cls_max);

    let mut iters = 0;
    loop {
        iters += 1;
        if iters > config.max_iters {
            return Err(Error::IterationLimit {
                iters: config.max_iters,
            });
        }

        let r_mid = state.midpoint();
        let sample = ctx.evaluate(r_mid, true, target)?;

        if sample.is_at_target(target, config.cls_accuracy) {
            ctx.notify(Event::ReachedAccuracy { r: r_mid });
            if config.compute_interval {
                refine::refine_interval(&mut ctx, &mut state, r_mid)?;
            }
            return Ok(Limit {
                limit: r_mid,
                half_width: 0.5 * state.width(),
                status: Status::Lucky,
                iters,
            });
        }

        state.shrink(r_mid, sample, target);
        ctx.notify(Event::Bisected {
            iter: iters,
            bracket: state.bounds(),
            sample,
        });

        if state.width() <= config.r_tolerance(r_mid) {
            return Ok(Limit {
                limit: state.midpoint(),
                half_width: 0.5 * state.width(),
                status: Status::Converged,
                iters,
            });
        }
    }
}
