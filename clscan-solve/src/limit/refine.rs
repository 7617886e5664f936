use clscan_core::HypoTestEngine;

use super::{Error, Event, evaluate::EvalContext, state::SearchState};
use crate::observe::Observer;

/// Tightens the bracket edges around a directly accepted limit.
///
/// The lower and upper edges are refined independently with their own
/// samples. Each side walks its probe geometrically toward `limit`,
/// re-evaluating adaptively, until the probe is within half a tolerance
/// unit of the limit or the edge statistic reaches the target accuracy.
pub(super) fn refine_interval<E, Obs>(
    ctx: &mut EvalContext<'_, E, Obs>,
    state: &mut SearchState,
    limit: f64,
) -> Result<(), Error>
where
    E: HypoTestEngine,
    Obs: Observer<Event>,
{
    let target = ctx.config().cls_target();
    let accuracy = ctx.config().cls_accuracy;
    let half_tol = 0.5 * ctx.config().r_tolerance(limit);

    let bound_low = limit - half_tol;
    let mut probe = state.r_min();
    while probe < bound_low && !state.cls_min().is_at_target(target, accuracy) {
        probe = 0.5 * (probe + limit);
        let sample = ctx.evaluate(probe, true, target)?;
        state.set_lower(probe, sample);
    }

    let bound_high = limit + half_tol;
    let mut probe = state.r_max();
    while probe > bound_high && !state.cls_max().is_at_target(target, accuracy) {
        probe = 0.5 * (probe + limit);
        let sample = ctx.evaluate(probe, true, target)?;
        state.set_upper(probe, sample);
    }

    Ok(())
}
