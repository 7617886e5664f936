use clscan_core::{HypoTestEngine, StatSample};

use super::{Error, Event, evaluate::EvalContext};
use crate::observe::Observer;

/// Growth cap on the upper bound relative to its starting value.
const MAX_GROWTH: f64 = 20.0;

/// Establishes a valid upper end for the search bracket.
///
/// Doubles the bound until the statistic there is provably below the
/// target with a three-sigma margin (or exactly zero). Returns the bound
/// together with the sample that justified stopping.
///
/// # Errors
///
/// Fails once the bound has grown past `MAX_GROWTH` times its starting
/// value without satisfying the stop condition, reporting the last
/// evaluated point.
pub(super) fn expand_upper<E, Obs>(
    ctx: &mut EvalContext<'_, E, Obs>,
    initial_max: f64,
    target: f64,
) -> Result<(f64, StatSample), Error>
where
    E: HypoTestEngine,
    Obs: Observer<Event>,
{
    let mut r_max = initial_max;
    loop {
        let sample = ctx.evaluate(r_max, false, target)?;
        if sample.value == 0.0 || sample.value + 3.0 * sample.error.abs() < target {
            ctx.notify(Event::BracketFound { r_max });
            return Ok((r_max, sample));
        }
        // The capped bound is evaluated first: the failure carries the
        // statistic observed at the offending point.
        if r_max >= MAX_GROWTH * initial_max {
            return Err(Error::BracketExpansion {
                r: r_max,
                statistic: ctx.config().rule.label(),
                value: sample.value,
            });
        }
        r_max *= 2.0;
        ctx.notify(Event::BracketDoubled { r_max });
    }
}
