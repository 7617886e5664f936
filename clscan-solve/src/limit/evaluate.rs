use clscan_core::{HypoTestEngine, StatSample};

use super::{Config, Error, Event};
use crate::observe::Observer;

/// Engine, configuration, and observer bundled for one search invocation.
///
/// Owns no state of its own; every evaluation goes through the same engine
/// so independent outcomes can be merged.
pub(super) struct EvalContext<'a, E, Obs> {
    engine: &'a mut E,
    config: &'a Config,
    observer: &'a mut Obs,
}

impl<'a, E, Obs> EvalContext<'a, E, Obs>
where
    E: HypoTestEngine,
    Obs: Observer<Event>,
{
    pub(super) fn new(engine: &'a mut E, config: &'a Config, observer: &'a mut Obs) -> Self {
        Self {
            engine,
            config,
            observer,
        }
    }

    pub(super) fn config(&self) -> &Config {
        self.config
    }

    pub(super) fn notify(&mut self, event: Event) {
        self.observer.observe(&event);
    }

    /// Evaluates the driving statistic at `r`.
    ///
    /// With `adaptive` set, keeps requesting independent outcomes and
    /// merging them while the estimate sits within three standard errors of
    /// `target` and its error still exceeds `cls_accuracy`: coarse sampling
    /// everywhere, extra precision only near the decision boundary. The
    /// loop is capped at `max_adaptive_rounds`; hitting the cap keeps the
    /// accumulated sample.
    ///
    /// # Errors
    ///
    /// Returns `Error::Engine` if the engine produces no usable outcome.
    pub(super) fn evaluate(
        &mut self,
        r: f64,
        adaptive: bool,
        target: f64,
    ) -> Result<StatSample, Error> {
        let mut outcome = self
            .engine
            .run_toys(r, self.config.n_toys)
            .map_err(|e| Error::Engine(Box::new(e)))?;
        let mut sample = self.config.rule.sample(&outcome);
        self.notify(Event::Evaluated {
            r,
            sample,
            n_toys: outcome.n_toys,
        });

        if adaptive {
            let mut rounds = 0;
            while (sample.value - target).abs() < 3.0 * sample.error
                && sample.error >= self.config.cls_accuracy
                && rounds < self.config.max_adaptive_rounds
            {
                let more = self
                    .engine
                    .run_toys(r, self.config.n_toys)
                    .map_err(|e| Error::Engine(Box::new(e)))?;
                outcome = outcome.merge(&more);
                sample = self.config.rule.sample(&outcome);
                self.notify(Event::Evaluated {
                    r,
                    sample,
                    n_toys: outcome.n_toys,
                });
                rounds += 1;
            }
        }

        Ok(sample)
    }
}
