use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a limit search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("hypothesis test failed")]
    Engine(#[source] Box<dyn StdError + Send + Sync>),

    #[error("cannot set higher limit: at r = {r} still get {statistic} = {value}")]
    BracketExpansion {
        r: f64,
        statistic: &'static str,
        value: f64,
    },

    #[error("bisection exceeded {iters} iterations without converging")]
    IterationLimit { iters: usize },
}
