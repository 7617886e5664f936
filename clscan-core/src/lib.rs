mod engine;
mod outcome;
mod rule;
mod sample;
mod test_stat;

pub mod significance;
pub mod store;

pub use engine::HypoTestEngine;
pub use outcome::TestOutcome;
pub use rule::{ParseRuleError, Rule};
pub use sample::StatSample;
pub use test_stat::{ParseTestStatError, TestStatParams, TestStatistic};
