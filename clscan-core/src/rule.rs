use std::str::FromStr;

use thiserror::Error;

use crate::{outcome::TestOutcome, sample::StatSample};

/// The statistic that drives the limit search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    /// The `CLs = CLs+b / CLb` ratio (conventional for upper limits).
    #[default]
    Cls,
    /// The raw `CLs+b` tail probability.
    ClsPlusB,
}

impl Rule {
    /// Extracts the driving statistic from a toy outcome.
    #[must_use]
    pub fn sample(self, outcome: &TestOutcome) -> StatSample {
        match self {
            Rule::Cls => StatSample::new(outcome.cls, outcome.cls_error),
            Rule::ClsPlusB => StatSample::new(outcome.cls_plus_b, outcome.cls_plus_b_error),
        }
    }

    /// Conventional spelling used in progress output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Rule::Cls => "CLs",
            Rule::ClsPlusB => "CLsplusb",
        }
    }
}

/// Error returned when a rule name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("rule should be one of 'CLs' or 'CLsplusb', got '{0}'")]
pub struct ParseRuleError(String);

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLs" => Ok(Rule::Cls),
            "CLsplusb" => Ok(Rule::ClsPlusB),
            other => Err(ParseRuleError(other.to_owned())),
        }
    }
}
