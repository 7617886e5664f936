use std::str::FromStr;

use thiserror::Error;

/// Test-statistic family used by the hypothesis-test engine.
///
/// Selected once at configuration time; each variant fixes a small set of
/// engine-invocation parameters via [`params`](Self::params).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestStatistic {
    /// LEP-style simple likelihood ratio.
    #[default]
    Lep,
    /// Tevatron-style ratio of profiled likelihoods.
    Tev,
    /// ATLAS-style profile likelihood with floating signal strength.
    Atlas,
}

/// Engine-invocation parameters implied by a test-statistic choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestStatParams {
    /// Numeric statistic code understood by toy engines.
    pub statistic_code: u8,
    /// Whether `r` floats during the alternate-hypothesis evaluation.
    pub float_poi: bool,
}

impl TestStatistic {
    #[must_use]
    pub fn params(self) -> TestStatParams {
        match self {
            TestStatistic::Lep => TestStatParams {
                statistic_code: 1,
                float_poi: false,
            },
            TestStatistic::Tev => TestStatParams {
                statistic_code: 3,
                float_poi: false,
            },
            TestStatistic::Atlas => TestStatParams {
                statistic_code: 3,
                float_poi: true,
            },
        }
    }
}

/// Error returned when a test-statistic name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("test statistic should be one of 'LEP', 'TEV' or 'Atlas', got '{0}'")]
pub struct ParseTestStatError(String);

impl FromStr for TestStatistic {
    type Err = ParseTestStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEP" => Ok(TestStatistic::Lep),
            "TEV" => Ok(TestStatistic::Tev),
            "Atlas" => Ok(TestStatistic::Atlas),
            other => Err(ParseTestStatError(other.to_owned())),
        }
    }
}
