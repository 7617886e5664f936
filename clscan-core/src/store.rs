//! Persistence of toy outcomes between runs.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::outcome::TestOutcome;

/// Conventional label prefix for persisted hybrid outcomes.
pub const LABEL_PREFIX: &str = "HybridResult_";

/// Errors from the JSON-backed result store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed")]
    Io(#[from] std::io::Error),

    #[error("stored outcome is not valid JSON")]
    Json(#[from] serde_json::Error),
}

/// Saves and reloads toy outcomes under opaque labels.
///
/// Labels are identifiers used only for uniqueness and prefix matching;
/// nothing parses their content.
pub trait ResultStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persists one outcome under `label`.
    ///
    /// # Errors
    ///
    /// Returns an error if the outcome cannot be written.
    fn save(&self, outcome: &TestOutcome, label: &str) -> Result<(), Self::Error>;

    /// Loads every stored outcome whose label starts with `prefix`, in the
    /// order encountered.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or an entry fails to
    /// deserialize.
    fn load_all_matching(&self, prefix: &str) -> Result<Vec<TestOutcome>, Self::Error>;
}

/// Directory of JSON files, one outcome per `<label>.json`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ResultStore for JsonStore {
    type Error = StoreError;

    fn save(&self, outcome: &TestOutcome, label: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{label}.json"));
        fs::write(path, serde_json::to_string_pretty(outcome)?)?;
        Ok(())
    }

    fn load_all_matching(&self, prefix: &str) -> Result<Vec<TestOutcome>, StoreError> {
        let mut names: Vec<String> = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(prefix) && name.ends_with(".json") {
                names.push(name);
            }
        }
        // Directory iteration order is platform-dependent; sort so repeated
        // reads encounter entries identically.
        names.sort();

        let mut outcomes = Vec::with_capacity(names.len());
        for name in names {
            let content = fs::read_to_string(self.dir.join(&name))?;
            outcomes.push(serde_json::from_str(&content)?);
        }
        Ok(outcomes)
    }
}
