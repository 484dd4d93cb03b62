/// Onboarding state persistence
///
/// Remembers whether the onboarding wizard has been finished (completed or
/// skipped) so the shell can route straight to the main view next launch.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::app_dir;
use crate::error::StoreError;

const STORE_FILE_NAME: &str = "onboarding.json";

/// Persisted onboarding data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    /// Whether onboarding has been finished
    pub completed: bool,

    /// Record version (for future migrations)
    pub version: u32,
}

impl OnboardingRecord {
    /// Current record version
    pub const VERSION: u32 = 1;

    pub fn fresh() -> Self {
        Self {
            completed: false,
            version: Self::VERSION,
        }
    }

    pub fn completed() -> Self {
        Self {
            completed: true,
            version: Self::VERSION,
        }
    }
}

impl Default for OnboardingRecord {
    fn default() -> Self {
        Self::fresh()
    }
}

/// JSON file holding an `OnboardingRecord`
#[derive(Debug, Clone)]
pub struct OnboardingStore {
    path: PathBuf,
}

impl OnboardingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<platform config dir>/CareerBoost/onboarding.json`
    pub fn default_path() -> Option<PathBuf> {
        app_dir().map(|dir| dir.join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record. A missing file means onboarding was never finished.
    pub fn load(&self) -> Result<OnboardingRecord, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No onboarding state found, starting fresh");
                return Ok(OnboardingRecord::fresh());
            }
            Err(e) => {
                return Err(StoreError::ReadFailed {
                    path: self.path.display().to_string(),
                    source: e,
                })
            }
        };

        let record: OnboardingRecord =
            serde_json::from_str(&json).map_err(|e| StoreError::Corrupt {
                path: self.path.display().to_string(),
                source: e,
            })?;

        if record.version != OnboardingRecord::VERSION {
            tracing::warn!(
                "Onboarding state version mismatch: expected {}, found {}",
                OnboardingRecord::VERSION,
                record.version
            );
        }

        tracing::debug!("Loaded onboarding state from: {}", self.path.display());
        Ok(record)
    }

    pub fn save(&self, record: &OnboardingRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(record).map_err(StoreError::EncodeFailed)?;
        fs::write(&self.path, json).map_err(|e| StoreError::WriteFailed {
            path: self.path.display().to_string(),
            source: e,
        })?;

        tracing::debug!("Saved onboarding state to: {}", self.path.display());
        Ok(())
    }

    pub fn is_completed(&self) -> Result<bool, StoreError> {
        Ok(self.load()?.completed)
    }

    /// Mark onboarding as finished and save
    pub fn mark_completed(&self) -> Result<(), StoreError> {
        self.save(&OnboardingRecord::completed())
    }

    /// Show onboarding again on next launch
    pub fn reset(&self) -> Result<(), StoreError> {
        self.save(&OnboardingRecord::fresh())
    }

    /// Delete the state file
    pub fn delete(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Deleted onboarding state file: {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::WriteFailed {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }
}
