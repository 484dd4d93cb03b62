use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::wizard::animator::TransitionSpec;

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "CareerBoost";

const CONFIG_FILE_NAME: &str = "config.json";

/// What the controller does with navigation issued while a transition is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BusyPolicy {
    /// Ignore the command
    #[default]
    Drop,

    /// Hold the command and replay it once the transition settles
    Queue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperConfig {
    /// Minimum |progress| at release for a drag to navigate (exclusive)
    pub commit_threshold: f32,

    /// Drag distance that maps to a progress of 1.0
    pub swipe_distance: f32,

    /// Navigation handling while a transition is in flight
    pub busy_policy: BusyPolicy,

    /// Maximum number of held commands under `BusyPolicy::Queue`
    pub queue_capacity: usize,

    /// Curve constants handed to the renderer
    pub transition: TransitionSpec,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 0.3,
            swipe_distance: 150.0,
            busy_policy: BusyPolicy::Drop,
            queue_capacity: 4,
            transition: TransitionSpec::default(),
        }
    }
}

impl StepperConfig {
    /// Set the commit threshold
    pub fn with_commit_threshold(mut self, threshold: f32) -> Self {
        self.commit_threshold = threshold;
        self
    }

    /// Set the swipe normalization distance
    pub fn with_swipe_distance(mut self, distance: f32) -> Self {
        self.swipe_distance = distance;
        self
    }

    /// Set the busy policy
    pub fn with_busy_policy(mut self, policy: BusyPolicy) -> Self {
        self.busy_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.commit_threshold > 0.0 && self.commit_threshold < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "commit_threshold must be within (0, 1), got {}",
                self.commit_threshold
            )));
        }
        if !(self.swipe_distance > 0.0 && self.swipe_distance.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "swipe_distance must be positive, got {}",
                self.swipe_distance
            )));
        }
        if self.busy_policy == BusyPolicy::Queue && self.queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "queue_capacity must be at least 1 when busy_policy is queue".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration for the onboarding host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub stepper: StepperConfig,

    /// Override for the onboarding store location
    pub onboarding_store_path: Option<PathBuf>,

    /// Override for the log directory
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the platform config directory.
    /// Creates a default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDirectory)?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, writing defaults when missing
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = AppConfig::default();
            config.save_to(path)?;
            tracing::info!("Created default config at: {}", path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;
        config.stepper.validate()?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        fs::write(path, json).map_err(|e| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(())
    }

    /// Platform config file path
    pub fn default_path() -> Option<PathBuf> {
        app_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Onboarding store path, honoring the override
    pub fn onboarding_store_path(&self) -> Option<PathBuf> {
        self.onboarding_store_path
            .clone()
            .or_else(crate::wizard::persistence::OnboardingStore::default_path)
    }

    /// Log directory, honoring the override
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| app_dir().map(|dir| dir.join("logs")))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }
}

/// `<platform config dir>/CareerBoost`
pub fn app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}
