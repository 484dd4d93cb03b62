use thiserror::Error;

/// Domain errors using thiserror for structured error handling.
///
/// Navigation outcomes that are part of normal control flow (a cancelled
/// drag, a command dropped mid-transition) are not errors and never show up
/// here. They are reported through `NavigationResult` instead.

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepperError {
    #[error("Invalid step index {index} (wizard has {step_count} steps)")]
    InvalidStepIndex { index: usize, step_count: usize },

    #[error("Step model must contain at least one step")]
    EmptyStepModel,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the platform config directory")]
    NoConfigDirectory,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read onboarding state from {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Onboarding state at {path} is corrupt")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write onboarding state to {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode onboarding state")]
    EncodeFailed(#[source] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("{device} permission is required before starting the session")]
    PermissionMissing { device: &'static str },

    #[error("No interview selected for this session")]
    NoInterview,
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;
