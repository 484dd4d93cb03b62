//! Headless onboarding stepper for the CareerBoost client.
//!
//! The `wizard` module holds the stepper controller and its collaborators;
//! `state` routes between splash, onboarding and the main view; `session`
//! covers the interview setup page that follows onboarding.

pub mod config;
pub mod error;
pub mod messaging;
pub mod session;
pub mod state;
pub mod wizard;

pub use config::{AppConfig, BusyPolicy, StepperConfig};
pub use error::{AppResult, ConfigError, SetupError, StepperError, StoreError};
pub use messaging::{Event, EventBus, StepperCommand};
pub use state::{AppShell, AppView};
pub use wizard::{NavigationResult, StepModel, StepperController};
