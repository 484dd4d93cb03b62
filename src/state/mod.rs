/// State management module
///
/// Top-level view routing for the host application.

pub mod app_state;

// Re-export commonly used types
pub use app_state::{AppShell, AppView};
