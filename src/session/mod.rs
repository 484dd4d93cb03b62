/// Interview session setup module
///
/// Preferences, device permissions and the interview records a session is
/// launched from.

pub mod interview;
pub mod permissions;
pub mod preferences;
pub mod setup;

pub use interview::{BadgeTone, InterviewLevel, InterviewRecord, InterviewStatus, InterviewView};
pub use permissions::{Device, DevicePermission, PermissionStatus, PermissionTransitionError};
pub use preferences::{AiPersonality, Difficulty, InterviewType, SessionPreferences};
pub use setup::{SessionLaunch, SessionSetup};
