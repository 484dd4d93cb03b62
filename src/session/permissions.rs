/// Device permission state machine
///
/// Microphone and camera access each go through the same lifecycle before a
/// session may start.

use serde::Serialize;

/// Capture device needing user consent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    Microphone,
    Camera,
}

impl Device {
    pub fn label(self) -> &'static str {
        match self {
            Device::Microphone => "Microphone",
            Device::Camera => "Camera",
        }
    }
}

/// State of a permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    /// Not asked yet
    #[default]
    Idle,

    /// Waiting on the user or the platform (transitional state)
    Requesting,

    Granted,

    /// Refused; may be requested again
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }

    /// Check if a request may be issued from this state
    pub fn can_request(&self) -> bool {
        matches!(self, PermissionStatus::Idle | PermissionStatus::Denied)
    }

    /// Get a human-readable description of the state
    pub fn description(&self) -> &'static str {
        match self {
            PermissionStatus::Idle => "Not requested",
            PermissionStatus::Requesting => "Requesting...",
            PermissionStatus::Granted => "Granted",
            PermissionStatus::Denied => "Denied",
        }
    }
}

/// State transition results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionTransitionError {
    /// A request is already pending
    AlreadyRequesting,

    /// Nothing to do once granted
    AlreadyGranted,

    /// Can only resolve a pending request
    NotRequesting,
}

impl std::fmt::Display for PermissionTransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionTransitionError::AlreadyRequesting => {
                write!(f, "Permission request already in progress")
            }
            PermissionTransitionError::AlreadyGranted => write!(f, "Permission already granted"),
            PermissionTransitionError::NotRequesting => {
                write!(f, "No permission request is pending")
            }
        }
    }
}

impl std::error::Error for PermissionTransitionError {}

/// State machine for one device's permission
#[derive(Debug, Clone)]
pub struct DevicePermission {
    device: Device,
    status: PermissionStatus,
}

impl DevicePermission {
    pub fn new(device: Device) -> Self {
        Self {
            device,
            status: PermissionStatus::Idle,
        }
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn status(&self) -> PermissionStatus {
        self.status
    }

    pub fn is_granted(&self) -> bool {
        self.status.is_granted()
    }

    /// Transition to Requesting
    pub fn request(&mut self) -> Result<(), PermissionTransitionError> {
        match self.status {
            PermissionStatus::Idle | PermissionStatus::Denied => {
                self.status = PermissionStatus::Requesting;
                tracing::debug!("Requesting {} permission", self.device.label());
                Ok(())
            }
            PermissionStatus::Requesting => Err(PermissionTransitionError::AlreadyRequesting),
            PermissionStatus::Granted => Err(PermissionTransitionError::AlreadyGranted),
        }
    }

    /// Transition from Requesting to Granted or Denied
    pub fn resolve(&mut self, granted: bool) -> Result<(), PermissionTransitionError> {
        if self.status != PermissionStatus::Requesting {
            return Err(PermissionTransitionError::NotRequesting);
        }

        self.status = if granted {
            PermissionStatus::Granted
        } else {
            tracing::warn!("{} permission denied", self.device.label());
            PermissionStatus::Denied
        };
        Ok(())
    }

    pub fn grant(&mut self) -> Result<(), PermissionTransitionError> {
        self.resolve(true)
    }

    pub fn deny(&mut self) -> Result<(), PermissionTransitionError> {
        self.resolve(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(PermissionStatus::Idle.can_request());
        assert!(PermissionStatus::Denied.can_request());
        assert!(!PermissionStatus::Requesting.can_request());
        assert!(!PermissionStatus::Granted.can_request());
        assert!(PermissionStatus::Granted.is_granted());
    }

    #[test]
    fn test_grant_flow() {
        let mut mic = DevicePermission::new(Device::Microphone);
        assert_eq!(mic.status(), PermissionStatus::Idle);

        assert!(mic.request().is_ok());
        assert_eq!(mic.status(), PermissionStatus::Requesting);

        // Cannot request again while pending
        assert_eq!(
            mic.request(),
            Err(PermissionTransitionError::AlreadyRequesting)
        );

        assert!(mic.grant().is_ok());
        assert!(mic.is_granted());

        assert_eq!(mic.request(), Err(PermissionTransitionError::AlreadyGranted));
    }

    #[test]
    fn test_denied_can_retry() {
        let mut cam = DevicePermission::new(Device::Camera);
        cam.request().unwrap();
        cam.deny().unwrap();
        assert_eq!(cam.status(), PermissionStatus::Denied);

        assert!(cam.request().is_ok());
        assert!(cam.grant().is_ok());
        assert!(cam.is_granted());
    }

    #[test]
    fn test_resolve_without_request() {
        let mut cam = DevicePermission::new(Device::Camera);
        assert_eq!(cam.grant(), Err(PermissionTransitionError::NotRequesting));
        assert_eq!(cam.status(), PermissionStatus::Idle);
    }
}
