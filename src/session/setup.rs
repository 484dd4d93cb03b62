/// Interview session setup
///
/// Collects preferences and device permissions for a selected interview and
/// produces the launch payload for the live session.
use serde::Serialize;

use super::interview::InterviewRecord;
use super::permissions::{Device, DevicePermission};
use super::preferences::{AiPersonality, Difficulty, InterviewType, SessionPreferences};
use crate::error::SetupError;

/// Interview brief merged with the chosen preferences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionLaunch {
    #[serde(flatten)]
    pub interview: InterviewRecord,
    #[serde(flatten)]
    pub preferences: SessionPreferences,
}

impl SessionLaunch {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone)]
pub struct SessionSetup {
    interview: Option<InterviewRecord>,
    preferences: SessionPreferences,
    microphone: DevicePermission,
    camera: DevicePermission,
}

impl SessionSetup {
    pub fn new(interview: Option<InterviewRecord>) -> Self {
        Self {
            interview,
            preferences: SessionPreferences::default(),
            microphone: DevicePermission::new(Device::Microphone),
            camera: DevicePermission::new(Device::Camera),
        }
    }

    pub fn interview(&self) -> Option<&InterviewRecord> {
        self.interview.as_ref()
    }

    pub fn preferences(&self) -> SessionPreferences {
        self.preferences
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.preferences.difficulty = difficulty;
    }

    pub fn set_interview_type(&mut self, interview_type: InterviewType) {
        self.preferences.interview_type = interview_type;
    }

    pub fn set_ai_personality(&mut self, personality: AiPersonality) {
        self.preferences.ai_personality = personality;
    }

    pub fn microphone(&self) -> &DevicePermission {
        &self.microphone
    }

    pub fn microphone_mut(&mut self) -> &mut DevicePermission {
        &mut self.microphone
    }

    pub fn camera(&self) -> &DevicePermission {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut DevicePermission {
        &mut self.camera
    }

    pub fn can_start(&self) -> bool {
        self.interview.is_some() && self.microphone.is_granted() && self.camera.is_granted()
    }

    /// Build the launch payload. Both devices must be granted.
    pub fn start(&self) -> Result<SessionLaunch, SetupError> {
        let interview = self.interview.as_ref().ok_or(SetupError::NoInterview)?;

        for permission in [&self.microphone, &self.camera] {
            if !permission.is_granted() {
                return Err(SetupError::PermissionMissing {
                    device: permission.device().label(),
                });
            }
        }

        tracing::info!(
            "Starting {} interview '{}' ({}, {})",
            self.preferences.interview_type.label(),
            interview.title,
            self.preferences.difficulty.label(),
            self.preferences.ai_personality.label()
        );

        Ok(SessionLaunch {
            interview: interview.clone(),
            preferences: self.preferences,
        })
    }
}
