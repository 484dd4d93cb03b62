/// Interview records shown on the dashboards
///
/// Job seekers and recruiters see the same interview through different
/// lenses; the view-specific data lives in `InterviewView`.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterviewLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl InterviewLevel {
    pub fn badge_tone(self) -> BadgeTone {
        match self {
            InterviewLevel::Beginner => BadgeTone::Success,
            InterviewLevel::Intermediate => BadgeTone::Warning,
            InterviewLevel::Advanced => BadgeTone::Danger,
        }
    }
}

/// Badge palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl BadgeTone {
    /// Utility classes for light theme badges
    pub fn classes(self) -> &'static str {
        match self {
            BadgeTone::Success => "bg-green-100 text-green-800",
            BadgeTone::Warning => "bg-yellow-100 text-yellow-800",
            BadgeTone::Danger => "bg-red-100 text-red-800",
            BadgeTone::Neutral => "bg-gray-100 text-gray-800",
        }
    }

    pub fn gradient(self) -> (u32, u32) {
        match self {
            BadgeTone::Success => (0x22c55e, 0x16a34a),
            BadgeTone::Warning => (0xeab308, 0xca8a04),
            BadgeTone::Danger => (0xef4444, 0xdc2626),
            BadgeTone::Neutral => (0x6b7280, 0x4b5563),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl InterviewStatus {
    pub fn label(self) -> &'static str {
        match self {
            InterviewStatus::NotStarted => "Not Started",
            InterviewStatus::InProgress => "In Progress",
            InterviewStatus::Completed => "Completed",
        }
    }

    pub fn badge_tone(self) -> BadgeTone {
        match self {
            InterviewStatus::NotStarted => BadgeTone::Neutral,
            InterviewStatus::InProgress => BadgeTone::Warning,
            InterviewStatus::Completed => BadgeTone::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Hybrid,
    Remote,
    Inplace,
}

/// One practice session's outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub date: String,
    pub score: u32,
    pub duration: String,
    pub feedback: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// Audience-specific part of an interview record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum InterviewView {
    JobSeeker {
        completed_sessions: u32,
        total_sessions: u32,
        #[serde(default)]
        last_session: Option<String>,
        #[serde(default)]
        average_score: Option<f32>,
        #[serde(default)]
        improvement: Option<String>,
        #[serde(default)]
        objectives: Vec<String>,
        #[serde(default)]
        recent_sessions: Vec<SessionResult>,
        #[serde(default)]
        skill_metrics: BTreeMap<String, u32>,
    },
    Recruiter {
        position: String,
        #[serde(default)]
        required_skills: Vec<String>,
        #[serde(default)]
        responsibilities: Vec<String>,
        #[serde(default)]
        experience_years: Option<String>,
        #[serde(default)]
        place: Option<String>,
        #[serde(default)]
        work_mode: Option<WorkMode>,
        #[serde(default)]
        discussion: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub id: String,
    pub title: String,
    pub recruiter: String,
    pub scenario: String,
    #[serde(alias = "difficulty")]
    pub level: InterviewLevel,
    pub duration: String,
    #[serde(default)]
    pub status: InterviewStatus,
    pub description: String,
    #[serde(flatten)]
    pub view: InterviewView,
}

impl InterviewRecord {
    /// Share of practice sessions done, for job seeker records
    pub fn progress_ratio(&self) -> Option<f32> {
        match &self.view {
            InterviewView::JobSeeker {
                completed_sessions,
                total_sessions,
                ..
            } if *total_sessions > 0 => {
                Some((*completed_sessions).min(*total_sessions) as f32 / *total_sessions as f32)
            }
            _ => None,
        }
    }

    pub fn is_recruiter_view(&self) -> bool {
        matches!(self.view, InterviewView::Recruiter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_seeker_record() -> InterviewRecord {
        InterviewRecord {
            id: "int-1".to_string(),
            title: "Frontend Engineer".to_string(),
            recruiter: "Acme".to_string(),
            scenario: "System design".to_string(),
            level: InterviewLevel::Intermediate,
            duration: "45 min".to_string(),
            status: InterviewStatus::InProgress,
            description: "Practice round".to_string(),
            view: InterviewView::JobSeeker {
                completed_sessions: 2,
                total_sessions: 5,
                last_session: None,
                average_score: Some(78.0),
                improvement: None,
                objectives: vec![],
                recent_sessions: vec![],
                skill_metrics: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn test_level_badge_tones() {
        assert_eq!(InterviewLevel::Beginner.badge_tone(), BadgeTone::Success);
        assert_eq!(InterviewLevel::Intermediate.badge_tone(), BadgeTone::Warning);
        assert_eq!(InterviewLevel::Advanced.badge_tone(), BadgeTone::Danger);
        assert_eq!(BadgeTone::Danger.classes(), "bg-red-100 text-red-800");
    }

    #[test]
    fn test_progress_ratio() {
        let record = job_seeker_record();
        assert_eq!(record.progress_ratio(), Some(0.4));
        assert!(!record.is_recruiter_view());
    }

    #[test]
    fn test_serializes_with_view_tag() {
        let json = serde_json::to_value(job_seeker_record()).unwrap();
        assert_eq!(json["view"], "job_seeker");
        assert_eq!(json["level"], "Intermediate");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["completed_sessions"], 2);
    }

    #[test]
    fn test_recruiter_record_from_json() {
        let json = r#"{
            "id": "int-9",
            "title": "Data Analyst",
            "recruiter": "Globex",
            "scenario": "SQL case",
            "difficulty": "Advanced",
            "duration": "30 min",
            "status": "not-started",
            "description": "Screening",
            "view": "recruiter",
            "position": "Analyst",
            "required_skills": ["SQL", "Python"],
            "work_mode": "remote"
        }"#;

        let record: InterviewRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.level, InterviewLevel::Advanced);
        assert!(record.is_recruiter_view());
        assert_eq!(record.progress_ratio(), None);
        match record.view {
            InterviewView::Recruiter {
                position,
                required_skills,
                work_mode,
                ..
            } => {
                assert_eq!(position, "Analyst");
                assert_eq!(required_skills.len(), 2);
                assert_eq!(work_mode, Some(WorkMode::Remote));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }
}
