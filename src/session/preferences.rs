/// Interview session preferences chosen on the setup page
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewType {
    #[default]
    Technical,
    Behavioral,
    CultureFit,
    CaseStudy,
}

impl InterviewType {
    pub const ALL: [InterviewType; 4] = [
        InterviewType::Technical,
        InterviewType::Behavioral,
        InterviewType::CultureFit,
        InterviewType::CaseStudy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InterviewType::Technical => "Technical",
            InterviewType::Behavioral => "Behavioral",
            InterviewType::CultureFit => "Culture Fit",
            InterviewType::CaseStudy => "Case Study",
        }
    }
}

/// Tone the interviewer takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AiPersonality {
    Friendly,
    #[default]
    Professional,
    Direct,
    Empathetic,
}

impl AiPersonality {
    pub const ALL: [AiPersonality; 4] = [
        AiPersonality::Friendly,
        AiPersonality::Professional,
        AiPersonality::Direct,
        AiPersonality::Empathetic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AiPersonality::Friendly => "Friendly",
            AiPersonality::Professional => "Professional",
            AiPersonality::Direct => "Direct",
            AiPersonality::Empathetic => "Empathetic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPreferences {
    pub difficulty: Difficulty,
    pub interview_type: InterviewType,
    pub ai_personality: AiPersonality,
}
