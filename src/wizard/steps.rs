/// Step definitions
///
/// Static, ordered content of the wizard pages. Steps carry no logic; the
/// order of the model is the navigation order.

use serde::{Deserialize, Serialize};

use crate::error::StepperError;

/// Accent colour token for a step.
///
/// Closed set: renderers map a token to concrete style values through
/// `rgb()` / `gradient()` instead of assembling class names from strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    Violet,
    #[default]
    Blue,
    Emerald,
    Orange,
    Amber,
}

impl AccentColor {
    pub const ALL: [AccentColor; 5] = [
        AccentColor::Violet,
        AccentColor::Blue,
        AccentColor::Emerald,
        AccentColor::Orange,
        AccentColor::Amber,
    ];

    /// Primary accent as 0xRRGGBB
    pub fn rgb(self) -> u32 {
        match self {
            AccentColor::Violet => 0x8b5cf6,
            AccentColor::Blue => 0x3b82f6,
            AccentColor::Emerald => 0x10b981,
            AccentColor::Orange => 0xf97316,
            AccentColor::Amber => 0xf59e0b,
        }
    }

    /// Background gradient (from, to) as 0xRRGGBB
    pub fn gradient(self) -> (u32, u32) {
        match self {
            AccentColor::Violet => (0xa855f7, 0xec4899),
            AccentColor::Blue => (0x3b82f6, 0x06b6d4),
            AccentColor::Emerald => (0x22c55e, 0x10b981),
            AccentColor::Orange => (0xf97316, 0xef4444),
            AccentColor::Amber => (0xeab308, 0xf59e0b),
        }
    }

    /// `#rrggbb` form of `rgb()`
    pub fn css_hex(self) -> String {
        format!("#{:06x}", self.rgb())
    }
}

/// One page of the wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    index: usize,
    title: String,
    description: String,
    tags: Vec<String>,
    accent: AccentColor,
}

impl Step {
    /// Create step content. The index is assigned by `StepModel`.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            index: 0,
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            accent: AccentColor::default(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent = accent;
        self
    }

    /// Position in the model (0-indexed)
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position in the model (1-indexed), for "2/5" style labels
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn accent(&self) -> AccentColor {
        self.accent
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Ordered, immutable collection of steps
#[derive(Debug, Clone, PartialEq)]
pub struct StepModel {
    steps: Vec<Step>,
}

impl StepModel {
    /// Build a model from steps in navigation order.
    ///
    /// Indices are reassigned from position, so callers never have to keep
    /// them in sync by hand.
    pub fn new<I>(steps: I) -> Result<Self, StepperError>
    where
        I: IntoIterator<Item = Step>,
    {
        let steps = reindex(steps);
        if steps.is_empty() {
            return Err(StepperError::EmptyStepModel);
        }

        Ok(Self { steps })
    }

    /// The five onboarding pages shown to first-time visitors
    pub fn onboarding() -> Self {
        let steps = vec![
            Step::new(
                "AI CV Enhancer",
                "Transform your resume with our intelligent CV analyzer. Get personalized suggestions to stand out to employers.",
            )
            .with_tags(["ATS Optimized", "AI Analysis", "Professional"])
            .with_accent(AccentColor::Violet),
            Step::new(
                "Job Matcher",
                "Discover job opportunities tailored to your skills, experience, and career aspirations.",
            )
            .with_tags(["Tech Jobs", "Remote Work", "Startups"])
            .with_accent(AccentColor::Blue),
            Step::new(
                "AI Interview Training",
                "Practice with our AI interview simulator and get real-time feedback on your answers and communication skills.",
            )
            .with_tags(["Real-time Feedback", "Mock Interviews", "AI Coach"])
            .with_accent(AccentColor::Emerald),
            Step::new(
                "Career Companion",
                "Connect with career experts and fellow job seekers for guidance throughout your journey.",
            )
            .with_tags(["Expert Mentors", "Community", "Networking"])
            .with_accent(AccentColor::Orange),
            Step::new(
                "Ready to Start",
                "Access curated courses and certifications to boost your employability. Let's begin!",
            )
            .with_tags(["Certifications", "Skill Paths", "Career Growth"])
            .with_accent(AccentColor::Amber),
        ];

        Self {
            steps: reindex(steps),
        }
    }

    /// Number of steps (always >= 1)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair convention
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Step at `index`.
    ///
    /// Panics when `index` is out of range; use `get` for unchecked input.
    pub fn step(&self, index: usize) -> &Step {
        &self.steps[index]
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.steps.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

fn reindex<I>(steps: I) -> Vec<Step>
where
    I: IntoIterator<Item = Step>,
{
    steps
        .into_iter()
        .enumerate()
        .map(|(index, mut step)| {
            step.index = index;
            step
        })
        .collect()
}

impl<'a> IntoIterator for &'a StepModel {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
