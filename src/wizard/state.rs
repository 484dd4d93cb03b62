/// Stepper state management
///
/// Run-time state of a mounted wizard. Only `StepperController` mutates it;
/// everyone else reads a `StepperSnapshot`.

use serde::Serialize;

/// Logical navigation sense, used to pick the transition animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    None,
}

impl Direction {
    /// Direction implied by moving from `from` to `to`
    pub fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::None,
        }
    }
}

/// Interaction phase of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Transitioning,
}

impl Phase {
    pub fn description(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Dragging => "Dragging",
            Phase::Transitioning => "Transitioning",
        }
    }
}

/// Mutable stepper state
#[derive(Debug, Clone, PartialEq)]
pub struct StepperState {
    current_index: usize,
    direction: Direction,
    is_transitioning: bool,
    gesture_progress: f32,
    phase: Phase,
    show_swipe_hint: bool,
}

impl StepperState {
    /// Fresh state at the first step
    pub fn new() -> Self {
        Self {
            current_index: 0,
            direction: Direction::None,
            is_transitioning: false,
            gesture_progress: 0.0,
            phase: Phase::Idle,
            show_swipe_hint: true,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn gesture_progress(&self) -> f32 {
        self.gesture_progress
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Swipe arrows are shown until the first touch
    pub fn show_swipe_hint(&self) -> bool {
        self.show_swipe_hint
    }

    /// Move to `index` and enter the transitioning phase
    pub(crate) fn begin_transition(&mut self, index: usize, direction: Direction) {
        self.current_index = index;
        self.direction = direction;
        self.is_transitioning = true;
        self.gesture_progress = 0.0;
        self.phase = Phase::Transitioning;
    }

    /// Animation finished: accept navigation again
    pub(crate) fn settle(&mut self) {
        self.direction = Direction::None;
        self.is_transitioning = false;
        self.phase = Phase::Idle;
    }

    pub(crate) fn begin_drag(&mut self) {
        self.show_swipe_hint = false;
        self.gesture_progress = 0.0;
        self.phase = Phase::Dragging;
    }

    pub(crate) fn set_gesture_progress(&mut self, progress: f32) {
        self.gesture_progress = progress.clamp(-1.0, 1.0);
    }

    /// Drop any drag state. Leaves an in-flight transition alone.
    pub(crate) fn clear_gesture(&mut self) {
        self.gesture_progress = 0.0;
        if self.phase == Phase::Dragging {
            self.phase = Phase::Idle;
        }
    }

    /// Read-only copy for renderers
    pub fn snapshot(&self, step_count: usize) -> StepperSnapshot {
        StepperSnapshot {
            current_index: self.current_index,
            step_count,
            direction: self.direction,
            is_transitioning: self.is_transitioning,
            gesture_progress: self.gesture_progress,
            phase: self.phase,
            show_swipe_hint: self.show_swipe_hint,
        }
    }
}

impl Default for StepperState {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of the stepper for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepperSnapshot {
    pub current_index: usize,
    pub step_count: usize,
    pub direction: Direction,
    pub is_transitioning: bool,
    pub gesture_progress: f32,
    pub phase: Phase,
    pub show_swipe_hint: bool,
}

impl StepperSnapshot {
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.step_count
    }

    /// Fill ratio of the progress bar (0.0-1.0)
    pub fn completion_ratio(&self) -> f32 {
        if self.step_count == 0 {
            return 0.0;
        }
        (self.current_index + 1) as f32 / self.step_count as f32
    }
}
