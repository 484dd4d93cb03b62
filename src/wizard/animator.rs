/// Transition animation boundary
///
/// The controller does not own animation timing. It hands a `Transition` to
/// a `TransitionAnimator` and is told when the curve has finished, either
/// synchronously (`Settlement::Immediate`) or later through
/// `StepperController::on_transition_settled`.

use serde::{Deserialize, Serialize};

use super::state::Direction;

/// Curve constants shared with the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSpec {
    /// Horizontal offset of an entering/exiting card
    pub slide_offset: f32,

    /// Scale of an entering/exiting card
    pub offstage_scale: f32,

    /// Y rotation (degrees) of an entering/exiting card
    pub offstage_rotation: f32,

    /// Card translation per unit of drag distance
    pub drag_translation: f32,

    /// Card rotation (degrees) per unit of drag distance
    pub drag_rotation: f32,

    /// Scale lost at full drag progress
    pub drag_shrink: f32,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            slide_offset: 300.0,
            offstage_scale: 0.9,
            offstage_rotation: 10.0,
            drag_translation: 0.5,
            drag_rotation: 0.1,
            drag_shrink: 0.05,
        }
    }
}

/// Visual pose of a step card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Keyframe {
    pub offset_x: f32,
    pub opacity: f32,
    pub scale: f32,
    pub rotate_y: f32,
}

impl Keyframe {
    /// Resting pose
    pub const CENTER: Keyframe = Keyframe {
        offset_x: 0.0,
        opacity: 1.0,
        scale: 1.0,
        rotate_y: 0.0,
    };

    /// Linear interpolation, `t` clamped to [0, 1]
    pub fn lerp(&self, other: &Keyframe, t: f32) -> Keyframe {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Keyframe {
            offset_x: mix(self.offset_x, other.offset_x),
            opacity: mix(self.opacity, other.opacity),
            scale: mix(self.scale, other.scale),
            rotate_y: mix(self.rotate_y, other.rotate_y),
        }
    }
}

impl TransitionSpec {
    /// Pose an incoming card starts from
    pub fn enter(&self, direction: Direction) -> Keyframe {
        let side = entering_side(direction);
        Keyframe {
            offset_x: side * self.slide_offset,
            opacity: 0.0,
            scale: self.offstage_scale,
            rotate_y: side * self.offstage_rotation,
        }
    }

    /// Pose an outgoing card ends at
    pub fn exit(&self, direction: Direction) -> Keyframe {
        let side = -entering_side(direction);
        Keyframe {
            offset_x: side * self.slide_offset,
            opacity: 0.0,
            scale: self.offstage_scale,
            rotate_y: side * self.offstage_rotation,
        }
    }

    /// Live pose of the current card while dragging
    pub fn drag_feedback(&self, delta: f32, progress: f32) -> Keyframe {
        Keyframe {
            offset_x: delta * self.drag_translation,
            opacity: 1.0,
            scale: 1.0 - progress.abs().min(1.0) * self.drag_shrink,
            rotate_y: delta * self.drag_rotation,
        }
    }
}

// Forward enters from the right, Backward from the left.
fn entering_side(direction: Direction) -> f32 {
    match direction {
        Direction::Forward => 1.0,
        Direction::Backward | Direction::None => -1.0,
    }
}

/// A hand-off between two steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// How the animator reports completion of `begin`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Curve already finished; the controller settles right away
    Immediate,

    /// Host calls `on_transition_settled` when the curve completes
    Pending,
}

/// Rendering side of the stepper
pub trait TransitionAnimator {
    /// Start animating `transition`
    fn begin(&mut self, transition: Transition) -> Settlement;

    /// Return the dragged card to the resting pose
    fn snap_back(&mut self) {}
}

/// Settles every transition synchronously. Used by headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct ImmediateAnimator;

impl TransitionAnimator for ImmediateAnimator {
    fn begin(&mut self, _transition: Transition) -> Settlement {
        Settlement::Immediate
    }
}

/// Leaves every transition pending and records it for the host to play.
#[derive(Debug, Default, Clone)]
pub struct DeferredAnimator {
    started: Vec<Transition>,
    snap_backs: usize,
}

impl DeferredAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions started so far, oldest first
    pub fn started(&self) -> &[Transition] {
        &self.started
    }

    pub fn snap_backs(&self) -> usize {
        self.snap_backs
    }
}

impl TransitionAnimator for DeferredAnimator {
    fn begin(&mut self, transition: Transition) -> Settlement {
        self.started.push(transition);
        Settlement::Pending
    }

    fn snap_back(&mut self) {
        self.snap_backs += 1;
    }
}
