/// Onboarding stepper module
///
/// Headless controller for a multi-step wizard. Rendering is left to the
/// host; this module decides which step is shown and how the user got there.
///
/// ## Architecture
///
/// ```text
/// StepperController
///   ├── StepModel (ordered, non-empty steps)
///   ├── StepperState (index, direction, phase, drag progress)
///   ├── GestureInterpreter (pointer track -> commit / cancel)
///   └── TransitionAnimator (enter/exit poses, settle signal)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use careerboost_stepper::wizard::{StepModel, StepperController};
///
/// let mut stepper = StepperController::new(StepModel::onboarding())
///     .on_complete(|| println!("done"))
///     .on_skip(|| println!("skipped"));
///
/// stepper.go_next();
/// stepper.go_to_step(4)?;
/// stepper.go_next(); // fires on_complete
/// ```

pub mod animator;
pub mod flow;
pub mod gesture;
pub mod persistence;
pub mod state;
pub mod steps;

// Re-export commonly used types
pub use animator::{
    DeferredAnimator, ImmediateAnimator, Keyframe, Settlement, Transition, TransitionAnimator,
    TransitionSpec,
};
pub use flow::{NavigationResult, StepperController};
pub use gesture::{GestureDecision, GestureInterpreter, GestureSample, PointerId};
pub use persistence::{OnboardingRecord, OnboardingStore};
pub use state::{Direction, Phase, StepperSnapshot, StepperState};
pub use steps::{AccentColor, Step, StepModel};
