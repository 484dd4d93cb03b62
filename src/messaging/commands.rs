/// Command types for the stepper
///
/// Commands represent requests to perform actions (imperative).
/// Hosts feed them to `StepperController::dispatch`.

use serde::Serialize;

use crate::wizard::PointerId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum StepperCommand {
    /// Continue button
    Next,

    /// Back button
    Previous,

    /// Progress dot
    GoTo { index: usize },

    /// Skip button
    Skip,

    /// Pointer/touch down
    Press { pointer: PointerId, x: f32 },

    /// Pointer/touch move
    Drag { pointer: PointerId, x: f32 },

    /// Pointer/touch up
    Release { pointer: PointerId },

    /// Animator finished the current transition
    Settled,
}

impl StepperCommand {
    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            StepperCommand::Next => "Next step".to_string(),
            StepperCommand::Previous => "Previous step".to_string(),
            StepperCommand::GoTo { index } => format!("Go to step {}", index),
            StepperCommand::Skip => "Skip wizard".to_string(),
            StepperCommand::Press { pointer, x } => {
                format!("Press pointer {} at {:.1}", pointer.0, x)
            }
            StepperCommand::Drag { pointer, x } => {
                format!("Drag pointer {} to {:.1}", pointer.0, x)
            }
            StepperCommand::Release { pointer } => format!("Release pointer {}", pointer.0),
            StepperCommand::Settled => "Transition settled".to_string(),
        }
    }

    /// Commands subject to the busy policy while a transition is in flight
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            StepperCommand::Next | StepperCommand::Previous | StepperCommand::GoTo { .. }
        )
    }
}
