/// Event types for the stepper host
///
/// Events represent things that have happened (past tense).
/// They are broadcast to all subscribers.

use serde::Serialize;

use super::commands::StepperCommand;
use crate::state::AppView;
use crate::wizard::Direction;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The shown step changed and a transition started
    StepChanged {
        from: usize,
        to: usize,
        direction: Direction,
    },

    /// The animator finished; navigation is accepted again
    TransitionSettled { index: usize },

    /// A drag was released below the commit threshold
    GestureCancelled { progress: f32 },

    /// Navigation arrived mid-transition and was ignored
    CommandDropped { command: StepperCommand },

    /// Navigation arrived mid-transition and will replay after settling
    CommandQueued { command: StepperCommand },

    /// "Next" was issued on the last step
    Completed { index: usize },

    /// The user left the wizard early
    Skipped { index: usize },

    /// The application shell switched views
    ViewChanged { from: AppView, to: AppView },
}

impl Event {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            Event::StepChanged {
                from,
                to,
                direction,
            } => format!("Step {} -> {} ({:?})", from, to, direction),
            Event::TransitionSettled { index } => format!("Settled on step {}", index),
            Event::GestureCancelled { progress } => {
                format!("Swipe cancelled at {:.2}", progress)
            }
            Event::CommandDropped { command } => {
                format!("Dropped during transition: {}", command.description())
            }
            Event::CommandQueued { command } => {
                format!("Queued during transition: {}", command.description())
            }
            Event::Completed { .. } => "Wizard completed".to_string(),
            Event::Skipped { index } => format!("Wizard skipped at step {}", index),
            Event::ViewChanged { from, to } => {
                format!("View {} -> {}", from.title(), to.title())
            }
        }
    }

    /// Whether the event ends the wizard
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Completed { .. } | Event::Skipped { .. })
    }
}
