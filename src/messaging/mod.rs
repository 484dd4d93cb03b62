/// Messaging module for the stepper host
///
/// Same Event/Command split as the rest of the application:
/// - **Commands**: input the host feeds to the controller (imperative)
/// - **Events**: what the controller or shell did (past tense, broadcast)
///
/// ```text
/// ┌────────┐  StepperCommand  ┌────────────┐   Event   ┌───────────┐
/// │  Host  │ ───────────────> │ Controller │ ────────> │ Event Bus │
/// │ (input)│                  │            │           │           │
/// └────────┘                  └────────────┘           └───────────┘
///                                                            │
///                                                            ▼
///                                                      ┌───────────┐
///                                                      │ AppShell, │
///                                                      │ renderers │
///                                                      └───────────┘
/// ```

pub mod events;
pub mod commands;
pub mod bus;

pub use events::Event;
pub use commands::StepperCommand;
pub use bus::{EventBus, SubscriberId};
