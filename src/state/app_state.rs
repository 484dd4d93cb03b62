/// Application shell state
///
/// Decides which top-level view is shown at startup and moves to the main
/// view once onboarding has been completed or skipped.
use serde::Serialize;

use crate::error::StoreError;
use crate::messaging::{Event, EventBus};
use crate::wizard::OnboardingStore;

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppView {
    Splash,
    Onboarding,
    Main,
}

impl AppView {
    pub fn title(&self) -> &'static str {
        match self {
            AppView::Splash => "Splash",
            AppView::Onboarding => "Onboarding",
            AppView::Main => "Main",
        }
    }
}

/// View routing plus the onboarding flag
#[derive(Debug)]
pub struct AppShell {
    view: AppView,
    store: OnboardingStore,
    event_bus: Option<EventBus>,
}

impl AppShell {
    /// Pick the startup view.
    ///
    /// Authenticated users and users who already finished onboarding go
    /// straight to `Main`. An unreadable store is treated the same way so a
    /// broken file never traps the user in the wizard.
    pub fn start(store: OnboardingStore, authenticated: bool) -> Self {
        let view = if authenticated {
            tracing::info!("User is authenticated, skipping to main");
            AppView::Main
        } else {
            match store.load() {
                Ok(record) if record.completed => {
                    tracing::info!("Onboarding already completed, going to main");
                    AppView::Main
                }
                Ok(_) => {
                    tracing::info!("Showing splash screen for new user");
                    AppView::Splash
                }
                Err(e) => {
                    tracing::warn!("Failed to read onboarding state: {}", e);
                    AppView::Main
                }
            }
        };

        Self {
            view,
            store,
            event_bus: None,
        }
    }

    /// Publish `ViewChanged` on `bus`
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn store(&self) -> &OnboardingStore {
        &self.store
    }

    /// Splash finished: show onboarding. No effect from other views.
    pub fn finish_splash(&mut self) -> AppView {
        if self.view == AppView::Splash {
            self.switch_to(AppView::Onboarding);
        }
        self.view
    }

    /// Persist the flag and go to main.
    ///
    /// The view changes even when the write fails; the error is returned so
    /// the host can report it.
    pub fn complete_onboarding(&mut self) -> Result<(), StoreError> {
        tracing::info!("Onboarding completed");
        self.finish_onboarding()
    }

    pub fn skip_onboarding(&mut self) -> Result<(), StoreError> {
        tracing::info!("Onboarding skipped");
        self.finish_onboarding()
    }

    /// React to stepper events while onboarding is shown
    pub fn handle_event(&mut self, event: &Event) -> Result<(), StoreError> {
        if self.view != AppView::Onboarding {
            return Ok(());
        }

        match event {
            Event::Completed { .. } => self.complete_onboarding(),
            Event::Skipped { .. } => self.skip_onboarding(),
            _ => Ok(()),
        }
    }

    fn finish_onboarding(&mut self) -> Result<(), StoreError> {
        self.switch_to(AppView::Main);
        self.store.mark_completed()
    }

    fn switch_to(&mut self, to: AppView) {
        let from = self.view;
        if from == to {
            return;
        }

        self.view = to;
        tracing::debug!("View {} -> {}", from.title(), to.title());
        if let Some(bus) = &self.event_bus {
            bus.publish(Event::ViewChanged { from, to });
        }
    }
}
