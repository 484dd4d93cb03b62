/// Stepper flow management
///
/// `StepperController` is the single authority for which step is shown and
/// how the wizard got there. It owns the `StepperState`, applies gesture
/// decisions, talks to the animator, and fires the terminal callbacks.

use std::collections::VecDeque;

use super::animator::{ImmediateAnimator, Settlement, Transition, TransitionAnimator};
use super::gesture::{GestureDecision, GestureInterpreter, PointerId};
use super::state::{Direction, Phase, StepperSnapshot, StepperState};
use super::steps::{Step, StepModel};
use crate::config::{BusyPolicy, StepperConfig};
use crate::error::{ConfigError, StepperError};
use crate::messaging::{Event, EventBus, StepperCommand};

type Callback = Box<dyn FnMut()>;

/// Navigation result
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationResult {
    /// A transition to a new step started
    Moved(Transition),

    /// Target is the current step; nothing to do
    Unchanged,

    /// Navigation blocked at a boundary
    Blocked { reason: String },

    /// `on_complete` fired
    Completed,

    /// `on_skip` fired
    Skipped,

    /// Navigation arrived mid-transition and was ignored
    Dropped,

    /// Navigation arrived mid-transition and will replay after settling
    Queued,

    /// A drag is in progress
    Dragging { progress: f32 },

    /// A drag was released below the threshold and snapped back
    Cancelled,

    /// The in-flight transition settled on this step
    Settled(usize),

    /// Input does not apply in the current phase
    Ignored,
}

/// Wizard controller
pub struct StepperController<A: TransitionAnimator = ImmediateAnimator> {
    steps: StepModel,
    state: StepperState,
    gesture: GestureInterpreter,
    config: StepperConfig,
    animator: A,
    on_complete: Option<Callback>,
    on_skip: Option<Callback>,
    event_bus: Option<EventBus>,
    queued: VecDeque<StepperCommand>,
}

impl StepperController<ImmediateAnimator> {
    /// Controller with default config that settles transitions immediately
    pub fn new(steps: StepModel) -> Self {
        let config = StepperConfig::default();
        Self {
            steps,
            state: StepperState::new(),
            gesture: GestureInterpreter::new(config.swipe_distance, config.commit_threshold),
            config,
            animator: ImmediateAnimator,
            on_complete: None,
            on_skip: None,
            event_bus: None,
            queued: VecDeque::new(),
        }
    }
}

impl<A: TransitionAnimator> StepperController<A> {
    /// Replace the configuration
    pub fn with_config(mut self, config: StepperConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.gesture = GestureInterpreter::new(config.swipe_distance, config.commit_threshold);
        self.config = config;
        Ok(self)
    }

    /// Swap the animator
    pub fn with_animator<B: TransitionAnimator>(self, animator: B) -> StepperController<B> {
        StepperController {
            steps: self.steps,
            state: self.state,
            gesture: self.gesture,
            config: self.config,
            animator,
            on_complete: self.on_complete,
            on_skip: self.on_skip,
            event_bus: self.event_bus,
            queued: self.queued,
        }
    }

    /// Publish events on `bus`
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Called each time "next" is issued on the last step
    pub fn on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Called each time the wizard is skipped
    pub fn on_skip(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_skip = Some(Box::new(callback));
        self
    }

    pub fn steps(&self) -> &StepModel {
        &self.steps
    }

    pub fn state(&self) -> &StepperState {
        &self.state
    }

    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn current_step(&self) -> &Step {
        self.steps.step(self.state.current_index())
    }

    pub fn snapshot(&self) -> StepperSnapshot {
        self.state.snapshot(self.steps.len())
    }

    pub fn can_go_back(&self) -> bool {
        self.state.current_index() > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.current_index() < self.steps.last_index()
    }

    /// Commands held under `BusyPolicy::Queue`
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Advance, or fire `on_complete` on the last step
    pub fn go_next(&mut self) -> NavigationResult {
        if self.state.is_transitioning() {
            return self.handle_busy(StepperCommand::Next);
        }

        let current = self.state.current_index();
        if current == self.steps.last_index() {
            self.abandon_drag();
            tracing::info!("Wizard completed on step {}", current);
            self.emit(Event::Completed { index: current });
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
            return NavigationResult::Completed;
        }

        self.transition_to(current + 1, Direction::Forward)
    }

    /// Step back; blocked on the first step
    pub fn go_previous(&mut self) -> NavigationResult {
        if self.state.is_transitioning() {
            return self.handle_busy(StepperCommand::Previous);
        }

        let current = self.state.current_index();
        if current == 0 {
            return NavigationResult::Blocked {
                reason: "Already at first step".to_string(),
            };
        }

        self.transition_to(current - 1, Direction::Backward)
    }

    /// Jump directly to `index`, skipping intermediate steps
    pub fn go_to_step(&mut self, index: usize) -> Result<NavigationResult, StepperError> {
        if !self.steps.contains_index(index) {
            return Err(StepperError::InvalidStepIndex {
                index,
                step_count: self.steps.len(),
            });
        }

        if self.state.is_transitioning() {
            return Ok(self.handle_busy(StepperCommand::GoTo { index }));
        }

        let current = self.state.current_index();
        if index == current {
            return Ok(NavigationResult::Unchanged);
        }

        Ok(self.transition_to(index, Direction::between(current, index)))
    }

    /// Leave the wizard from any step
    pub fn skip(&mut self) -> NavigationResult {
        let current = self.state.current_index();
        self.abandon_drag();
        self.queued.clear();

        tracing::info!("Wizard skipped on step {}", current);
        self.emit(Event::Skipped { index: current });
        if let Some(callback) = self.on_skip.as_mut() {
            callback();
        }
        NavigationResult::Skipped
    }

    /// Pointer down: `Idle -> Dragging`
    pub fn press(&mut self, pointer: PointerId, x: f32) -> NavigationResult {
        if self.state.phase() != Phase::Idle {
            return NavigationResult::Ignored;
        }
        if !self.gesture.start(pointer, x) {
            return NavigationResult::Ignored;
        }

        self.state.begin_drag();
        NavigationResult::Dragging { progress: 0.0 }
    }

    /// Pointer move while dragging
    pub fn drag(&mut self, pointer: PointerId, x: f32) -> NavigationResult {
        if self.state.phase() != Phase::Dragging {
            return NavigationResult::Ignored;
        }

        match self.gesture.update(pointer, x) {
            Some(progress) => {
                self.state.set_gesture_progress(progress);
                tracing::trace!("Drag progress {:.3}", progress);
                NavigationResult::Dragging { progress }
            }
            None => NavigationResult::Ignored,
        }
    }

    /// Pointer up: commit or snap back
    pub fn release(&mut self, pointer: PointerId) -> NavigationResult {
        let progress = self.state.gesture_progress();
        match self.gesture.end(pointer) {
            Some(decision) => self.apply_decision(decision, progress),
            None => NavigationResult::Ignored,
        }
    }

    /// Apply the commit threshold to a final drag progress.
    ///
    /// Positive progress goes back, negative goes forward; anything within
    /// the threshold snaps back without changing the step.
    pub fn on_gesture_commit(&mut self, progress: f32) -> NavigationResult {
        self.gesture.cancel();
        let decision = GestureDecision::from_progress(progress, self.gesture.commit_threshold());
        self.apply_decision(decision, progress)
    }

    /// Return to neutral without changing the step. Idempotent.
    pub fn reset_gesture(&mut self) {
        let had_drag = self.state.phase() == Phase::Dragging
            || self.state.gesture_progress() != 0.0
            || self.gesture.is_active();

        self.gesture.cancel();
        self.state.clear_gesture();

        if had_drag {
            self.animator.snap_back();
        }
    }

    /// Animator finished the in-flight transition
    pub fn on_transition_settled(&mut self) -> NavigationResult {
        if !self.state.is_transitioning() {
            tracing::debug!("Ignoring settle signal with no transition in flight");
            return NavigationResult::Ignored;
        }

        self.settle();
        NavigationResult::Settled(self.state.current_index())
    }

    /// Single entry point for hosts driving the controller with commands
    pub fn dispatch(&mut self, command: StepperCommand) -> Result<NavigationResult, StepperError> {
        tracing::trace!("Dispatching: {}", command.description());

        let result = match command {
            StepperCommand::Next => self.go_next(),
            StepperCommand::Previous => self.go_previous(),
            StepperCommand::GoTo { index } => return self.go_to_step(index),
            StepperCommand::Skip => self.skip(),
            StepperCommand::Press { pointer, x } => self.press(pointer, x),
            StepperCommand::Drag { pointer, x } => self.drag(pointer, x),
            StepperCommand::Release { pointer } => self.release(pointer),
            StepperCommand::Settled => self.on_transition_settled(),
        };
        Ok(result)
    }

    fn apply_decision(&mut self, decision: GestureDecision, progress: f32) -> NavigationResult {
        match decision {
            GestureDecision::Commit(Direction::Backward) => {
                self.state.clear_gesture();
                let result = self.go_previous();
                self.snap_back_unless_moved(&result);
                result
            }
            GestureDecision::Commit(Direction::Forward) => {
                self.state.clear_gesture();
                let result = self.go_next();
                self.snap_back_unless_moved(&result);
                result
            }
            GestureDecision::Commit(Direction::None) | GestureDecision::Cancel => {
                tracing::debug!("Swipe cancelled at progress {:.3}", progress);
                self.emit(Event::GestureCancelled { progress });
                self.reset_gesture();
                NavigationResult::Cancelled
            }
        }
    }

    fn snap_back_unless_moved(&mut self, result: &NavigationResult) {
        if !matches!(result, NavigationResult::Moved(_)) {
            self.animator.snap_back();
        }
    }

    fn abandon_drag(&mut self) {
        if self.gesture.is_active() || self.state.phase() == Phase::Dragging {
            self.gesture.cancel();
            self.state.clear_gesture();
        }
    }

    fn transition_to(&mut self, to: usize, direction: Direction) -> NavigationResult {
        let from = self.state.current_index();
        self.abandon_drag();
        self.state.begin_transition(to, direction);

        tracing::debug!("Step {} -> {} ({:?})", from, to, direction);
        self.emit(Event::StepChanged {
            from,
            to,
            direction,
        });

        let transition = Transition {
            from,
            to,
            direction,
        };
        if self.animator.begin(transition) == Settlement::Immediate {
            self.settle();
        }

        NavigationResult::Moved(transition)
    }

    fn settle(&mut self) {
        self.state.settle();
        let index = self.state.current_index();
        self.emit(Event::TransitionSettled { index });

        // Replay held commands until one starts a new transition or ends the wizard
        while let Some(command) = self.queued.pop_front() {
            if !command.is_navigation() {
                continue;
            }

            tracing::debug!("Replaying queued command: {}", command.description());
            match self.dispatch(command) {
                Ok(NavigationResult::Completed) => {
                    self.queued.clear();
                    break;
                }
                Ok(NavigationResult::Moved(_)) if self.state.is_transitioning() => break,
                Ok(_) => {}
                Err(e) => tracing::debug!("Queued command rejected: {}", e),
            }
        }
    }

    fn handle_busy(&mut self, command: StepperCommand) -> NavigationResult {
        debug_assert!(command.is_navigation());

        match self.config.busy_policy {
            BusyPolicy::Queue if self.queued.len() < self.config.queue_capacity => {
                tracing::debug!("Queued during transition: {}", command.description());
                self.queued.push_back(command);
                self.emit(Event::CommandQueued { command });
                NavigationResult::Queued
            }
            _ => {
                tracing::debug!("Dropped during transition: {}", command.description());
                self.emit(Event::CommandDropped { command });
                NavigationResult::Dropped
            }
        }
    }

    fn emit(&self, event: Event) {
        if let Some(bus) = &self.event_bus {
            bus.publish(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::animator::DeferredAnimator;
    use std::cell::Cell;
    use std::rc::Rc;

    const FINGER: PointerId = PointerId::PRIMARY;

    fn five_steps() -> StepModel {
        StepModel::new((1..=5).map(|n| Step::new(format!("Step {n}"), "..."))).unwrap()
    }

    fn counter() -> (Rc<Cell<usize>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_new_controller() {
        let flow = StepperController::new(five_steps());
        assert_eq!(flow.current_index(), 0);
        assert_eq!(flow.state().phase(), Phase::Idle);
        assert!(!flow.can_go_back());
        assert!(flow.can_go_forward());
        assert_eq!(flow.current_step().title(), "Step 1");
    }

    #[test]
    fn test_next_navigation() {
        let mut flow = StepperController::new(five_steps());

        let result = flow.go_next();
        assert_eq!(
            result,
            NavigationResult::Moved(Transition {
                from: 0,
                to: 1,
                direction: Direction::Forward
            })
        );
        assert_eq!(flow.current_index(), 1);
        // ImmediateAnimator settled it already
        assert!(!flow.state().is_transitioning());
        assert_eq!(flow.state().direction(), Direction::None);
    }

    #[test]
    fn test_back_at_first_step() {
        let mut flow = StepperController::new(five_steps());
        let result = flow.go_previous();
        assert!(matches!(result, NavigationResult::Blocked { .. }));
        assert_eq!(flow.current_index(), 0);
    }

    #[test]
    fn test_completion_fires_once_per_call() {
        let (completed, on_complete) = counter();
        let mut flow = StepperController::new(five_steps()).on_complete(on_complete);

        for _ in 0..4 {
            flow.go_next();
        }
        assert_eq!(flow.current_index(), 4);
        assert_eq!(completed.get(), 0);

        assert_eq!(flow.go_next(), NavigationResult::Completed);
        assert_eq!(flow.current_index(), 4);
        assert_eq!(completed.get(), 1);

        flow.go_next();
        assert_eq!(completed.get(), 2);
        assert_eq!(flow.current_index(), 4);
    }

    #[test]
    fn test_go_to_sets_direction() {
        let mut flow = StepperController::new(five_steps()).with_animator(DeferredAnimator::new());
        flow.go_to_step(2).unwrap();
        assert_eq!(flow.state().direction(), Direction::Forward);
        flow.on_transition_settled();

        let result = flow.go_to_step(0).unwrap();
        assert_eq!(flow.current_index(), 0);
        assert_eq!(flow.state().direction(), Direction::Backward);
        assert!(matches!(result, NavigationResult::Moved(_)));
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut flow = StepperController::new(five_steps());
        let err = flow.go_to_step(5).unwrap_err();
        assert_eq!(
            err,
            StepperError::InvalidStepIndex {
                index: 5,
                step_count: 5
            }
        );
        assert_eq!(flow.current_index(), 0);
    }

    #[test]
    fn test_go_to_current_is_unchanged() {
        let mut flow = StepperController::new(five_steps());
        assert_eq!(flow.go_to_step(0), Ok(NavigationResult::Unchanged));
        assert_eq!(flow.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_skip_from_any_step() {
        let (skipped, on_skip) = counter();
        let (completed, on_complete) = counter();
        let mut flow = StepperController::new(five_steps())
            .on_skip(on_skip)
            .on_complete(on_complete);

        flow.go_next();
        assert_eq!(flow.skip(), NavigationResult::Skipped);
        assert_eq!(skipped.get(), 1);
        assert_eq!(completed.get(), 0);
        assert_eq!(flow.current_index(), 1);
    }

    #[test]
    fn test_navigation_dropped_mid_transition() {
        let bus = EventBus::new();
        let (rx, _id) = bus.subscribe();
        let mut flow = StepperController::new(five_steps())
            .with_animator(DeferredAnimator::new())
            .with_event_bus(bus);

        flow.go_next();
        assert!(flow.state().is_transitioning());

        assert_eq!(flow.go_next(), NavigationResult::Dropped);
        assert_eq!(flow.go_previous(), NavigationResult::Dropped);
        assert_eq!(flow.go_to_step(3), Ok(NavigationResult::Dropped));
        assert_eq!(flow.current_index(), 1);

        assert_eq!(flow.on_transition_settled(), NavigationResult::Settled(1));
        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.animator().started().len(), 1);

        let dropped = rx
            .try_iter()
            .filter(|e| matches!(e, Event::CommandDropped { .. }))
            .count();
        assert_eq!(dropped, 3);
    }

    #[test]
    fn test_queue_policy_replays_after_settle() {
        let config = StepperConfig::default().with_busy_policy(BusyPolicy::Queue);
        let mut flow = StepperController::new(five_steps())
            .with_animator(DeferredAnimator::new())
            .with_config(config)
            .unwrap();

        flow.go_next();
        assert_eq!(flow.go_next(), NavigationResult::Queued);
        assert_eq!(flow.go_next(), NavigationResult::Queued);
        assert_eq!(flow.queued_len(), 2);

        flow.on_transition_settled();
        assert_eq!(flow.current_index(), 2);
        assert!(flow.state().is_transitioning());
        assert_eq!(flow.queued_len(), 1);

        flow.on_transition_settled();
        assert_eq!(flow.current_index(), 3);
        flow.on_transition_settled();
        assert!(!flow.state().is_transitioning());
        assert_eq!(flow.queued_len(), 0);
    }

    #[test]
    fn test_queue_capacity_overflow_drops() {
        let mut config = StepperConfig::default().with_busy_policy(BusyPolicy::Queue);
        config.queue_capacity = 1;
        let mut flow = StepperController::new(five_steps())
            .with_animator(DeferredAnimator::new())
            .with_config(config)
            .unwrap();

        flow.go_next();
        assert_eq!(flow.go_next(), NavigationResult::Queued);
        assert_eq!(flow.go_next(), NavigationResult::Dropped);
    }

    #[test]
    fn test_swipe_left_goes_forward() {
        let mut flow = StepperController::new(five_steps()).with_animator(DeferredAnimator::new());

        flow.press(FINGER, 300.0);
        assert_eq!(flow.state().phase(), Phase::Dragging);
        assert_eq!(
            flow.drag(FINGER, 225.0),
            NavigationResult::Dragging { progress: -0.5 }
        );
        assert_eq!(flow.state().gesture_progress(), -0.5);

        let result = flow.release(FINGER);
        assert!(matches!(result, NavigationResult::Moved(_)));
        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.state().phase(), Phase::Transitioning);
        assert_eq!(flow.state().gesture_progress(), 0.0);
    }

    #[test]
    fn test_short_swipe_snaps_back() {
        let mut flow = StepperController::new(five_steps()).with_animator(DeferredAnimator::new());
        flow.go_next();
        flow.on_transition_settled();

        flow.press(FINGER, 100.0);
        flow.drag(FINGER, 100.0 + 0.29 * 150.0);
        assert_eq!(flow.release(FINGER), NavigationResult::Cancelled);

        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.state().phase(), Phase::Idle);
        assert_eq!(flow.state().gesture_progress(), 0.0);
        assert_eq!(flow.animator().snap_backs(), 1);
    }

    #[test]
    fn test_swipe_right_on_first_step_is_blocked() {
        let mut flow = StepperController::new(five_steps()).with_animator(DeferredAnimator::new());
        flow.press(FINGER, 0.0);
        flow.drag(FINGER, 120.0);

        let result = flow.release(FINGER);
        assert!(matches!(result, NavigationResult::Blocked { .. }));
        assert_eq!(flow.state().phase(), Phase::Idle);
        assert_eq!(flow.animator().snap_backs(), 1);
    }

    #[test]
    fn test_swipe_on_last_step_completes() {
        let (completed, on_complete) = counter();
        let mut flow = StepperController::new(five_steps()).on_complete(on_complete);
        flow.go_to_step(4).unwrap();

        flow.press(FINGER, 400.0);
        flow.drag(FINGER, 200.0);
        assert_eq!(flow.release(FINGER), NavigationResult::Completed);
        assert_eq!(completed.get(), 1);
        assert_eq!(flow.current_index(), 4);
    }

    #[test]
    fn test_on_gesture_commit() {
        let mut flow = StepperController::new(five_steps());
        flow.go_to_step(2).unwrap();

        assert!(matches!(
            flow.on_gesture_commit(0.31),
            NavigationResult::Moved(_)
        ));
        assert_eq!(flow.current_index(), 1);

        assert_eq!(flow.on_gesture_commit(0.29), NavigationResult::Cancelled);
        assert_eq!(flow.current_index(), 1);

        flow.on_gesture_commit(-0.8);
        assert_eq!(flow.current_index(), 2);
    }

    #[test]
    fn test_reset_gesture_is_idempotent() {
        let mut flow = StepperController::new(five_steps()).with_animator(DeferredAnimator::new());
        flow.press(FINGER, 0.0);
        flow.drag(FINGER, 60.0);

        flow.reset_gesture();
        let once = flow.snapshot();
        flow.reset_gesture();
        let twice = flow.snapshot();

        assert_eq!(once, twice);
        assert_eq!(twice.phase, Phase::Idle);
        assert_eq!(twice.gesture_progress, 0.0);
        assert_eq!(flow.animator().snap_backs(), 1);
    }

    #[test]
    fn test_press_ignored_while_transitioning() {
        let mut flow = StepperController::new(five_steps()).with_animator(DeferredAnimator::new());
        flow.go_next();

        assert_eq!(flow.press(FINGER, 0.0), NavigationResult::Ignored);
        assert_eq!(flow.drag(FINGER, 100.0), NavigationResult::Ignored);
        assert_eq!(flow.release(FINGER), NavigationResult::Ignored);
        assert_eq!(flow.state().phase(), Phase::Transitioning);
    }

    #[test]
    fn test_second_finger_ignored() {
        let mut flow = StepperController::new(five_steps());
        let second = PointerId(2);

        flow.press(FINGER, 200.0);
        assert_eq!(flow.press(second, 10.0), NavigationResult::Ignored);
        assert_eq!(flow.drag(second, 500.0), NavigationResult::Ignored);
        assert_eq!(flow.release(second), NavigationResult::Ignored);
        assert_eq!(flow.state().phase(), Phase::Dragging);

        flow.drag(FINGER, 100.0);
        flow.release(FINGER);
        assert_eq!(flow.current_index(), 1);
    }

    #[test]
    fn test_spurious_settle_ignored() {
        let mut flow = StepperController::new(five_steps());
        assert_eq!(flow.on_transition_settled(), NavigationResult::Ignored);
    }

    #[test]
    fn test_dispatch_routes_commands() {
        let mut flow = StepperController::new(five_steps());
        flow.dispatch(StepperCommand::Next).unwrap();
        flow.dispatch(StepperCommand::GoTo { index: 3 }).unwrap();
        assert_eq!(flow.current_index(), 3);
        flow.dispatch(StepperCommand::Previous).unwrap();
        assert_eq!(flow.current_index(), 2);
        assert!(flow.dispatch(StepperCommand::GoTo { index: 9 }).is_err());
    }

    #[test]
    fn test_queued_commands_stop_at_completion() {
        let (completed, on_complete) = counter();
        let config = StepperConfig::default().with_busy_policy(BusyPolicy::Queue);
        let mut flow = StepperController::new(five_steps())
            .with_animator(DeferredAnimator::new())
            .with_config(config)
            .unwrap()
            .on_complete(on_complete);

        flow.go_to_step(3).unwrap();
        flow.on_transition_settled();

        flow.go_next();
        assert_eq!(flow.go_next(), NavigationResult::Queued);
        assert_eq!(flow.go_next(), NavigationResult::Queued);
        assert_eq!(flow.go_previous(), NavigationResult::Queued);

        flow.on_transition_settled();
        assert_eq!(completed.get(), 1);
        assert_eq!(flow.current_index(), 4);
        assert_eq!(flow.queued_len(), 0);
        assert!(!flow.state().is_transitioning());
    }

    #[test]
    fn test_non_finite_drag_ignored() {
        let mut flow = StepperController::new(five_steps());
        flow.press(FINGER, 0.0);
        flow.drag(FINGER, 30.0);

        assert_eq!(flow.drag(FINGER, f32::NAN), NavigationResult::Ignored);
        let snapshot = flow.snapshot();
        assert!((-1.0..=1.0).contains(&snapshot.gesture_progress));
        assert_eq!(snapshot.gesture_progress, 0.2);
        assert_eq!(flow.press(PointerId(3), f32::INFINITY), NavigationResult::Ignored);
    }

    #[test]
    fn test_swipe_hint_hidden_after_first_press() {
        let mut flow = StepperController::new(five_steps());
        assert!(flow.snapshot().show_swipe_hint);

        flow.go_next();
        assert!(flow.snapshot().show_swipe_hint);

        flow.press(FINGER, 0.0);
        flow.release(FINGER);
        assert!(!flow.snapshot().show_swipe_hint);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = StepperConfig::default().with_swipe_distance(0.0);
        assert!(StepperController::new(five_steps())
            .with_config(config)
            .is_err());
    }
}
