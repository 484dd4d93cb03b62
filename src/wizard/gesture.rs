/// Gesture interpretation
///
/// Turns a press-drag-release track into a normalized progress value and a
/// commit/cancel decision. Only displacement at release matters; there is no
/// velocity or fling detection.

use serde::Serialize;

use super::state::Direction;

/// Identifier of a touch point or pointer as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Mouse, or the first finger on single-touch hosts
    pub const PRIMARY: PointerId = PointerId(0);
}

/// Outcome of a released drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureDecision {
    /// Navigate. Dragging right (positive progress) goes `Backward`.
    Commit(Direction),

    /// Snap back to neutral
    Cancel,
}

impl GestureDecision {
    /// Apply the commit threshold to a progress value (threshold is exclusive)
    pub fn from_progress(progress: f32, threshold: f32) -> Self {
        if progress.abs() > threshold {
            if progress > 0.0 {
                GestureDecision::Commit(Direction::Backward)
            } else {
                GestureDecision::Commit(Direction::Forward)
            }
        } else {
            GestureDecision::Cancel
        }
    }
}

/// One press-drag-release cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GestureSample {
    pub pointer: PointerId,
    pub origin: f32,
    pub current: f32,
    pub progress: f32,
}

impl GestureSample {
    pub fn delta(&self) -> f32 {
        self.current - self.origin
    }
}

/// Converts a pointer track into a decision
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    swipe_distance: f32,
    commit_threshold: f32,
    active: Option<GestureSample>,
}

impl GestureInterpreter {
    pub fn new(swipe_distance: f32, commit_threshold: f32) -> Self {
        Self {
            swipe_distance,
            commit_threshold,
            active: None,
        }
    }

    pub fn commit_threshold(&self) -> f32 {
        self.commit_threshold
    }

    /// Record the origin of a drag.
    ///
    /// Returns false when another pointer is already being tracked (only the
    /// first active touch point counts) or when `x` is not finite.
    pub fn start(&mut self, pointer: PointerId, x: f32) -> bool {
        if self.active.is_some() || !x.is_finite() {
            return false;
        }

        self.active = Some(GestureSample {
            pointer,
            origin: x,
            current: x,
            progress: 0.0,
        });
        true
    }

    /// Feed a new position and get the normalized progress in [-1, 1].
    ///
    /// `None` when `pointer` is not the tracked one or `x` is not finite.
    pub fn update(&mut self, pointer: PointerId, x: f32) -> Option<f32> {
        if !x.is_finite() {
            return None;
        }

        let swipe_distance = self.swipe_distance;
        let sample = self.active.as_mut().filter(|s| s.pointer == pointer)?;

        sample.current = x;
        sample.progress = (sample.delta() / swipe_distance).clamp(-1.0, 1.0);
        Some(sample.progress)
    }

    /// Finish the drag and clear tracking state.
    ///
    /// `None` when `pointer` is not the tracked one.
    pub fn end(&mut self, pointer: PointerId) -> Option<GestureDecision> {
        if !self.is_tracking(pointer) {
            return None;
        }

        let sample = self.active.take()?;
        Some(GestureDecision::from_progress(
            sample.progress,
            self.commit_threshold,
        ))
    }

    /// Forget the current track without deciding anything
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_tracking(&self, pointer: PointerId) -> bool {
        self.active.map_or(false, |s| s.pointer == pointer)
    }

    pub fn sample(&self) -> Option<&GestureSample> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINGER: PointerId = PointerId::PRIMARY;

    fn interpreter() -> GestureInterpreter {
        GestureInterpreter::new(150.0, 0.3)
    }

    #[test]
    fn test_progress_is_linear_and_clamped() {
        let mut gesture = interpreter();
        assert!(gesture.start(FINGER, 100.0));

        assert_eq!(gesture.update(FINGER, 100.0), Some(0.0));
        assert_eq!(gesture.update(FINGER, 175.0), Some(0.5));
        assert_eq!(gesture.update(FINGER, 250.0), Some(1.0));
        assert_eq!(gesture.update(FINGER, 400.0), Some(1.0));
        assert_eq!(gesture.update(FINGER, -200.0), Some(-1.0));
    }

    #[test]
    fn test_threshold_boundary() {
        let mut gesture = interpreter();
        gesture.start(FINGER, 0.0);
        gesture.update(FINGER, 0.29 * 150.0);
        assert_eq!(gesture.end(FINGER), Some(GestureDecision::Cancel));

        gesture.start(FINGER, 0.0);
        gesture.update(FINGER, 0.31 * 150.0);
        assert_eq!(
            gesture.end(FINGER),
            Some(GestureDecision::Commit(Direction::Backward))
        );

        gesture.start(FINGER, 0.0);
        gesture.update(FINGER, -0.31 * 150.0);
        assert_eq!(
            gesture.end(FINGER),
            Some(GestureDecision::Commit(Direction::Forward))
        );
    }

    #[test]
    fn test_exact_threshold_cancels() {
        assert_eq!(
            GestureDecision::from_progress(0.3, 0.3),
            GestureDecision::Cancel
        );
        assert_eq!(
            GestureDecision::from_progress(-0.3, 0.3),
            GestureDecision::Cancel
        );
    }

    #[test]
    fn test_end_clears_tracking() {
        let mut gesture = interpreter();
        gesture.start(FINGER, 10.0);
        gesture.update(FINGER, 200.0);
        assert!(gesture.end(FINGER).is_some());

        assert!(!gesture.is_active());
        assert_eq!(gesture.end(FINGER), None);
        assert_eq!(gesture.update(FINGER, 50.0), None);
    }

    #[test]
    fn test_second_pointer_ignored() {
        let mut gesture = interpreter();
        let other = PointerId(7);

        assert!(gesture.start(FINGER, 0.0));
        assert!(!gesture.start(other, 500.0));
        assert_eq!(gesture.update(other, 900.0), None);
        assert_eq!(gesture.end(other), None);

        assert_eq!(gesture.update(FINGER, -75.0), Some(-0.5));
        assert!(gesture.is_tracking(FINGER));
        assert_eq!(
            gesture.end(FINGER),
            Some(GestureDecision::Commit(Direction::Forward))
        );
    }

    #[test]
    fn test_non_finite_positions_ignored() {
        let mut gesture = interpreter();
        assert!(!gesture.start(FINGER, f32::NAN));
        assert!(!gesture.is_active());

        gesture.start(FINGER, 0.0);
        assert_eq!(gesture.update(FINGER, 60.0), Some(0.4));
        assert_eq!(gesture.update(FINGER, f32::NAN), None);
        assert_eq!(gesture.update(FINGER, f32::INFINITY), None);

        // Last finite position still decides
        assert_eq!(
            gesture.end(FINGER),
            Some(GestureDecision::Commit(Direction::Backward))
        );
    }

    #[test]
    fn test_press_without_move_cancels() {
        let mut gesture = interpreter();
        gesture.start(FINGER, 42.0);
        assert_eq!(gesture.sample().map(|s| s.delta()), Some(0.0));
        assert_eq!(gesture.end(FINGER), Some(GestureDecision::Cancel));
    }
}
