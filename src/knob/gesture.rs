//! Drag gesture tracking and the drag-to-value mapping.
//!
//! Only vertical movement changes the value. Horizontal distance from the
//! point where the drag started slows the value down logarithmically, so
//! moving the pointer sideways while dragging gives finer control.

use eframe::egui::{pos2, Pos2};

use super::range::KnobRange;

/// How long a press must be held before drag movement changes the value.
pub const MIN_PRESS_SECONDS: f64 = 0.01;

/// Phase of the current pointer gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No pointer is down on the control.
    #[default]
    Idle,
    /// Pointer is down but has not been held long enough to drag.
    Pressing,
    /// Drag movement is being applied to the value.
    Dragging,
}

impl DragPhase {
    /// True while the pointer is down on the control.
    pub fn is_active(self) -> bool {
        !matches!(self, DragPhase::Idle)
    }
}

/// Converts pointer displacement into value steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMapping {
    /// Value change per point of vertical movement at full precision.
    ratio: f32,
}

impl DragMapping {
    /// Build the mapping for a control of `size` points over `range`.
    pub fn new(range: KnobRange, size: f32, tracking_sensitivity: f32) -> Self {
        Self {
            ratio: range.span() / (size * tracking_sensitivity),
        }
    }

    /// Precision divisor for a horizontal offset. Never less than 1.
    pub fn precision_scale(delta_x: f32) -> f32 {
        delta_x.max(1.0).log10() + 1.0
    }

    /// Unclamped value change for a pointer move from `previous` to `current`.
    pub fn step(&self, previous: Pos2, current: Pos2) -> f32 {
        let delta_x = (current.x - previous.x).abs();
        let delta_y = -(current.y - previous.y);
        delta_y / Self::precision_scale(delta_x) * self.ratio
    }
}

/// Tracks one pointer gesture on a knob.
///
/// The reference point keeps the x of the drag start and the y of the
/// latest event, so horizontal offset is measured from the origin while
/// vertical movement is measured event to event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    phase: DragPhase,
    pressed_at: f64,
    previous: Option<Pos2>,
}

impl DragTracker {
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Pointer went down at time `now` (seconds).
    pub fn press(&mut self, now: f64) {
        self.phase = DragPhase::Pressing;
        self.pressed_at = now;
        self.previous = None;
    }

    /// Feed a pointer position while the pointer is held down.
    ///
    /// Returns the value step for this event, or `None` while the press is
    /// still being held, when idle, and on the first drag event (which only
    /// seeds the reference point).
    pub fn drag(&mut self, start: Pos2, current: Pos2, now: f64, mapping: &DragMapping) -> Option<f32> {
        match self.phase {
            DragPhase::Idle => return None,
            DragPhase::Pressing if now - self.pressed_at < MIN_PRESS_SECONDS => return None,
            DragPhase::Pressing => self.phase = DragPhase::Dragging,
            DragPhase::Dragging => {}
        }

        let step = self.previous.map(|previous| mapping.step(previous, current));
        self.previous = Some(pos2(start.x, current.y));
        step
    }

    /// Pointer was released or the gesture was cancelled.
    pub fn release(&mut self) {
        self.phase = DragPhase::Idle;
        self.previous = None;
    }
}

/// Apply a step to a value, keeping it inside the range.
pub fn apply_step(value: f32, step: f32, range: KnobRange) -> f32 {
    range.clamp(value + step)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_mapping() -> DragMapping {
        DragMapping::new(KnobRange::default(), 100.0, 2.0)
    }

    /// Tracker already past the press delay with its reference point seeded.
    fn dragging_from(start: Pos2) -> DragTracker {
        let mut tracker = DragTracker::default();
        tracker.press(0.0);
        assert_eq!(tracker.drag(start, start, 0.02, &unit_mapping()), None);
        assert_eq!(tracker.phase(), DragPhase::Dragging);
        tracker
    }

    #[test]
    fn test_precision_scale_never_below_one() {
        assert_eq!(DragMapping::precision_scale(0.0), 1.0);
        assert_eq!(DragMapping::precision_scale(0.5), 1.0);
        assert_eq!(DragMapping::precision_scale(1.0), 1.0);
        assert!((DragMapping::precision_scale(10.0) - 2.0).abs() < 1e-6);
        assert!((DragMapping::precision_scale(100.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_worked_example_step() {
        // deltaX = 1 -> scale 1; 50 / 1 * 1 / (100 * 2) = 0.25
        let step = unit_mapping().step(pos2(10.0, 100.0), pos2(11.0, 50.0));
        assert!((step - 0.25).abs() < 1e-6);
        assert!((apply_step(0.5, step, KnobRange::default()) - 0.75).abs() < 1e-6);
        assert_eq!(apply_step(0.9, step, KnobRange::default()), 1.0);
    }

    #[test]
    fn test_step_scales_with_range() {
        let mapping = DragMapping::new(KnobRange::new(-10.0, 10.0), 100.0, 2.0);
        let step = mapping.step(pos2(0.0, 100.0), pos2(0.0, 90.0));
        assert!((step - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_upward_drag_increases_downward_decreases() {
        let mapping = unit_mapping();
        assert!(mapping.step(pos2(0.0, 50.0), pos2(0.0, 40.0)) > 0.0);
        assert!(mapping.step(pos2(0.0, 50.0), pos2(0.0, 60.0)) < 0.0);
        assert_eq!(mapping.step(pos2(0.0, 50.0), pos2(30.0, 50.0)), 0.0);
    }

    #[test]
    fn test_horizontal_offset_reduces_step() {
        let mapping = unit_mapping();
        let mut last = f32::INFINITY;
        for delta_x in [1.0, 2.0, 5.0, 20.0, 100.0, 400.0] {
            let step = mapping.step(pos2(0.0, 50.0), pos2(delta_x, 30.0));
            assert!(step > 0.0);
            assert!(step < last, "step {step} at dx {delta_x} not below {last}");
            last = step;
        }
    }

    #[test]
    fn test_press_must_be_held_before_dragging() {
        let mapping = unit_mapping();
        let mut tracker = DragTracker::default();
        tracker.press(1.0);
        assert_eq!(tracker.phase(), DragPhase::Pressing);
        assert_eq!(tracker.drag(pos2(0.0, 0.0), pos2(0.0, -40.0), 1.005, &mapping), None);
        assert_eq!(tracker.phase(), DragPhase::Pressing);

        // First event after the delay only seeds the reference point.
        assert_eq!(tracker.drag(pos2(0.0, 0.0), pos2(0.0, -40.0), 1.02, &mapping), None);
        assert_eq!(tracker.phase(), DragPhase::Dragging);

        let step = tracker.drag(pos2(0.0, 0.0), pos2(0.0, -50.0), 1.03, &mapping);
        assert!((step.unwrap_or_default() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_vertical_reference_tracks_latest_event() {
        let mapping = unit_mapping();
        let start = pos2(0.0, 100.0);
        let mut tracker = dragging_from(start);

        let first = tracker.drag(start, pos2(0.0, 90.0), 0.03, &mapping).unwrap_or_default();
        let second = tracker.drag(start, pos2(0.0, 80.0), 0.04, &mapping).unwrap_or_default();
        assert!((first - 0.05).abs() < 1e-6);
        assert!((second - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_horizontal_reference_stays_at_start() {
        let mapping = unit_mapping();
        let start = pos2(0.0, 100.0);
        let mut tracker = dragging_from(start);

        // Pointer drifts to x = 10 and stays there: every event sees dx = 10.
        let first = tracker.drag(start, pos2(10.0, 90.0), 0.03, &mapping).unwrap_or_default();
        let second = tracker.drag(start, pos2(10.0, 80.0), 0.04, &mapping).unwrap_or_default();
        assert!((first - 0.025).abs() < 1e-6);
        assert!((second - 0.025).abs() < 1e-6);
    }

    #[test]
    fn test_value_stays_in_range_over_long_drag() {
        let mapping = DragMapping::new(KnobRange::new(2.0, 3.0), 100.0, 2.0);
        let range = KnobRange::new(2.0, 3.0);
        let start = pos2(0.0, 0.0);
        let mut tracker = dragging_from(start);
        let mut value = 2.5;
        let mut now = 0.03;

        for y in (0..600).map(|i| -(i as f32) * 3.0) {
            if let Some(step) = tracker.drag(start, pos2(0.0, y), now, &mapping) {
                value = apply_step(value, step, range);
            }
            assert!((2.0..=3.0).contains(&value));
            now += 0.01;
        }
        assert_eq!(value, 3.0);

        for y in (0..1200).map(|i| -1800.0 + i as f32 * 3.0) {
            if let Some(step) = tracker.drag(start, pos2(0.0, y), now, &mapping) {
                value = apply_step(value, step, range);
            }
            assert!((2.0..=3.0).contains(&value));
            now += 0.01;
        }
        assert_eq!(value, 2.0);
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut tracker = dragging_from(pos2(0.0, 0.0));
        tracker.release();
        assert_eq!(tracker.phase(), DragPhase::Idle);
        assert!(!tracker.phase().is_active());
        assert_eq!(
            tracker.drag(pos2(0.0, 0.0), pos2(0.0, -10.0), 1.0, &unit_mapping()),
            None
        );
    }
}
