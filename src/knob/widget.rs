//! The knob control and its per-instance interaction state.

use std::time::Duration;

use eframe::egui::{Context, Id, Pos2, Response, Ui};

use super::display::{DisplayState, ValueOverlay};
use super::environment::KnobEnvironment;
use super::gesture::{apply_step, DragMapping, DragTracker};
use super::range::KnobRange;
use super::style::KnobConfig;

/// A rotary knob bound to a host-owned value.
///
/// ```no_run
/// # use arc_knob::knob::{KnobEnvironment, KnobView};
/// # fn ui(ui: &mut eframe::egui::Ui, gain: &mut f32) {
/// let env = KnobEnvironment::default();
/// KnobView::new("Gain", gain).range(0.0, 2.0).show(ui, &env);
/// # }
/// ```
pub struct KnobView<'a> {
    label: &'a str,
    value: &'a mut f32,
    range: KnobRange,
}

impl<'a> KnobView<'a> {
    /// A knob over the default `0.0..=1.0` range.
    pub fn new(label: &'a str, value: &'a mut f32) -> Self {
        Self {
            label,
            value,
            range: KnobRange::default(),
        }
    }

    /// Set the value range.
    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.range = KnobRange::new(min, max);
        self
    }

    /// Render with the style and attributes of `env`.
    pub fn show(self, ui: &mut Ui, env: &KnobEnvironment) -> Response {
        let clamped = self.range.clamp(*self.value);
        let moved = clamped != *self.value;
        *self.value = clamped;

        let mut response = env.style().show(
            ui,
            KnobConfig {
                label: self.label,
                value: self.value,
                range: self.range,
                attributes: env.attributes(),
            },
        );
        if moved {
            response.mark_changed();
        }
        response
    }

    /// Discard the interaction state of the knob whose response had `id`.
    ///
    /// Call this when a knob stops being shown so no pending expiry outlives it.
    pub fn teardown(ctx: &Context, id: Id) {
        ctx.data_mut(|data| data.remove::<KnobInteraction>(id));
        tracing::debug!(?id, "knob state discarded");
    }
}

/// Gesture and overlay state of one knob, kept in egui's temp memory.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KnobInteraction {
    gesture: DragTracker,
    overlay: ValueOverlay,
    last_pointer: Option<Pos2>,
}

impl KnobInteraction {
    pub fn load(ctx: &Context, id: Id) -> Self {
        ctx.data_mut(|data| data.get_temp::<Self>(id)).unwrap_or_default()
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|data| data.insert_temp(id, self));
    }

    pub fn gesture(&self) -> &DragTracker {
        &self.gesture
    }

    pub fn overlay(&self) -> &ValueOverlay {
        &self.overlay
    }

    /// Advance the state for one frame.
    ///
    /// `pointer` is `Some((press_origin, current))` while the pointer is held
    /// down on the knob. Returns the value step to apply, if any.
    pub fn step(&mut self, pointer: Option<(Pos2, Pos2)>, now: f64, mapping: &DragMapping, label: &str) -> Option<f32> {
        let mut step = None;

        match pointer {
            Some((start, current)) => {
                if !self.gesture.phase().is_active() {
                    self.gesture.press(now);
                    self.overlay.contact_started(now);
                    tracing::debug!(label, "knob contact started");
                }
                if self.last_pointer != Some(current) {
                    step = self.gesture.drag(start, current, now, mapping);
                    self.overlay.touch(now);
                    self.last_pointer = Some(current);
                }
            }
            None if self.gesture.phase().is_active() => {
                self.gesture.release();
                self.overlay.touch(now);
                self.last_pointer = None;
                tracing::debug!(label, "knob gesture ended");
            }
            None => {}
        }

        if let Some(state) = self.overlay.poll(now, self.gesture.phase().is_active()) {
            tracing::debug!(label, ?state, "knob display changed");
        }

        step
    }
}

/// Drive drag input and the value overlay for a knob laid out as `response`.
///
/// Updates `config.value`, marks the response changed when the value moves,
/// schedules a repaint for any pending expiry, and returns what the caption
/// should show.
pub fn interact(ui: &Ui, response: &mut Response, config: &mut KnobConfig<'_>) -> DisplayState {
    let ctx = ui.ctx();
    let id = response.id;
    let now = ui.input(|input| input.time);

    let pointer = if response.is_pointer_button_down_on() {
        ui.input(|input| input.pointer.press_origin().zip(input.pointer.interact_pos()))
    } else {
        None
    };

    let mapping = DragMapping::new(
        config.range,
        config.attributes.size,
        config.attributes.tracking_sensitivity,
    );

    let mut state = KnobInteraction::load(ctx, id);
    if let Some(step) = state.step(pointer, now, &mapping, config.label) {
        let updated = apply_step(*config.value, step, config.range);
        if updated != *config.value {
            tracing::trace!(label = config.label, value = updated, step, "knob value changed");
            *config.value = updated;
            response.mark_changed();
        }
    }

    if let Some(remaining) = state.overlay.timer().remaining(now) {
        ctx.request_repaint_after(Duration::from_secs_f64(remaining));
    }

    let display = state.overlay.state();
    state.store(ctx, id);
    display
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knob::attributes::KnobAttributes;
    use crate::knob::gesture::DragPhase;
    use eframe::egui::{self, pos2};

    fn mapping() -> DragMapping {
        DragMapping::new(KnobRange::default(), 100.0, 2.0)
    }

    #[test]
    fn test_contact_shows_value_until_idle_expiry() {
        let mapping = mapping();
        let mut state = KnobInteraction::default();
        let origin = pos2(50.0, 50.0);

        state.step(Some((origin, origin)), 0.0, &mapping, "Alpha");
        assert_eq!(state.gesture().phase(), DragPhase::Pressing);
        assert_eq!(state.overlay().state(), DisplayState::ShowingValue);

        // First move past the press delay starts the drag and seeds the reference.
        assert_eq!(state.step(Some((origin, pos2(50.0, 40.0))), 0.05, &mapping, "Alpha"), None);
        assert_eq!(state.gesture().phase(), DragPhase::Dragging);

        let step = state.step(Some((origin, pos2(50.0, 30.0))), 0.1, &mapping, "Alpha");
        assert!((step.unwrap_or_default() - 0.05).abs() < 1e-6);

        // Held still well past the expiry: still showing the value.
        state.step(Some((origin, pos2(50.0, 30.0))), 3.0, &mapping, "Alpha");
        assert_eq!(state.overlay().state(), DisplayState::ShowingValue);

        // Released at 3.5, reverts one second later.
        state.step(None, 3.5, &mapping, "Alpha");
        assert_eq!(state.gesture().phase(), DragPhase::Idle);
        state.step(None, 4.25, &mapping, "Alpha");
        assert_eq!(state.overlay().state(), DisplayState::ShowingValue);
        state.step(None, 4.5, &mapping, "Alpha");
        assert_eq!(state.overlay().state(), DisplayState::ShowingLabel);
    }

    #[test]
    fn test_stationary_pointer_does_not_step() {
        let mapping = mapping();
        let mut state = KnobInteraction::default();
        let origin = pos2(0.0, 0.0);

        state.step(Some((origin, origin)), 0.0, &mapping, "Beta");
        state.step(Some((origin, pos2(0.0, -5.0))), 0.02, &mapping, "Beta");
        assert_eq!(state.step(Some((origin, pos2(0.0, -5.0))), 0.03, &mapping, "Beta"), None);
    }

    #[test]
    fn test_knob_renders_headless() {
        let ctx = egui::Context::default();
        let env = KnobEnvironment::default()
            .with_attributes(KnobAttributes::default().with_size(80.0));
        let mut value = 7.0;
        let mut size = egui::Vec2::ZERO;
        let mut id = None;
        let mut changed = false;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = KnobView::new("Alpha", &mut value).range(0.0, 5.0).show(ui, &env);
                size = response.rect.size();
                id = Some(response.id);
                changed = response.changed();
            });
        });

        assert_eq!(size, egui::vec2(80.0, 80.0));
        assert_eq!(value, 5.0);
        // The host value was pulled into range, so the caller is told.
        assert!(changed);

        let id = id.unwrap_or(Id::NULL);
        let state = KnobInteraction::load(&ctx, id);
        assert_eq!(state.overlay().state(), DisplayState::ShowingLabel);

        KnobView::teardown(&ctx, id);
        assert_eq!(
            ctx.data_mut(|data| data.get_temp::<KnobInteraction>(id)),
            None
        );
    }

    #[test]
    fn test_in_range_value_is_not_reported_changed() {
        let ctx = egui::Context::default();
        let mut value = 0.5;
        let frame = knob_frame(&ctx, 0.0, Vec::new(), &mut value);
        assert!(!frame.changed);
        assert_eq!(value, 0.5);
    }

    /// Outcome of one headless frame containing a single default knob.
    struct KnobFrame {
        rect: egui::Rect,
        id: Id,
        changed: bool,
        repaint_delay: Duration,
    }

    fn knob_frame(ctx: &egui::Context, time: f64, events: Vec<egui::Event>, value: &mut f32) -> KnobFrame {
        let env = KnobEnvironment::default();
        let input = egui::RawInput {
            time: Some(time),
            screen_rect: Some(egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(400.0, 400.0))),
            events,
            ..Default::default()
        };

        let mut frame = None;
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = KnobView::new("Alpha", &mut *value).show(ui, &env);
                frame = Some((response.rect, response.id, response.changed()));
            });
        });

        let repaint_delay = output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map_or(Duration::MAX, |viewport| viewport.repaint_delay);
        let (rect, id, changed) = frame.unwrap_or((egui::Rect::NOTHING, Id::NULL, false));
        KnobFrame {
            rect,
            id,
            changed,
            repaint_delay,
        }
    }

    fn primary_button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_pointer_drag_drives_value_and_caption() {
        let ctx = egui::Context::default();
        let mut value = 0.5;

        // Lay out once so the knob's rect is known for hit testing.
        let layout = knob_frame(&ctx, 0.0, Vec::new(), &mut value);
        let center = layout.rect.center();
        let display = |id| KnobInteraction::load(&ctx, id).overlay().state();

        let press = knob_frame(
            &ctx,
            0.1,
            vec![egui::Event::PointerMoved(center), primary_button(center, true)],
            &mut value,
        );
        assert_eq!(press.id, layout.id);
        assert_eq!(display(press.id), DisplayState::ShowingValue);
        assert_eq!(value, 0.5);

        // First move after the press delay seeds the reference point.
        knob_frame(&ctx, 0.2, vec![egui::Event::PointerMoved(center - egui::vec2(0.0, 10.0))], &mut value);
        assert_eq!(value, 0.5);

        // 20 points up at full precision: 20 / (100 * 2) = 0.1
        let drag = knob_frame(&ctx, 0.3, vec![egui::Event::PointerMoved(center - egui::vec2(0.0, 30.0))], &mut value);
        assert!((value - 0.6).abs() < 1e-5, "value after drag: {value}");
        assert!(drag.changed);
        assert_eq!(display(drag.id), DisplayState::ShowingValue);

        knob_frame(&ctx, 0.4, vec![primary_button(center - egui::vec2(0.0, 30.0), false)], &mut value);
        knob_frame(&ctx, 0.5, Vec::new(), &mut value);
        assert_eq!(
            KnobInteraction::load(&ctx, layout.id).gesture().phase(),
            DragPhase::Idle
        );

        // The pending expiry keeps frames coming without further input.
        let waiting = knob_frame(&ctx, 1.3, Vec::new(), &mut value);
        assert_eq!(display(waiting.id), DisplayState::ShowingValue);
        assert!(waiting.repaint_delay <= Duration::from_secs(1));

        let expired = knob_frame(&ctx, 2.0, Vec::new(), &mut value);
        assert_eq!(display(expired.id), DisplayState::ShowingLabel);
        assert!((value - 0.6).abs() < 1e-5);
    }
}
