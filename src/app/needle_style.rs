//! Alternate knob style: a filled dial with a needle.
//!
//! Shares the drag and overlay behaviour of the default style through
//! [`interact`]; only the drawing differs.

use eframe::egui::{Align2, Color32, FontId, Response, Sense, Stroke, Ui, Vec2};

use crate::knob::geometry::{point_on_circle, progress_end_angle, ARC_INSET};
use crate::knob::style::value_opacity;
use crate::knob::{interact, KnobConfig, KnobStyle};

use super::theme;

/// Round dial body with a needle pointing at the current value.
#[derive(Clone, Copy, Debug)]
pub struct NeedleKnobStyle {
    /// Fill color of the dial body.
    pub body_color: Color32,
}

impl Default for NeedleKnobStyle {
    fn default() -> Self {
        Self {
            body_color: theme::background::DIAL,
        }
    }
}

impl KnobStyle for NeedleKnobStyle {
    fn show(&self, ui: &mut Ui, mut config: KnobConfig<'_>) -> Response {
        let attributes = config.attributes;
        let (rect, mut response) = ui.allocate_exact_size(Vec2::splat(attributes.size), Sense::drag());

        let display = interact(ui, &mut response, &mut config);
        let opacity = value_opacity(ui.ctx(), response.id, display);

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let radius = (rect.width().min(rect.height()) * 0.5 - ARC_INSET).max(0.0);

            painter.circle(
                center,
                radius,
                self.body_color,
                Stroke::new(attributes.track_stroke.width, attributes.track_color),
            );

            let angle = progress_end_angle(config.range.fraction(*config.value));
            let tip = point_on_circle(center, radius, angle);
            let tail = point_on_circle(center, radius * (1.0 - attributes.indicator_fraction), angle);
            painter.line_segment(
                [tail, tip],
                Stroke::new(attributes.progress_stroke.width, attributes.progress_color),
            );

            // Label stays put; the value fades in over the dial center.
            let label = attributes.render_label(config.label);
            painter.text(
                rect.center_bottom(),
                Align2::CENTER_BOTTOM,
                &label.text,
                FontId::proportional(label.font_size),
                label.color,
            );
            if opacity > 0.0 {
                let value = attributes.render_label(&attributes.format_value(*config.value));
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    &value.text,
                    FontId::proportional(value.font_size),
                    value.color.gamma_multiply(opacity),
                );
            }
        }

        response
    }

    fn name(&self) -> &'static str {
        "needle"
    }
}
