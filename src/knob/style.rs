//! Pluggable knob rendering.
//!
//! A [`KnobStyle`] turns a [`KnobConfig`] into widgets on screen. The
//! default style draws the arc gauge with a caption underneath; other styles
//! can reuse [`interact`] for the drag and overlay behaviour and paint
//! something else.

use eframe::egui::{self, vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2};

use super::attributes::{KnobAttributes, KnobCaption, KnobStroke, LineCap, LineJoin};
use super::display::{DisplayState, FADE_SECONDS};
use super::geometry::{ArcPath, KnobShape};
use super::range::KnobRange;
use super::widget::interact;

/// How far the caption is pulled up into the arc's bounding box.
const CAPTION_OVERLAP: f32 = 4.0;

/// Everything a style needs to render one knob.
pub struct KnobConfig<'a> {
    pub label: &'a str,
    pub value: &'a mut f32,
    pub range: KnobRange,
    pub attributes: &'a KnobAttributes,
}

/// A rendering strategy for knobs.
pub trait KnobStyle: Send + Sync {
    /// Lay out, handle input for, and paint one knob.
    fn show(&self, ui: &mut Ui, config: KnobConfig<'_>) -> Response;

    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Arc gauge with a label or value caption below it.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultKnobStyle;

impl KnobStyle for DefaultKnobStyle {
    fn show(&self, ui: &mut Ui, mut config: KnobConfig<'_>) -> Response {
        let size = config.attributes.size;
        let (rect, mut response) = ui.allocate_exact_size(Vec2::splat(size), Sense::drag());

        let display = interact(ui, &mut response, &mut config);
        let value_opacity = value_opacity(ui.ctx(), response.id, display);

        if ui.is_rect_visible(rect) {
            let scene = KnobScene::layout(
                rect,
                config.label,
                *config.value,
                config.range,
                config.attributes,
                value_opacity,
            );
            scene.paint(ui.painter());
        }

        response
    }

    fn name(&self) -> &'static str {
        "default"
    }
}

/// Opacity of the value caption: shown at once, faded out when reverting.
pub fn value_opacity(ctx: &egui::Context, id: egui::Id, display: DisplayState) -> f32 {
    let showing_value = display == DisplayState::ShowingValue;
    let faded = ctx.animate_bool_with_time(id.with("value_overlay"), showing_value, FADE_SECONDS);
    if showing_value {
        1.0
    } else {
        faded
    }
}

/// A stroked arc in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcStroke {
    pub path: ArcPath,
    pub color: Color32,
    pub stroke: KnobStroke,
}

impl ArcStroke {
    fn paint(&self, painter: &Painter) {
        let points = self.path.points();
        let radius = self.stroke.width * 0.5;

        if self.stroke.cap == LineCap::Round {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                painter.circle_filled(*first, radius, self.color);
                painter.circle_filled(*last, radius, self.color);
            }
        }
        if self.stroke.join == LineJoin::Round && self.path.indicator_fraction.is_some() {
            painter.circle_filled(self.path.tip(), radius, self.color);
        }

        painter.add(Shape::line(points, Stroke::new(self.stroke.width, self.color)));
    }
}

/// Geometry description of one default-style knob for a single frame.
#[derive(Clone, Debug, PartialEq)]
pub struct KnobScene {
    pub track: ArcStroke,
    pub progress: ArcStroke,
    /// Top center of the caption text.
    pub caption_anchor: Pos2,
    pub label_caption: KnobCaption,
    pub value_caption: KnobCaption,
    /// 1.0 shows only the value, 0.0 only the label.
    pub value_opacity: f32,
}

impl KnobScene {
    /// Compute the scene for a knob occupying `rect`.
    pub fn layout(
        rect: Rect,
        label: &str,
        value: f32,
        range: KnobRange,
        attributes: &KnobAttributes,
        value_opacity: f32,
    ) -> Self {
        let label_caption = attributes.render_label(label);
        let value_caption = attributes.render_label(&attributes.format_value(value));

        let caption_height = label_caption.font_size.max(value_caption.font_size);
        let arc_height = (rect.height() - caption_height + CAPTION_OVERLAP).max(0.0);
        let arc_rect = Rect::from_min_size(rect.min, vec2(rect.width(), arc_height));

        let fraction = range.fraction(value);
        let track = ArcStroke {
            path: KnobShape::track(attributes.indicator_fraction).path_in(arc_rect),
            color: attributes.track_color,
            stroke: attributes.track_stroke,
        };
        let progress = ArcStroke {
            path: KnobShape::progress(attributes.indicator_fraction, fraction).path_in(arc_rect),
            color: attributes.progress_color,
            stroke: attributes.progress_stroke,
        };

        Self {
            track,
            progress,
            caption_anchor: Pos2::new(arc_rect.center().x, arc_rect.bottom() - CAPTION_OVERLAP),
            label_caption,
            value_caption,
            value_opacity: value_opacity.clamp(0.0, 1.0),
        }
    }

    /// Caption that dominates the current crossfade.
    pub fn visible_caption(&self) -> &KnobCaption {
        if self.value_opacity >= 0.5 {
            &self.value_caption
        } else {
            &self.label_caption
        }
    }

    pub fn paint(&self, painter: &Painter) {
        self.track.paint(painter);
        self.progress.paint(painter);
        self.paint_caption(painter, &self.label_caption, 1.0 - self.value_opacity);
        self.paint_caption(painter, &self.value_caption, self.value_opacity);
    }

    fn paint_caption(&self, painter: &Painter, caption: &KnobCaption, opacity: f32) {
        if opacity <= 0.0 {
            return;
        }
        painter.text(
            self.caption_anchor,
            Align2::CENTER_TOP,
            &caption.text,
            FontId::proportional(caption.font_size),
            caption.color.gamma_multiply(opacity),
        );
    }
}
