//! Styling attributes shared by every knob rendered in a scope.
//!
//! A [`KnobAttributes`] bundle is immutable for the duration of a frame.
//! Scopes that want a different look install a replacement bundle through
//! [`KnobEnvironment`](super::environment::KnobEnvironment).

use std::fmt;
use std::sync::Arc;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Formats a knob value for the value overlay.
pub type ValueFormatter = Arc<dyn Fn(f32) -> String + Send + Sync>;

/// Turns a display string (label or formatted value) into a caption.
pub type LabelRenderer = Arc<dyn Fn(&str) -> KnobCaption + Send + Sync>;

/// Font size used by the default label renderer.
pub const DEFAULT_CAPTION_SIZE: f32 = 14.0;

/// Shape drawn at the open ends of a stroked path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Ends stop exactly at the path end points.
    Butt,
    /// Ends are capped with a half circle.
    #[default]
    Round,
}

/// Shape drawn where two path segments meet at a corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Corners are left as tessellated.
    Miter,
    /// Corners are filled with a disc.
    #[default]
    Round,
}

/// Stroke style for an arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobStroke {
    /// Line width in points.
    pub width: f32,
    /// End cap style.
    pub cap: LineCap,
    /// Corner join style.
    pub join: LineJoin,
}

impl KnobStroke {
    /// A stroke with round caps and joins.
    pub const fn round(width: f32) -> Self {
        Self {
            width,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

/// Text shown below the arc.
#[derive(Clone, Debug, PartialEq)]
pub struct KnobCaption {
    pub text: String,
    pub color: Color32,
    pub font_size: f32,
}

impl KnobCaption {
    /// Plain colored text at the default size.
    pub fn plain(text: impl Into<String>, color: Color32) -> Self {
        Self {
            text: text.into(),
            color,
            font_size: DEFAULT_CAPTION_SIZE,
        }
    }
}

/// Configuration bundle for knob rendering and drag behaviour.
#[derive(Clone)]
pub struct KnobAttributes {
    /// Width and height of the control.
    pub size: f32,
    /// Color of the background arc.
    pub track_color: Color32,
    /// Stroke of the background arc.
    pub track_stroke: KnobStroke,
    /// Color of the value arc.
    pub progress_color: Color32,
    /// Stroke of the value arc.
    pub progress_stroke: KnobStroke,
    /// Length of the indicator line as a fraction of the arc radius.
    pub indicator_fraction: f32,
    /// Larger values need more drag distance to sweep the full range.
    pub tracking_sensitivity: f32,
    /// Custom value formatter. `None` uses two decimals and an `s` suffix.
    pub value_formatter: Option<ValueFormatter>,
    /// Custom caption renderer. `None` colors text with `progress_color`.
    pub label_renderer: Option<LabelRenderer>,
}

impl Default for KnobAttributes {
    fn default() -> Self {
        Self {
            size: 100.0,
            track_color: Color32::from_gray(85),
            track_stroke: KnobStroke::round(4.0),
            progress_color: Color32::from_rgb(100, 210, 255),
            progress_stroke: KnobStroke::round(6.0),
            indicator_fraction: 0.3,
            tracking_sensitivity: 2.0,
            value_formatter: None,
            label_renderer: None,
        }
    }
}

impl KnobAttributes {
    /// Format a value with the configured formatter.
    pub fn format_value(&self, value: f32) -> String {
        match &self.value_formatter {
            Some(formatter) => formatter(value),
            None => default_value_format(value),
        }
    }

    /// Build the caption for a display string.
    pub fn render_label(&self, text: &str) -> KnobCaption {
        match &self.label_renderer {
            Some(renderer) => renderer(text),
            None => KnobCaption::plain(text, self.progress_color),
        }
    }

    /// Set the control size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the background arc color.
    pub fn with_track_color(mut self, color: Color32) -> Self {
        self.track_color = color;
        self
    }

    /// Set the background arc stroke.
    pub fn with_track_stroke(mut self, stroke: KnobStroke) -> Self {
        self.track_stroke = stroke;
        self
    }

    /// Set the value arc color.
    pub fn with_progress_color(mut self, color: Color32) -> Self {
        self.progress_color = color;
        self
    }

    /// Set the value arc stroke.
    pub fn with_progress_stroke(mut self, stroke: KnobStroke) -> Self {
        self.progress_stroke = stroke;
        self
    }

    /// Set the indicator length as a fraction of the radius.
    pub fn with_indicator_fraction(mut self, fraction: f32) -> Self {
        self.indicator_fraction = fraction;
        self
    }

    /// Set the drag tracking sensitivity.
    pub fn with_tracking_sensitivity(mut self, sensitivity: f32) -> Self {
        self.tracking_sensitivity = sensitivity;
        self
    }

    /// Install a custom value formatter.
    pub fn with_value_formatter(
        mut self,
        formatter: impl Fn(f32) -> String + Send + Sync + 'static,
    ) -> Self {
        self.value_formatter = Some(Arc::new(formatter));
        self
    }

    /// Install a custom caption renderer.
    pub fn with_label_renderer(
        mut self,
        renderer: impl Fn(&str) -> KnobCaption + Send + Sync + 'static,
    ) -> Self {
        self.label_renderer = Some(Arc::new(renderer));
        self
    }
}

impl fmt::Debug for KnobAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnobAttributes")
            .field("size", &self.size)
            .field("track_color", &self.track_color)
            .field("track_stroke", &self.track_stroke)
            .field("progress_color", &self.progress_color)
            .field("progress_stroke", &self.progress_stroke)
            .field("indicator_fraction", &self.indicator_fraction)
            .field("tracking_sensitivity", &self.tracking_sensitivity)
            .field("value_formatter", &self.value_formatter.is_some())
            .field("label_renderer", &self.label_renderer.is_some())
            .finish()
    }
}

/// Two decimal places followed by `s`.
pub fn default_value_format(value: f32) -> String {
    format!("{:.2}s", value)
}
