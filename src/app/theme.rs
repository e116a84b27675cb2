//! Theme definitions for the knob demo
//!
//! Provides color constants and styling utilities for the demo screen:
//! a black canvas with outlined columns and knobs.

use eframe::egui::{self, Color32, Rounding, Stroke, Vec2};

/// Background colors
pub mod background {
    use super::Color32;

    /// Canvas behind the knob columns
    pub const MAIN: Color32 = Color32::BLACK;

    /// Toolbar and status bar background
    pub const PANEL: Color32 = Color32::from_rgb(24, 24, 28);

    /// Body fill of the needle knob style
    pub const DIAL: Color32 = Color32::from_rgb(40, 40, 48);
}

/// Outline colors for the demo layout
pub mod border {
    use super::Color32;

    /// Around each knob
    pub const KNOB: Color32 = Color32::YELLOW;

    /// Around each column
    pub const COLUMN: Color32 = Color32::WHITE;

    /// Around the whole grid of columns
    pub const GRID: Color32 = Color32::GREEN;

    /// Outline width
    pub const WIDTH: f32 = 1.0;
}

/// Text colors
pub mod text {
    use super::Color32;

    /// Primary text - bright white
    pub const PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);

    /// Secondary text - dimmed
    pub const SECONDARY: Color32 = Color32::from_rgb(160, 160, 175);

    /// Disabled text
    pub const DISABLED: Color32 = Color32::from_rgb(100, 100, 115);
}

/// UI accent colors
pub mod accent {
    use super::Color32;

    /// Primary accent - matches the default progress arc
    pub const PRIMARY: Color32 = Color32::from_rgb(100, 210, 255);
}

/// Padding inside the outer grid border
pub const GRID_PADDING: f32 = 16.0;

/// Smaller rounding for compact elements
pub const ROUNDING_SMALL: Rounding = Rounding {
    nw: 4.0,
    ne: 4.0,
    sw: 4.0,
    se: 4.0,
};

/// Stroke for an outline of the given color
pub fn outline(color: Color32) -> Stroke {
    Stroke::new(border::WIDTH, color)
}

/// Apply the dark demo theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let visuals = &mut style.visuals;
    visuals.dark_mode = true;
    visuals.panel_fill = background::MAIN;
    visuals.window_fill = background::PANEL;

    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text::SECONDARY);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text::PRIMARY);
    visuals.widgets.inactive.rounding = ROUNDING_SMALL;
    visuals.widgets.hovered.rounding = ROUNDING_SMALL;
    visuals.widgets.active.fg_stroke = Stroke::new(1.5, accent::PRIMARY);
    visuals.widgets.active.rounding = ROUNDING_SMALL;

    visuals.selection.bg_fill = accent::PRIMARY.gamma_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent::PRIMARY);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
