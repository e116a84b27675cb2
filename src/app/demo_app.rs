//! Demo screen for the knob control
//!
//! Lays out four columns of knobs bound to four shared values, so moving a
//! knob in one column moves its twins in the others. Column 2 installs
//! attribute overrides and column 3 an alternate style to show how
//! environments scope styling.

use eframe::egui::{self, Align, Color32, Id, Layout, RichText};

use super::needle_style::NeedleKnobStyle;
use super::theme;
use crate::knob::{KnobAttributes, KnobEnvironment, KnobView};

/// The shared values every column binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    Alpha,
    Beta,
    Delta,
    Gamma,
}

impl Param {
    pub const ALL: [Param; 4] = [Param::Alpha, Param::Beta, Param::Delta, Param::Gamma];

    pub fn label(self) -> &'static str {
        match self {
            Param::Alpha => "Alpha",
            Param::Beta => "Beta",
            Param::Delta => "Delta",
            Param::Gamma => "Gamma",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Knobs shown in each column, left to right.
pub const COLUMNS: [&[Param]; 4] = [
    &[Param::Alpha, Param::Beta, Param::Delta, Param::Gamma],
    &[Param::Alpha, Param::Beta],
    &[Param::Alpha, Param::Beta, Param::Delta],
    &[Param::Alpha, Param::Beta, Param::Delta, Param::Gamma],
];

/// Styling scope of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColumnScope {
    Inherited,
    YellowProgress,
    Needle,
}

impl ColumnScope {
    fn for_column(index: usize) -> Self {
        match index {
            1 => ColumnScope::YellowProgress,
            2 => ColumnScope::Needle,
            _ => ColumnScope::Inherited,
        }
    }

    /// Environment for the column, derived from the screen's environment.
    fn environment(self, parent: &KnobEnvironment) -> KnobEnvironment {
        match self {
            ColumnScope::Inherited => parent.clone(),
            ColumnScope::YellowProgress => parent.with_attributes(
                KnobAttributes::default()
                    .with_size(parent.attributes().size)
                    .with_progress_color(Color32::YELLOW),
            ),
            ColumnScope::Needle => parent.with_style(NeedleKnobStyle::default()),
        }
    }
}

/// Main application state for the knob demo
pub struct DemoApp {
    /// Values bound by the knobs, indexed by [`Param`]
    values: [f32; 4],

    /// Environment installed at the screen root
    env: KnobEnvironment,

    /// Name of the loaded theme, for the status bar
    theme_name: String,

    /// Whether the last column is shown
    show_last_column: bool,

    /// Knob ids of the last column from the previous frame
    last_column_ids: Vec<Id>,

    /// Whether theme has been applied
    theme_applied: bool,
}

impl DemoApp {
    /// Create the demo with a root environment and the name of its theme.
    pub fn new(env: KnobEnvironment, theme_name: impl Into<String>) -> Self {
        Self {
            values: [0.0; 4],
            env,
            theme_name: theme_name.into(),
            show_last_column: true,
            last_column_ids: Vec::new(),
            theme_applied: false,
        }
    }

    pub fn value(&self, param: Param) -> f32 {
        self.values[param.index()]
    }

    /// Draw the top toolbar
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("KNOBS").size(18.0).color(theme::text::PRIMARY).strong());
            ui.add_space(20.0);
            ui.separator();
            ui.add_space(20.0);

            if ui.checkbox(&mut self.show_last_column, "Column 4").changed() {
                tracing::info!(visible = self.show_last_column, "column 4 toggled");
            }
            if ui.button("Reset values").clicked() {
                self.values = [0.0; 4];
                tracing::info!("knob values reset");
            }
        });
    }

    /// Draw the knob columns
    fn draw_columns(&mut self, ui: &mut egui::Ui) {
        let visible_columns = if self.show_last_column { COLUMNS.len() } else { COLUMNS.len() - 1 };
        let mut last_column_ids = Vec::new();

        egui::ScrollArea::both().auto_shrink(false).show(ui, |ui| {
            egui::Frame::none()
                .stroke(theme::outline(theme::border::GRID))
                .inner_margin(theme::GRID_PADDING)
                .show(ui, |ui| {
                    ui.with_layout(Layout::left_to_right(Align::Min), |ui| {
                        for (index, params) in COLUMNS.iter().enumerate().take(visible_columns) {
                            let env = ColumnScope::for_column(index).environment(&self.env);
                            let ids = draw_column(ui, index, params, &mut self.values, &env);
                            if index == COLUMNS.len() - 1 {
                                last_column_ids = ids;
                            }
                        }
                    });
                });
        });

        // A hidden column's knobs are gone; drop their pending expiries.
        if !self.show_last_column {
            for id in self.last_column_ids.drain(..) {
                KnobView::teardown(ui.ctx(), id);
            }
        } else {
            self.last_column_ids = last_column_ids;
        }
    }

    /// Draw the bottom status bar
    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let summary = Param::ALL
                .iter()
                .map(|param| format!("{} {:.2}", param.label(), self.value(*param)))
                .collect::<Vec<_>>()
                .join("  •  ");
            ui.label(RichText::new(summary).color(theme::text::SECONDARY).small());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("Theme: {}", self.theme_name))
                        .color(theme::text::DISABLED)
                        .small(),
                );
            });
        });
    }
}

/// Draw one outlined column of knobs and return their ids.
fn draw_column(
    ui: &mut egui::Ui,
    index: usize,
    params: &[Param],
    values: &mut [f32; 4],
    env: &KnobEnvironment,
) -> Vec<Id> {
    egui::Frame::none()
        .stroke(theme::outline(theme::border::COLUMN))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(format!("Column {}", index + 1)).color(theme::text::PRIMARY));
                params
                    .iter()
                    .map(|param| {
                        egui::Frame::none()
                            .stroke(theme::outline(theme::border::KNOB))
                            .show(ui, |ui| {
                                KnobView::new(param.label(), &mut values[param.index()]).show(ui, env)
                            })
                            .inner
                            .id
                    })
                    .collect::<Vec<Id>>()
            })
            .inner
        })
        .inner
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme on first frame
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        egui::TopBottomPanel::top("toolbar")
            .frame(egui::Frame::none()
                .fill(theme::background::PANEL)
                .inner_margin(egui::Margin::symmetric(0.0, 8.0)))
            .show(ctx, |ui| {
                self.draw_toolbar(ui);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::none()
                .fill(theme::background::PANEL)
                .inner_margin(egui::Margin::symmetric(0.0, 4.0)))
            .show(ctx, |ui| {
                self.draw_status_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::background::MAIN))
            .show(ctx, |ui| {
                self.draw_columns(ui);
            });
    }
}
