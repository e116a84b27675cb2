//! Arc Knob - demo screen for the rotary knob control
//!
//! Entry point for the application.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use arc_knob::app::DemoApp;
use arc_knob::knob::{KnobAttributes, KnobEnvironment};
use arc_knob::persistence;

/// Rotary knob demo.
#[derive(Parser, Debug)]
#[command(name = "arc-knob")]
#[command(about = "Columns of rotary arc knobs")]
#[command(version)]
struct Args {
    /// JSON theme file with knob sizes, colors and strokes
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Knob size in points, overriding the theme
    #[arg(long)]
    size: Option<f32>,

    /// Log filter, e.g. "debug" or "arc_knob=trace" (default: RUST_LOG or info)
    #[arg(long)]
    log_level: Option<String>,
}

/// Resolve the root knob environment from the command line.
fn load_environment(args: &Args) -> (KnobEnvironment, String) {
    let (mut attributes, name) = match &args.theme {
        Some(path) => match persistence::load_from_file(path).and_then(|theme| {
            let name = theme.name.clone();
            theme.into_attributes().map(|attributes| (attributes, name))
        }) {
            Ok(loaded) => {
                tracing::info!(path = %path.display(), name = %loaded.1, "theme loaded");
                loaded
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load theme, using defaults");
                (KnobAttributes::default(), "Default".to_string())
            }
        },
        None => (KnobAttributes::default(), "Default".to_string()),
    };

    if let Some(size) = args.size.filter(|size| *size > 0.0) {
        tracing::info!(size, "knob size override");
        attributes = attributes.with_size(size);
    }

    (KnobEnvironment::default().with_attributes(attributes), name)
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Arc Knob demo");
    let (env, theme_name) = load_environment(&args);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 600.0])
            .with_title("Arc Knob"),
        ..Default::default()
    };

    eframe::run_native(
        "Arc Knob",
        options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(env, theme_name)))),
    )
}
