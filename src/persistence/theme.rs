//! Knob theme files.
//!
//! A theme captures the serializable part of [`KnobAttributes`]: sizes,
//! colors, strokes, drag sensitivity and a simple value format. Colors are
//! stored as `#RRGGBB` or `#RRGGBBAA` hex strings.

use std::path::Path;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::knob::{KnobAttributes, KnobStroke, LineCap, LineJoin};

/// Current theme format version.
/// Increment this when making breaking changes to the format.
pub const THEME_VERSION: u32 = 1;

/// Most decimal places a theme may request for the value overlay.
pub const MAX_VALUE_DECIMALS: usize = 9;

/// Error type for theme operations.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Incompatible theme version: found {found}, expected <= {expected}")]
    IncompatibleVersion { found: u32, expected: u32 },
    #[error("Invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
    #[error("Too many value decimals: found {found}, expected <= {max}")]
    TooManyDecimals { found: usize, max: usize },
}

/// Serialized stroke style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeTheme {
    pub width: f32,
    #[serde(default)]
    pub cap: LineCap,
    #[serde(default)]
    pub join: LineJoin,
}

impl From<KnobStroke> for StrokeTheme {
    fn from(stroke: KnobStroke) -> Self {
        Self {
            width: stroke.width,
            cap: stroke.cap,
            join: stroke.join,
        }
    }
}

impl From<StrokeTheme> for KnobStroke {
    fn from(stroke: StrokeTheme) -> Self {
        Self {
            width: stroke.width,
            cap: stroke.cap,
            join: stroke.join,
        }
    }
}

/// A named, versioned set of knob attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnobTheme {
    /// Human-readable name for the theme.
    pub name: String,
    /// Theme format version for future compatibility.
    pub version: u32,
    pub size: f32,
    pub track_color: String,
    pub track_stroke: StrokeTheme,
    pub progress_color: String,
    pub progress_stroke: StrokeTheme,
    pub indicator_fraction: f32,
    pub tracking_sensitivity: f32,
    /// Decimal places in the value overlay.
    pub value_decimals: usize,
    /// Text appended to the formatted value.
    pub value_suffix: String,
}

impl Default for KnobTheme {
    fn default() -> Self {
        let mut theme = Self::from_attributes("Default", &KnobAttributes::default());
        theme.value_decimals = 2;
        theme.value_suffix = "s".to_string();
        theme
    }
}

impl KnobTheme {
    /// Capture the serializable fields of `attributes`.
    ///
    /// Closures cannot be stored, so the value format falls back to plain
    /// decimals with no suffix; adjust `value_decimals` and `value_suffix`
    /// afterwards if needed.
    pub fn from_attributes(name: impl Into<String>, attributes: &KnobAttributes) -> Self {
        Self {
            name: name.into(),
            version: THEME_VERSION,
            size: attributes.size,
            track_color: color_to_hex(attributes.track_color),
            track_stroke: attributes.track_stroke.into(),
            progress_color: color_to_hex(attributes.progress_color),
            progress_stroke: attributes.progress_stroke.into(),
            indicator_fraction: attributes.indicator_fraction,
            tracking_sensitivity: attributes.tracking_sensitivity,
            value_decimals: 2,
            value_suffix: String::new(),
        }
    }

    /// Check if this theme version is compatible with the current format.
    pub fn is_compatible(&self) -> bool {
        self.version <= THEME_VERSION
    }

    /// Check ranges of the numeric fields.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let positive = [
            ("size", self.size),
            ("track_stroke.width", self.track_stroke.width),
            ("progress_stroke.width", self.progress_stroke.width),
            ("tracking_sensitivity", self.tracking_sensitivity),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ThemeError::InvalidValue { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.indicator_fraction) {
            return Err(ThemeError::InvalidValue {
                field: "indicator_fraction",
                value: self.indicator_fraction,
            });
        }
        if self.value_decimals > MAX_VALUE_DECIMALS {
            return Err(ThemeError::TooManyDecimals {
                found: self.value_decimals,
                max: MAX_VALUE_DECIMALS,
            });
        }
        Ok(())
    }

    /// Build knob attributes from this theme.
    pub fn into_attributes(self) -> Result<KnobAttributes, ThemeError> {
        self.validate()?;
        let track_color = parse_hex_color(&self.track_color)?;
        let progress_color = parse_hex_color(&self.progress_color)?;
        let decimals = self.value_decimals;
        let suffix = self.value_suffix;

        Ok(KnobAttributes::default()
            .with_size(self.size)
            .with_track_color(track_color)
            .with_track_stroke(self.track_stroke.into())
            .with_progress_color(progress_color)
            .with_progress_stroke(self.progress_stroke.into())
            .with_indicator_fraction(self.indicator_fraction)
            .with_tracking_sensitivity(self.tracking_sensitivity)
            .with_value_formatter(move |value| format!("{:.prec$}{}", value, suffix, prec = decimals)))
    }
}

/// Format a color as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
pub fn color_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` color.
pub fn parse_hex_color(text: &str) -> Result<Color32, ThemeError> {
    let invalid = || ThemeError::InvalidColor(text.to_string());
    let digits = text.strip_prefix('#').ok_or_else(invalid)?;
    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if digits.len() == 8 { channel(6)? } else { u8::MAX };
    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}

/// Save a theme to a JSON file.
pub fn save_to_file(theme: &KnobTheme, path: &Path) -> Result<(), ThemeError> {
    let json = serde_json::to_string_pretty(theme)?;
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), name = %theme.name, "theme saved");
    Ok(())
}

/// Load a theme from a JSON file.
pub fn load_from_file(path: &Path) -> Result<KnobTheme, ThemeError> {
    let json = std::fs::read_to_string(path)?;
    let theme: KnobTheme = serde_json::from_str(&json)?;

    if !theme.is_compatible() {
        return Err(ThemeError::IncompatibleVersion {
            found: theme.version,
            expected: THEME_VERSION,
        });
    }
    theme.validate()?;

    tracing::debug!(path = %path.display(), name = %theme.name, "theme loaded");
    Ok(theme)
}
