//! Persistence module
//!
//! Knob theme save/load using serde and JSON.

pub mod theme;

pub use theme::{load_from_file, save_to_file, KnobTheme, ThemeError, MAX_VALUE_DECIMALS, THEME_VERSION};
