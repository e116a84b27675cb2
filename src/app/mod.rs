//! Application module
//!
//! Contains the knob demo application, an alternate knob style, and theme definitions.

pub mod demo_app;
pub mod needle_style;
pub mod theme;

pub use demo_app::DemoApp;
pub use needle_style::NeedleKnobStyle;
