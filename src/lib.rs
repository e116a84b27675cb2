//! Arc Knob Library
//!
//! A customizable rotary knob control for egui, plus the demo application
//! that arranges several knobs in columns.

pub mod app;
pub mod knob;
pub mod persistence;
