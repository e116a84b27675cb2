//! Rotary arc knob control.
//!
//! [`KnobView`] binds a host-owned `f32` to a drag-driven arc gauge.
//! Vertical drags change the value, horizontal distance from the drag start
//! slows it down, and the caption shows the formatted value while the knob
//! is in use.

pub mod attributes;
pub mod display;
pub mod environment;
pub mod geometry;
pub mod gesture;
pub mod range;
pub mod style;
pub mod widget;

pub use attributes::{KnobAttributes, KnobCaption, KnobStroke, LineCap, LineJoin};
pub use display::DisplayState;
pub use environment::KnobEnvironment;
pub use gesture::DragPhase;
pub use range::KnobRange;
pub use style::{DefaultKnobStyle, KnobConfig, KnobScene, KnobStyle};
pub use widget::{interact, KnobInteraction, KnobView};
