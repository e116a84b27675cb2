//! Inherited knob styling.
//!
//! A [`KnobEnvironment`] is passed down explicitly through the UI code.
//! A scope that wants different knobs derives a child environment with
//! [`KnobEnvironment::with_style`] or [`KnobEnvironment::with_attributes`]
//! and hands that to its children, so the nearest override wins and
//! everything else falls back to the defaults.

use std::fmt;
use std::sync::Arc;

use super::attributes::KnobAttributes;
use super::style::{DefaultKnobStyle, KnobStyle};

/// Style provider and attributes in effect for a subtree.
#[derive(Clone)]
pub struct KnobEnvironment {
    style: Arc<dyn KnobStyle>,
    attributes: KnobAttributes,
}

impl Default for KnobEnvironment {
    fn default() -> Self {
        Self {
            style: Arc::new(DefaultKnobStyle),
            attributes: KnobAttributes::default(),
        }
    }
}

impl KnobEnvironment {
    pub fn style(&self) -> &dyn KnobStyle {
        self.style.as_ref()
    }

    pub fn attributes(&self) -> &KnobAttributes {
        &self.attributes
    }

    /// Child environment using `style` for its knobs.
    pub fn with_style(&self, style: impl KnobStyle + 'static) -> Self {
        Self {
            style: Arc::new(style),
            attributes: self.attributes.clone(),
        }
    }

    /// Child environment using `attributes` in place of the inherited ones.
    pub fn with_attributes(&self, attributes: KnobAttributes) -> Self {
        Self {
            style: Arc::clone(&self.style),
            attributes,
        }
    }
}

impl fmt::Debug for KnobEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnobEnvironment")
            .field("style", &self.style.name())
            .field("attributes", &self.attributes)
            .finish()
    }
}
