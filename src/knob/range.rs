//! Value range for a knob.

use std::ops::RangeInclusive;

/// Inclusive `(min, max)` bounds for a knob value.
///
/// `min < max` is assumed; it is only checked in debug builds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobRange {
    min: f32,
    max: f32,
}

impl KnobRange {
    /// Create a range from explicit bounds.
    pub fn new(min: f32, max: f32) -> Self {
        debug_assert!(min < max, "knob range requires min < max ({min} >= {max})");
        Self { min, max }
    }

    /// Lower bound.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Distance between the bounds.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Clamp a value into the range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Position of `value` within the range, 0.0 at `min` and 1.0 at `max`.
    pub fn fraction(&self, value: f32) -> f32 {
        ((self.clamp(value) - self.min) / self.span()).clamp(0.0, 1.0)
    }
}

impl Default for KnobRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl From<RangeInclusive<f32>> for KnobRange {
    fn from(range: RangeInclusive<f32>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_is_unit() {
        let range = KnobRange::default();
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 1.0);
        assert_eq!(range.span(), 1.0);
    }

    #[test]
    fn test_clamp() {
        let range = KnobRange::new(-2.0, 6.0);
        assert_eq!(range.clamp(-10.0), -2.0);
        assert_eq!(range.clamp(10.0), 6.0);
        assert_eq!(range.clamp(1.5), 1.5);
    }

    #[test]
    fn test_fraction() {
        let range = KnobRange::from(20.0..=120.0);
        assert!((range.fraction(20.0)).abs() < f32::EPSILON);
        assert!((range.fraction(70.0) - 0.5).abs() < f32::EPSILON);
        assert!((range.fraction(120.0) - 1.0).abs() < f32::EPSILON);
        assert!((range.fraction(500.0) - 1.0).abs() < f32::EPSILON);
    }
}
