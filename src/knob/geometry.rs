//! Arc geometry for the knob gauge.
//!
//! Angles are in degrees, measured clockwise on screen from the positive x
//! axis (egui's y axis points down). The gauge sweeps from 130° through the
//! top of the circle to 410°, leaving a gap at the bottom.

use eframe::egui::{pos2, Pos2, Rect};

/// Angle where both arcs begin.
pub const START_ANGLE_DEG: f32 = 130.0;

/// Angle where the track arc ends (the progress arc at full value).
pub const END_ANGLE_DEG: f32 = 410.0;

/// Distance between the arc and the edge of its bounding box.
pub const ARC_INSET: f32 = 10.0;

/// Maximum angular step between polyline points.
const DEGREES_PER_SEGMENT: f32 = 4.0;

/// End angle of the progress arc for a normalized value fraction.
pub fn progress_end_angle(fraction: f32) -> f32 {
    START_ANGLE_DEG + (END_ANGLE_DEG - START_ANGLE_DEG) * fraction.clamp(0.0, 1.0)
}

/// Point on a circle at `degrees`.
pub fn point_on_circle(center: Pos2, radius: f32, degrees: f32) -> Pos2 {
    let radians = degrees.to_radians();
    pos2(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Arc outline, optionally followed by an indicator line toward the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobShape {
    indicator_fraction: f32,
    start_angle: f32,
    end_angle: f32,
    has_indicator: bool,
}

impl KnobShape {
    /// The full background arc.
    pub fn track(indicator_fraction: f32) -> Self {
        Self {
            indicator_fraction,
            start_angle: START_ANGLE_DEG,
            end_angle: END_ANGLE_DEG,
            has_indicator: false,
        }
    }

    /// The value arc for a normalized `fraction`, ending in an indicator line.
    pub fn progress(indicator_fraction: f32, fraction: f32) -> Self {
        Self {
            indicator_fraction,
            start_angle: START_ANGLE_DEG,
            end_angle: progress_end_angle(fraction),
            has_indicator: true,
        }
    }

    pub fn end_angle(&self) -> f32 {
        self.end_angle
    }

    /// Resolve the shape inside a bounding rectangle.
    pub fn path_in(&self, rect: Rect) -> ArcPath {
        let center = rect.center();
        let radius = (rect.width().min(rect.height()) * 0.5 - ARC_INSET).max(0.0);
        ArcPath {
            center,
            radius,
            start_angle: self.start_angle,
            end_angle: self.end_angle,
            indicator_fraction: self.has_indicator.then_some(self.indicator_fraction),
        }
    }
}

/// A resolved arc in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPath {
    pub center: Pos2,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    /// Indicator length as a fraction of the radius, if the arc has one.
    pub indicator_fraction: Option<f32>,
}

impl ArcPath {
    /// Point where the arc ends.
    pub fn tip(&self) -> Pos2 {
        point_on_circle(self.center, self.radius, self.end_angle)
    }

    /// End point of the indicator line, if the arc has one.
    pub fn indicator_end(&self) -> Option<Pos2> {
        self.indicator_fraction.map(|fraction| {
            let tip = self.tip();
            tip - (tip - self.center) * fraction
        })
    }

    /// Polyline approximating the arc, with the indicator appended.
    pub fn points(&self) -> Vec<Pos2> {
        let sweep = self.end_angle - self.start_angle;
        let segments = (sweep.abs() / DEGREES_PER_SEGMENT).ceil().max(1.0) as usize;

        let mut points: Vec<Pos2> = (0..=segments)
            .map(|i| {
                let t = i as f32 / segments as f32;
                point_on_circle(self.center, self.radius, self.start_angle + sweep * t)
            })
            .collect();

        if let Some(end) = self.indicator_end() {
            points.push(end);
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_progress_end_angle() {
        assert_eq!(progress_end_angle(0.0), 130.0);
        assert_eq!(progress_end_angle(0.5), 270.0);
        assert_eq!(progress_end_angle(1.0), 410.0);
        assert_eq!(progress_end_angle(-1.0), 130.0);
        assert_eq!(progress_end_angle(2.0), 410.0);
    }

    #[test]
    fn test_track_spans_full_sweep() {
        let shape = KnobShape::track(0.3);
        assert_eq!(shape.end_angle(), END_ANGLE_DEG);
        let path = shape.path_in(Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0)));
        assert_eq!(path.indicator_fraction, None);
        assert_eq!(path.indicator_end(), None);
    }

    #[test]
    fn test_radius_uses_smaller_side() {
        let path = KnobShape::track(0.3).path_in(Rect::from_min_size(Pos2::ZERO, vec2(100.0, 80.0)));
        assert_eq!(path.radius, 30.0);
        assert!(close(path.center, pos2(50.0, 40.0)));
    }

    #[test]
    fn test_midpoint_tip_is_at_top() {
        let path = KnobShape::progress(0.3, 0.5)
            .path_in(Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0)));
        assert!(close(path.tip(), pos2(50.0, 10.0)));
    }

    #[test]
    fn test_indicator_points_toward_center() {
        let path = KnobShape::progress(0.3, 0.5)
            .path_in(Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0)));
        // Radius 40, so the indicator covers 12 units downward from the tip.
        let end = path.indicator_end();
        assert!(end.is_some_and(|end| close(end, pos2(50.0, 22.0))));
    }

    #[test]
    fn test_points_follow_arc() {
        let path = KnobShape::progress(0.3, 1.0)
            .path_in(Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0)));
        let points = path.points();
        // 280 degrees in 4 degree segments plus the indicator end.
        assert_eq!(points.len(), 70 + 1 + 1);
        assert!(close(points[0], point_on_circle(path.center, 40.0, 130.0)));
        assert!(close(points[70], path.tip()));
        for point in &points[..=70] {
            assert!(((*point - path.center).length() - 40.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_empty_progress_still_has_indicator() {
        let path = KnobShape::progress(0.3, 0.0)
            .path_in(Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0)));
        let points = path.points();
        assert_eq!(points.len(), 3);
        assert!(close(points[0], points[1]));
    }
}
