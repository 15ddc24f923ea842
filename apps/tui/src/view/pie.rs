//! Pie layout: angular spans proportional to counts, plus centroid math for
//! slice labels. Angles are radians clockwise from twelve o'clock, converted
//! to canvas coordinates only at the edge.

use crate::domain::YearCount;

pub const TAU: f64 = 2.0 * std::f64::consts::PI;

/// Outer radius factor for an emphasized (hovered or locked) slice,
/// relative to the base radius.
pub const EMPHASIS_FACTOR: f64 = 1.06;

/// Labels sit at the centroid of the un-enlarged slice: half the base
/// radius along the mid angle.
pub const CENTROID_FACTOR: f64 = 0.5;

/// Angular span of one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start: f64,
    pub end: f64,
}

impl Arc {
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    pub fn mid_angle(self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// One arc per aggregate, in input order, spans proportional to count.
/// Covers the full turn whenever the input is non-empty.
pub fn layout(counts: &[YearCount]) -> Vec<Arc> {
    let total: usize = counts.iter().map(|entry| entry.count).sum();
    if total == 0 {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let total = total as f64;

    let mut start = 0.0;
    counts
        .iter()
        .map(|entry| {
            #[allow(clippy::cast_precision_loss)]
            let span = (entry.count as f64 / total) * TAU;
            let arc = Arc {
                start,
                end: start + span,
            };
            start = arc.end;
            arc
        })
        .collect()
}

/// Converts a clockwise-from-top angle and radius into canvas coordinates
/// (x right, y up, origin at the pie center).
pub fn point_at(angle: f64, radius: f64) -> (f64, f64) {
    let theta = std::f64::consts::FRAC_PI_2 - angle;
    (theta.cos() * radius, theta.sin() * radius)
}

/// Label anchor for a slice. Always computed against the base radius so the
/// label stays put when the slice itself is enlarged.
pub fn centroid(arc: Arc, base_radius: f64) -> (f64, f64) {
    point_at(arc.mid_angle(), base_radius * CENTROID_FACTOR)
}
