//! Turtle walk over an interior-angle sequence.
//!
//! The walk starts at the origin facing +x. Edge `i` advances `lengths[i]`
//! along the current heading, then the heading turns by the exterior angle
//! `π − angles[i]` (degrees converted to radians). The final turn never
//! affects the path; it only closes the heading loop.
//!
//! `walk_endpoint` and `walk_points` share `Turtle::step`, so the endpoint is
//! bit-identical to the last recorded point.

use std::f64::consts::PI;

use crate::Point;

/// Position and heading (radians) of a walk in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Turtle {
    pub pos: Point,
    pub heading: f64,
}

impl Default for Turtle {
    fn default() -> Self {
        Self {
            pos: Point::zeros(),
            heading: 0.0,
        }
    }
}

impl Turtle {
    /// Advance `length` along the heading, then turn by the exterior angle of
    /// `interior_deg`. Returns the new position.
    #[inline]
    pub fn step(&mut self, length: f64, interior_deg: f64) -> Point {
        self.pos.x += length * self.heading.cos();
        self.pos.y += length * self.heading.sin();
        self.heading += PI - interior_deg * PI / 180.0;
        self.pos
    }
}

/// Final position of the walk.
pub fn walk_endpoint(angles: &[f64], lengths: &[f64]) -> Point {
    debug_assert_eq!(angles.len(), lengths.len(), "one length per angle");
    let mut t = Turtle::default();
    for (&len, &ang) in lengths.iter().zip(angles) {
        t.step(len, ang);
    }
    t.pos
}

/// Full path: the origin followed by the position after each edge (`n + 1` points).
pub fn walk_points(angles: &[f64], lengths: &[f64]) -> Vec<Point> {
    debug_assert_eq!(angles.len(), lengths.len(), "one length per angle");
    let mut t = Turtle::default();
    let mut pts = Vec::with_capacity(angles.len() + 1);
    pts.push(t.pos);
    pts.extend(lengths.iter().zip(angles).map(|(&len, &ang)| t.step(len, ang)));
    pts
}

/// Closure error: distance from the walk's endpoint back to the origin.
#[inline]
pub fn closure_error(angles: &[f64], lengths: &[f64]) -> f64 {
    walk_endpoint(angles, lengths).norm()
}
