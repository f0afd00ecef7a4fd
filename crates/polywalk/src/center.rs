//! Bounding-box centering onto a canvas.

use crate::Point;

/// Target drawing area. The center is `(width/2, height/2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
        }
    }
}

impl Canvas {
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox {
    pub min: Point,
    pub max: Point,
}

impl Bbox {
    /// `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bb = Bbox {
            min: *first,
            max: *first,
        };
        for p in rest {
            bb.min = bb.min.inf(p);
            bb.max = bb.max.sup(p);
        }
        Some(bb)
    }

    #[inline]
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }
}

/// Translate `points` so their bounding-box center lands on the canvas center.
///
/// Returns a new vector; an empty input gives an empty output.
pub fn center_points(points: &[Point], width: f64, height: f64) -> Vec<Point> {
    let Some(bb) = Bbox::from_points(points) else {
        return Vec::new();
    };
    let shift = Canvas { width, height }.center() - bb.center();
    points.iter().map(|p| p + shift).collect()
}
