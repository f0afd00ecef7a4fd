//! Curated re-exports for callers that want one flat import path.
//!
//! The module tree stays the source of truth; this only groups names by stage.

// Angle generation
pub use crate::angles::{generate_angles, required_angle_sum, AngleError, AngleSpec};
// Turtle walk
pub use crate::walk::{closure_error, walk_endpoint, walk_points, Turtle};
// Side-length solver
pub use crate::solver::{closure_gradient, optimize_side_lengths, SolveCfg, SolveOutcome};
// Centering and end-to-end rendering
pub use crate::center::{center_points, Bbox, Canvas};
pub use crate::pipeline::{
    parse_int_or, polygon_angles, render_polygon, PolygonError, PolygonParams, RenderedPolygon,
};
