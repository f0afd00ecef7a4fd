//! Polygons from angle sequences.
//!
//! Pipeline
//! - `angles`: interior angle sequences summing to `(n-2)·180` degrees, either
//!   random within bounds or an arithmetic progression.
//! - `walk`: turtle walk over (angles, lengths), endpoint and full path.
//! - `solver`: finite-difference gradient and gradient descent on side lengths
//!   until the walk closes.
//! - `center`: bounding-box centering onto a target canvas.
//! - `pipeline`: glue from raw parameters to centered points or a user-facing
//!   failure.
//!
//! All routines are synchronous and pure apart from the injected RNG used by
//! random angle generation.

pub mod angles;
pub mod api;
pub mod center;
pub mod pipeline;
pub mod solver;
pub mod walk;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 2D point/vector type used throughout.
pub type Point = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angles::{generate_angles, required_angle_sum, AngleError, AngleSpec};
    pub use crate::center::{center_points, Bbox, Canvas};
    pub use crate::pipeline::{polygon_angles, render_polygon, PolygonError, PolygonParams, RenderedPolygon};
    pub use crate::solver::{closure_gradient, optimize_side_lengths, SolveCfg, SolveOutcome};
    pub use crate::walk::{closure_error, walk_endpoint, walk_points};
    pub use crate::Point;
}
