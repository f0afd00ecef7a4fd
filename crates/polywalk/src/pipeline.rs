//! End-to-end render: raw parameters → centered polygon or a user-facing failure.
//!
//! Flow
//! - `PolygonParams` normalizes the four user inputs (leading-integer parse,
//!   default on absent/non-numeric/zero).
//! - `render_polygon` runs generation → optimization → walk → centering.
//!
//! Both failure kinds are ordinary values (`PolygonError`); callers surface
//! the `Display` text and skip drawing.

use rand::Rng;
use std::fmt;

use crate::angles::{generate_angles, AngleError, AngleSpec};
use crate::center::{center_points, Canvas};
use crate::solver::{optimize_side_lengths, SolveCfg};
use crate::walk::walk_points;
use crate::Point;

/// User-facing polygon parameters (degrees).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolygonParams {
    pub sides: i64,
    pub min_angle: i64,
    pub max_angle: i64,
    pub common_diff: i64,
}

impl Default for PolygonParams {
    fn default() -> Self {
        Self {
            sides: 3,
            min_angle: 30,
            max_angle: 150,
            common_diff: 0,
        }
    }
}

impl PolygonParams {
    /// Build from raw text fields; each falls back to its default when absent,
    /// non-numeric, or zero.
    pub fn from_raw(
        sides: Option<&str>,
        min_angle: Option<&str>,
        max_angle: Option<&str>,
        common_diff: Option<&str>,
    ) -> Self {
        let d = Self::default();
        Self {
            sides: parse_int_or(sides, d.sides),
            min_angle: parse_int_or(min_angle, d.min_angle),
            max_angle: parse_int_or(max_angle, d.max_angle),
            common_diff: parse_int_or(common_diff, d.common_diff),
        }
    }

    /// Negative side counts map to 0 and are rejected by generation.
    pub fn angle_spec(&self) -> AngleSpec {
        AngleSpec {
            sides: usize::try_from(self.sides).unwrap_or(0),
            min_angle: self.min_angle,
            max_angle: self.max_angle,
            common_diff: self.common_diff,
        }
    }
}

/// Leading-integer parse: optional whitespace, optional sign, digits; trailing
/// text is ignored (`"12px"` → 12, `"3.9"` → 3). No digits, overflow, or a
/// zero result yield `default`.
pub fn parse_int_or(raw: Option<&str>, default: i64) -> i64 {
    let Some(s) = raw.map(str::trim_start) else {
        return default;
    };
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return default;
    }
    match s[..sign_len + digits].parse::<i64>() {
        Ok(0) | Err(_) => default,
        Ok(v) => v,
    }
}

/// A polygon ready to stroke: `points` is centered and has `n + 1` entries.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedPolygon {
    pub angles: Vec<f64>,
    pub lengths: Vec<f64>,
    pub points: Vec<Point>,
    pub loss: f64,
    pub iterations: usize,
}

/// The two recoverable render failures.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// No angle sequence satisfies the parameters.
    Angles {
        sides: i64,
        required_sum: i128,
        source: AngleError,
    },
    /// Optimization ran out of budget before the walk closed.
    Closure { loss: f64, iterations: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Angles {
                sides,
                required_sum,
                source,
            } => write!(
                f,
                "could not generate valid angles for {sides} sides: they must sum to {required_sum} degrees ({source})"
            ),
            Self::Closure { loss, iterations } => write!(
                f,
                "could not close the polygon: closure error {loss:.2} after {iterations} iterations"
            ),
        }
    }
}

impl std::error::Error for PolygonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Angles { source, .. } => Some(source),
            Self::Closure { .. } => None,
        }
    }
}

impl PolygonError {
    /// Angle failure for `params`, carrying the `(sides-2)·180` sum the user must hit.
    pub fn angles(params: &PolygonParams, source: AngleError) -> Self {
        Self::Angles {
            sides: params.sides,
            required_sum: (params.sides as i128 - 2) * 180,
            source,
        }
    }
}

/// Generation stage alone, with the failure mapped to its user-facing form.
pub fn polygon_angles<R: Rng + ?Sized>(
    params: &PolygonParams,
    rng: &mut R,
) -> Result<Vec<f64>, PolygonError> {
    generate_angles(&params.angle_spec(), rng).map_err(|source| PolygonError::angles(params, source))
}

/// Generate angles, solve side lengths, walk, and center on `canvas`.
pub fn render_polygon<R: Rng + ?Sized>(
    params: &PolygonParams,
    canvas: Canvas,
    cfg: SolveCfg,
    rng: &mut R,
) -> Result<RenderedPolygon, PolygonError> {
    let angles = polygon_angles(params, rng)?;
    let solved = optimize_side_lengths(&angles, cfg);
    if !solved.success {
        return Err(PolygonError::Closure {
            loss: solved.loss,
            iterations: solved.iterations,
        });
    }
    let raw = walk_points(&angles, &solved.lengths);
    let points = center_points(&raw, canvas.width, canvas.height);
    Ok(RenderedPolygon {
        angles,
        lengths: solved.lengths,
        points,
        loss: solved.loss,
        iterations: solved.iterations,
    })
}
