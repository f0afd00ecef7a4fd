//! Interior angle sequences for simple polygons.
//!
//! Model
//! - A polygon with `n` sides has interior angles summing to `(n-2)·180°`.
//! - `common_diff == 0`: random-constrained mode. Angles are drawn left to
//!   right as uniform integers inside the window that still leaves the
//!   remaining slots satisfiable. No backtracking: an empty window fails.
//! - `common_diff != 0`: arithmetic progression `min, min+d, min+2d, …`.
//!   Deterministic; the closed-form sum must match exactly and every term must
//!   lie inside `[min, max]`. Out-of-range terms fail the whole sequence
//!   rather than being clamped, since clamping breaks the sum.
//!
//! Arithmetic is done in `i128` so absurd user input fails cleanly instead of
//! overflowing.

use rand::Rng;
use std::fmt;

/// Inputs for angle generation (degrees).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AngleSpec {
    pub sides: usize,
    pub min_angle: i64,
    pub max_angle: i64,
    /// 0 selects random-constrained mode.
    pub common_diff: i64,
}

impl Default for AngleSpec {
    fn default() -> Self {
        Self {
            sides: 3,
            min_angle: 30,
            max_angle: 150,
            common_diff: 0,
        }
    }
}

impl AngleSpec {
    #[inline]
    pub fn is_progression(&self) -> bool {
        self.common_diff != 0
    }

    fn validate(&self) -> Result<(), AngleError> {
        if self.sides < 3 {
            return Err(AngleError::TooFewSides { sides: self.sides });
        }
        if self.min_angle > self.max_angle {
            return Err(AngleError::InvertedRange {
                min: self.min_angle,
                max: self.max_angle,
            });
        }
        Ok(())
    }
}

/// Why a spec could not produce a valid angle sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AngleError {
    TooFewSides {
        sides: usize,
    },
    InvertedRange {
        min: i64,
        max: i64,
    },
    /// Random mode: no admissible value left for position `index`.
    Infeasible {
        index: usize,
        min_bound: i128,
        max_bound: i128,
    },
    /// Random mode: sum not fully allocated after the last angle.
    Leftover {
        remaining: i128,
    },
    /// Progression mode: closed-form sum differs from `(n-2)·180`.
    ProgressionSum {
        expected: i128,
        actual: i128,
    },
    /// Progression mode: term `index` left `[min, max]`.
    ProgressionOutOfRange {
        index: usize,
        value: i128,
    },
}

impl fmt::Display for AngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSides { sides } => write!(f, "a polygon needs at least 3 sides, got {sides}"),
            Self::InvertedRange { min, max } => {
                write!(f, "minimum angle {min} exceeds maximum angle {max}")
            }
            Self::Infeasible {
                index,
                min_bound,
                max_bound,
            } => write!(
                f,
                "no admissible angle at position {index} (window [{min_bound}, {max_bound}] is empty)"
            ),
            Self::Leftover { remaining } => {
                write!(f, "{remaining} degrees left unallocated after the last angle")
            }
            Self::ProgressionSum { expected, actual } => write!(
                f,
                "arithmetic progression sums to {actual} degrees, expected {expected}"
            ),
            Self::ProgressionOutOfRange { index, value } => write!(
                f,
                "progression term {index} is {value} degrees, outside the allowed range"
            ),
        }
    }
}

impl std::error::Error for AngleError {}

const MAX_PREALLOC: usize = 1024;

/// Required interior angle sum `(n-2)·180` in degrees.
#[inline]
pub fn required_angle_sum(sides: usize) -> i128 {
    (sides as i128 - 2) * 180
}

/// Generate an interior angle sequence (degrees) for `spec`.
///
/// `rng` is only consulted in random-constrained mode; progression mode is a
/// pure function of `spec`.
pub fn generate_angles<R: Rng + ?Sized>(spec: &AngleSpec, rng: &mut R) -> Result<Vec<f64>, AngleError> {
    spec.validate()?;
    if spec.is_progression() {
        progression(spec)
    } else {
        random_constrained(spec, rng)
    }
}

fn random_constrained<R: Rng + ?Sized>(spec: &AngleSpec, rng: &mut R) -> Result<Vec<f64>, AngleError> {
    let n = spec.sides;
    let lo = spec.min_angle as i128;
    let hi = spec.max_angle as i128;
    let mut remaining = required_angle_sum(n);
    // Infeasible side counts fail at index 0; don't reserve for them up front.
    let mut angles = Vec::with_capacity(n.min(MAX_PREALLOC));
    for index in 0..n {
        let slots_after = (n - index - 1) as i128;
        let min_bound = lo.max(remaining - slots_after * hi);
        let max_bound = hi.min(remaining - slots_after * lo);
        if min_bound > max_bound {
            return Err(AngleError::Infeasible {
                index,
                min_bound,
                max_bound,
            });
        }
        let angle = rng.gen_range(min_bound..=max_bound);
        angles.push(angle as f64);
        remaining -= angle;
    }
    if remaining != 0 {
        return Err(AngleError::Leftover { remaining });
    }
    Ok(angles)
}

fn progression(spec: &AngleSpec) -> Result<Vec<f64>, AngleError> {
    let n = spec.sides as i128;
    let a = spec.min_angle as i128;
    let d = spec.common_diff as i128;
    let expected = required_angle_sum(spec.sides);
    // n(n-1)d is always even, so the halved sum is exact. Saturation only
    // kicks in far outside any satisfiable input and still reports a mismatch.
    let actual = n.saturating_mul((n - 1).saturating_mul(d).saturating_add(2 * a)) / 2;
    if actual != expected {
        return Err(AngleError::ProgressionSum { expected, actual });
    }
    let (lo, hi) = (spec.min_angle as i128, spec.max_angle as i128);
    (0..spec.sides)
        .map(|index| {
            let value = a + index as i128 * d;
            if value < lo || value > hi {
                Err(AngleError::ProgressionOutOfRange { index, value })
            } else {
                Ok(value as f64)
            }
        })
        .collect()
}
