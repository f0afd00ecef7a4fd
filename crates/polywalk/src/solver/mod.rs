//! Side-length solver: make the turtle walk close.
//!
//! - `gradient`: forward finite differences of the closure error.
//! - `optimize`: plain gradient descent from a uniform initial guess.
//!
//! Both treat the angle sequence as read-only input.

mod gradient;
mod optimize;
mod types;

pub use gradient::closure_gradient;
pub use optimize::optimize_side_lengths;
pub use types::{SolveCfg, SolveOutcome};
