//! Solver configuration and result.

/// Solver knobs (step sizes, budget, tolerance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveCfg {
    /// Maximum number of descent steps.
    pub iterations: usize,
    pub learning_rate: f64,
    /// Forward-difference step for the gradient.
    pub epsilon: f64,
    /// Success threshold on the closure error (strict `<`).
    pub tolerance: f64,
    /// Uniform starting length for every edge.
    pub initial_length: f64,
    /// Optional floor applied after each step. `None` lets lengths go
    /// non-positive.
    pub min_length: Option<f64>,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            learning_rate: 0.1,
            epsilon: 0.01,
            tolerance: 1.0,
            initial_length: 80.0,
            min_length: None,
        }
    }
}

/// Best-effort side lengths plus the closure error they reach.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveOutcome {
    pub lengths: Vec<f64>,
    /// `loss < tolerance` was reached within the budget.
    pub success: bool,
    pub loss: f64,
    /// Descent steps actually taken.
    pub iterations: usize,
}
