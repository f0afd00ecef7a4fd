//! Gradient descent on side lengths.
//!
//! Plain fixed-rate descent: no momentum, no decay, no length floor unless
//! `SolveCfg::min_length` asks for one. Running out of budget is a normal
//! outcome (`success == false`), reported with the last loss.

use super::gradient::closure_gradient;
use super::types::{SolveCfg, SolveOutcome};
use crate::walk::closure_error;

/// Solve for side lengths that close the walk described by `angles`.
pub fn optimize_side_lengths(angles: &[f64], cfg: SolveCfg) -> SolveOutcome {
    let mut lengths = vec![cfg.initial_length; angles.len()];
    let mut loss = closure_error(angles, &lengths);
    for step in 1..=cfg.iterations {
        let grad = closure_gradient(angles, &lengths, cfg.epsilon);
        for (len, g) in lengths.iter_mut().zip(&grad) {
            *len -= cfg.learning_rate * g;
            if let Some(floor) = cfg.min_length {
                *len = len.max(floor);
            }
        }
        loss = closure_error(angles, &lengths);
        if loss < cfg.tolerance {
            return SolveOutcome {
                lengths,
                success: true,
                loss,
                iterations: step,
            };
        }
    }
    SolveOutcome {
        lengths,
        success: false,
        loss,
        iterations: cfg.iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angles::{generate_angles, AngleSpec};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn square_converges_to_equal_sides() {
        let out = optimize_side_lengths(&[90.0; 4], SolveCfg::default());
        assert!(out.success);
        assert!(out.loss < 1.0);
        let first = out.lengths[0];
        for l in &out.lengths {
            assert!((l - first).abs() < 1e-6);
        }
    }

    #[test]
    fn equiangular_hexagon_converges() {
        let out = optimize_side_lengths(&[120.0; 6], SolveCfg::default());
        assert!(out.success);
        assert!(out.iterations >= 1);
        assert!(out.loss < 1.0);
    }

    #[test]
    fn irregular_quadrilateral_closes() {
        // Turns of 110°, 80°, 100°: the uniform guess is open, descent closes it.
        let angles = [70.0, 100.0, 80.0, 110.0];
        let out = optimize_side_lengths(&angles, SolveCfg::default());
        assert!(out.success, "loss {}", out.loss);
        assert!(closure_error(&angles, &out.lengths) < 1.0);
    }

    #[test]
    fn budget_exhaustion_reports_failure() {
        // Collinear walk: loss = Σ lengths = 240 and drops by 0.3 per step.
        let cfg = SolveCfg {
            iterations: 100,
            ..SolveCfg::default()
        };
        let out = optimize_side_lengths(&[180.0; 3], cfg);
        assert!(!out.success);
        assert_eq!(out.iterations, 100);
        assert!(out.loss >= 1.0);
        assert!((out.loss - 210.0).abs() < 1e-6, "loss {}", out.loss);
    }

    #[test]
    fn length_floor_blocks_closure() {
        // With every length pinned at >= 1 a collinear walk cannot get below 3.
        let cfg = SolveCfg {
            min_length: Some(1.0),
            ..SolveCfg::default()
        };
        let out = optimize_side_lengths(&[180.0; 3], cfg);
        assert!(!out.success);
        assert!(out.loss >= 1.0);
        assert!(out.lengths.iter().all(|&l| l >= 1.0));
    }

    #[test]
    fn unbounded_descent_may_go_non_positive() {
        // Without a floor the collinear walk "closes" by shrinking to ~0.
        let out = optimize_side_lengths(&[180.0; 3], SolveCfg::default());
        assert!(out.success);
        assert!(out.lengths.iter().sum::<f64>().abs() < 1.0);
    }

    #[test]
    fn zero_budget_reports_initial_loss() {
        let cfg = SolveCfg {
            iterations: 0,
            ..SolveCfg::default()
        };
        let out = optimize_side_lengths(&[180.0; 3], cfg);
        assert!(!out.success);
        assert_eq!(out.lengths, vec![80.0; 3]);
        assert!((out.loss - 240.0).abs() < 1e-9);
    }

    #[test]
    fn generated_progression_angles_solve() {
        let spec = AngleSpec {
            sides: 4,
            min_angle: 60,
            max_angle: 120,
            common_diff: 20,
        };
        let angles = generate_angles(&spec, &mut StdRng::seed_from_u64(0)).unwrap();
        let out = optimize_side_lengths(&angles, SolveCfg::default());
        assert!(out.success, "loss {}", out.loss);
    }
}
