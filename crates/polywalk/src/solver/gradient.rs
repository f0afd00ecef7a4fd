use crate::walk::closure_error;

/// Forward-difference gradient of the closure error w.r.t. each side length.
///
/// Each partial perturbs one entry of a private copy by `epsilon`; the
/// caller's `lengths` are never touched. Costs `n + 1` walks, `O(n²)` total.
pub fn closure_gradient(angles: &[f64], lengths: &[f64], epsilon: f64) -> Vec<f64> {
    let base = closure_error(angles, lengths);
    let mut probe = lengths.to_vec();
    (0..lengths.len())
        .map(|i| {
            probe[i] = lengths[i] + epsilon;
            let loss = closure_error(angles, &probe);
            probe[i] = lengths[i];
            (loss - base) / epsilon
        })
        .collect()
}
