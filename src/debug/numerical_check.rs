use ndarray::{ArrayView1, ArrayView2};
use tracing::warn;

use crate::activations::Activation;

/// Types of numerical issues
#[derive(Debug, Clone, PartialEq)]
pub enum NumericalIssue {
    NaN { count: usize },
    Infinity { count: usize },
    /// Strengths pinned at the edge of the activation's range.
    Saturated { count: usize },
}

fn is_saturated(activation: &Activation, strength: f64) -> bool {
    match activation {
        Activation::Logistic => strength <= 0.0 || strength >= 1.0,
        Activation::TanhReluFloor { floor } => strength <= *floor || strength >= 1.0,
        Activation::Softplus => strength <= 0.0,
    }
}

/// Check a strength vector for NaN, infinite or saturated entries
pub fn check_strengths(activation: &Activation, strength: ArrayView1<f64>) -> Vec<NumericalIssue> {
    let mut issues = Vec::new();
    let mut nan_count = 0;
    let mut inf_count = 0;
    let mut saturated_count = 0;

    for &value in strength.iter() {
        if value.is_nan() {
            nan_count += 1;
        } else if value.is_infinite() {
            inf_count += 1;
        } else if is_saturated(activation, value) {
            saturated_count += 1;
        }
    }

    if nan_count > 0 {
        issues.push(NumericalIssue::NaN { count: nan_count });
        warn!(activation = %activation, count = nan_count, "NaN edge strengths");
    }
    if inf_count > 0 {
        issues.push(NumericalIssue::Infinity { count: inf_count });
        warn!(activation = %activation, count = inf_count, "infinite edge strengths");
    }
    if saturated_count > 0 {
        issues.push(NumericalIssue::Saturated { count: saturated_count });
        warn!(activation = %activation, count = saturated_count, "saturated edge strengths");
    }

    issues
}

/// Check a gradient matrix for NaN or infinite entries
pub fn check_gradient(gradient: ArrayView2<f64>) -> Vec<NumericalIssue> {
    let mut issues = Vec::new();
    let nan_count = gradient.iter().filter(|v| v.is_nan()).count();
    let inf_count = gradient.iter().filter(|v| v.is_infinite()).count();

    if nan_count > 0 {
        issues.push(NumericalIssue::NaN { count: nan_count });
        warn!(count = nan_count, "NaN values in strength gradient");
    }
    if inf_count > 0 {
        issues.push(NumericalIssue::Infinity { count: inf_count });
        warn!(count = inf_count, "infinite values in strength gradient");
    }

    issues
}
