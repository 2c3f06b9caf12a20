use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use tracing::debug;

use crate::activations::Activation;
use crate::error::{EdgeStrengthError, Result};
use crate::features::FeatureMatrix;

/// Centred finite-difference estimate of `d(strength)/dw`, shape (E, W).
pub fn finite_difference_gradient<F>(
    activation: &Activation,
    features: &F,
    weights: ArrayView1<f64>,
    epsilon: f64,
) -> Result<Array2<f64>>
where
    F: FeatureMatrix + ?Sized,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(EdgeStrengthError::invalid_parameter(
            "epsilon".to_string(),
            format!("must be positive and finite, got {}", epsilon),
        ));
    }

    let mut numerical = Array2::zeros(features.dims());
    let mut shifted = weights.to_owned();

    for j in 0..weights.len() {
        shifted[j] = weights[j] + epsilon;
        let plus = activation.strength(features, shifted.view())?;
        shifted[j] = weights[j] - epsilon;
        let minus = activation.strength(features, shifted.view())?;
        shifted[j] = weights[j];

        let column = (&plus - &minus) / (2.0 * epsilon);
        numerical.index_axis_mut(Axis(1), j).assign(&column);
    }

    Ok(numerical)
}

/// Largest absolute difference between the analytic gradient and its
/// finite-difference estimate.
pub fn gradient_check<F>(
    activation: &Activation,
    features: &F,
    weights: ArrayView1<f64>,
    epsilon: f64,
) -> Result<f64>
where
    F: FeatureMatrix<Scaled = Array2<f64>> + ?Sized,
{
    let strength = activation.strength(features, weights)?;
    let analytic = activation.gradient(features, strength.view())?;
    let numerical = finite_difference_gradient(activation, features, weights, epsilon)?;

    let max_error = analytic
        .iter()
        .zip(numerical.iter())
        .map(|(a, n)| (a - n).abs())
        .fold(0.0f64, f64::max);
    debug!(activation = %activation, max_error, epsilon, "gradient check");
    Ok(max_error)
}

/// Frobenius norm of a gradient matrix
pub fn gradient_norm(gradient: ArrayView2<f64>) -> f64 {
    gradient.iter().map(|&x| x * x).sum::<f64>().sqrt()
}

/// (mean, std, min, max) over all entries of a gradient matrix
pub fn gradient_stats(gradient: ArrayView2<f64>) -> (f64, f64, f64, f64) {
    if gradient.is_empty() {
        return (0.0, 0.0, 0.0, 0.0);
    }
    let n = gradient.len() as f64;
    let mean = gradient.sum() / n;
    let std = (gradient.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
    let min = gradient.iter().copied().fold(f64::INFINITY, f64::min);
    let max = gradient.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (mean, std, min, max)
}
