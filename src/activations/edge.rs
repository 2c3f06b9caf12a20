//! Free-function forms of each activation and its gradient.
//!
//! These are thin wrappers over [`Activation`] for callers that pick the
//! activation statically.

use ndarray::{Array1, ArrayView1};

use super::functions::Activation;
use crate::error::Result;
use crate::features::FeatureMatrix;

/// `1 / (1 + exp(-(features · w)))` for every edge.
pub fn logistic_edge_strength<F>(features: &F, w: ArrayView1<f64>) -> Result<Array1<f64>>
where
    F: FeatureMatrix + ?Sized,
{
    Activation::Logistic.strength(features, w)
}

/// `features * s * (1 - s)`, row by row.
pub fn logistic_strength_gradient<F>(features: &F, edge_strength: ArrayView1<f64>) -> Result<F::Scaled>
where
    F: FeatureMatrix + ?Sized,
{
    Activation::Logistic.gradient(features, edge_strength)
}

/// `max(tanh(features · w), 1e-5)` for every edge.
pub fn tanh_edge_strength<F>(features: &F, w: ArrayView1<f64>) -> Result<Array1<f64>>
where
    F: FeatureMatrix + ?Sized,
{
    Activation::tanh_relu_floor().strength(features, w)
}

/// `features * r * (1 - s^2)` with `r = 1` where `s > 0` and `1e-5` elsewhere.
pub fn tanh_strength_gradient<F>(features: &F, strength: ArrayView1<f64>) -> Result<F::Scaled>
where
    F: FeatureMatrix + ?Sized,
{
    Activation::tanh_relu_floor().gradient(features, strength)
}

/// `ln(1 + exp(features · w))` for every edge.
pub fn softplus_edge_strength<F>(features: &F, w: ArrayView1<f64>) -> Result<Array1<f64>>
where
    F: FeatureMatrix + ?Sized,
{
    Activation::Softplus.strength(features, w)
}

/// `features * s / (1 + s)`, row by row.
pub fn softplus_strength_gradient<F>(features: &F, strength: ArrayView1<f64>) -> Result<F::Scaled>
where
    F: FeatureMatrix + ?Sized,
{
    Activation::Softplus.gradient(features, strength)
}
