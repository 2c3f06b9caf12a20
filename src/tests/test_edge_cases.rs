use ndarray::{array, Array1, Array2};
use crate::activations::Activation;
use crate::error::EdgeStrengthError;
use crate::features::{strength_from_column, SparseFeatures};

fn all_activations() -> Vec<Activation> {
    vec![Activation::Logistic, Activation::tanh_relu_floor(), Activation::Softplus]
}

#[test]
fn test_weight_length_mismatch() {
    let features = array![[1.0, 2.0, 3.0]];
    let w = array![1.0, 2.0];
    for activation in all_activations() {
        let err = activation.strength(&features, w.view()).unwrap_err();
        assert!(matches!(err, EdgeStrengthError::DimensionMismatch { .. }), "{:?}", activation);

        let sparse = SparseFeatures::from_dense(features.view());
        assert!(activation.strength(&sparse, w.view()).is_err());
    }
}

#[test]
fn test_strength_length_mismatch() {
    let features = array![[1.0, 2.0], [3.0, 4.0]];
    let strength = array![0.5, 0.5, 0.5];
    for activation in all_activations() {
        let err = activation.gradient(&features, strength.view()).unwrap_err();
        assert!(matches!(err, EdgeStrengthError::DimensionMismatch { .. }));
    }
}

#[test]
fn test_extreme_dot_products_saturate() {
    let features = array![[1000.0], [-1000.0]];
    let w = array![1.0];

    let logistic = Activation::Logistic.strength(&features, w.view()).unwrap();
    assert_eq!(logistic, array![1.0, 0.0]);

    let tanh = Activation::tanh_relu_floor().strength(&features, w.view()).unwrap();
    assert_eq!(tanh, array![1.0, 1e-5]);

    let softplus = Activation::Softplus.strength(&features, w.view()).unwrap();
    assert!(softplus[0].is_infinite());
    assert_eq!(softplus[1], 0.0);
}

#[test]
fn test_empty_inputs() {
    let features = Array2::<f64>::zeros((0, 3));
    let w = array![1.0, 2.0, 3.0];
    for activation in all_activations() {
        let strength = activation.strength(&features, w.view()).unwrap();
        assert_eq!(strength.len(), 0);
        let grad = activation.gradient(&features, strength.view()).unwrap();
        assert_eq!(grad.dim(), (0, 3));
    }
}

#[test]
fn test_inputs_untouched_and_calls_repeatable() {
    let features = array![[0.3, -1.0], [2.0, 0.1], [-0.7, 0.4]];
    let w = array![0.9, -0.2];
    let features_before = features.clone();
    let w_before = w.clone();

    for activation in all_activations() {
        let first = activation.strength(&features, w.view()).unwrap();
        let second = activation.strength(&features, w.view()).unwrap();
        assert_eq!(first, second);

        let strength_before = first.clone();
        let grad_first = activation.gradient(&features, first.view()).unwrap();
        let grad_second = activation.gradient(&features, first.view()).unwrap();
        assert_eq!(grad_first, grad_second);
        assert_eq!(first, strength_before);
    }

    assert_eq!(features, features_before);
    assert_eq!(w, w_before);
}

#[test]
fn test_column_strength_accepted() {
    let features = array![[1.0, 2.0], [3.0, 4.0]];
    let column = array![[0.5], [0.25]];
    let strength = strength_from_column(column.view()).unwrap();
    let grad = Activation::Logistic.gradient(&features, strength).unwrap();
    assert_eq!(grad, array![[0.25, 0.5], [0.5625, 0.75]]);

    let wide = array![[0.5, 0.5]];
    assert!(strength_from_column(wide.view()).is_err());
}

#[test]
fn test_views_work_as_features() {
    let owned = array![[1.0, 0.0, 2.0], [0.5, 0.5, 0.5]];
    let view = owned.slice(ndarray::s![.., ..2]);
    let w = array![1.0, -1.0];
    let strength: Array1<f64> = Activation::Softplus.strength(&view, w.view()).unwrap();
    assert_eq!(strength.len(), 2);
    assert_eq!(Activation::Softplus.gradient(&view, strength.view()).unwrap().dim(), (2, 2));
}
