use ndarray::array;
use crate::activations::Activation;
use crate::features::{FeatureMatrix, SparseFeatures};

#[test]
fn test_dense_dims() {
    let features = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    assert_eq!(features.dims(), (2, 3));
    assert_eq!(features.num_edges(), 2);
    assert_eq!(features.num_features(), 3);
}

#[test]
fn test_dense_scale_rows() {
    let features = array![[1.0, 2.0], [3.0, 4.0]];
    let scaled = features.scale_rows(array![2.0, -1.0].view()).unwrap();
    assert_eq!(scaled, array![[2.0, 4.0], [-3.0, -4.0]]);
}

#[test]
fn test_sparse_matches_dense_for_every_activation() {
    let dense = array![
        [0.0, 1.0, 0.0, -0.5],
        [2.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.3, 0.3, 0.3, 0.3],
    ];
    let sparse = SparseFeatures::from_dense(dense.view());
    assert_eq!(sparse.dims(), (4, 4));
    let w = array![0.4, -0.8, 1.2, 0.1];

    for activation in [Activation::Logistic, Activation::tanh_relu_floor(), Activation::Softplus] {
        let dense_strength = activation.strength(&dense, w.view()).unwrap();
        let sparse_strength = activation.strength(&sparse, w.view()).unwrap();
        for (d, s) in dense_strength.iter().zip(sparse_strength.iter()) {
            assert!((d - s).abs() < 1e-12);
        }

        let dense_grad = activation.gradient(&dense, dense_strength.view()).unwrap();
        let sparse_grad = activation.gradient(&sparse, dense_strength.view()).unwrap();
        assert_eq!(sparse_grad.to_dense(), dense_grad);
        assert_eq!(sparse_grad.nnz(), sparse.nnz());
    }
}
