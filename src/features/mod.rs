//! # Feature Matrices
//!
//! Edge features arrive as an (E, W) matrix: one row per edge, one column per
//! feature. The activations in this crate only ever need two things from such a
//! matrix:
//!
//! - a product with a weight vector of length W, giving one value per edge
//! - an element-wise multiply that broadcasts one scalar across each row
//!
//! [`FeatureMatrix`] captures exactly that capability so dense `ndarray` matrices
//! and the CSR [`SparseFeatures`] can be used interchangeably.
//!
//! ## Usage Example
//!
//! ```rust
//! use edge_strength::features::{FeatureMatrix, SparseFeatures};
//! use ndarray::array;
//!
//! let dense = array![[1.0, 0.0], [0.0, 2.0]];
//! let sparse = SparseFeatures::from_dense(dense.view());
//! let weights = array![0.5, 0.25];
//!
//! assert_eq!(dense.dot_weights(weights.view()).unwrap(), sparse.dot_weights(weights.view()).unwrap());
//! ```
//!
//! Implementations never mutate their inputs; every call returns new storage.

pub mod dense;
pub mod sparse;

pub use sparse::SparseFeatures;

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use crate::error::{EdgeStrengthError, Result};

/// A per-edge feature matrix of shape (E, W).
pub trait FeatureMatrix {
    /// Matrix type produced by [`FeatureMatrix::scale_rows`].
    type Scaled;

    /// Number of edges (rows).
    fn num_edges(&self) -> usize;

    /// Number of features per edge (columns).
    fn num_features(&self) -> usize;

    /// Multiply the matrix by a weight vector, yielding one value per edge.
    fn dot_weights(&self, weights: ArrayView1<f64>) -> Result<Array1<f64>>;

    /// Multiply every entry of row `i` by `scalars[i]`.
    fn scale_rows(&self, scalars: ArrayView1<f64>) -> Result<Self::Scaled>;

    /// (E, W)
    fn dims(&self) -> (usize, usize) {
        (self.num_edges(), self.num_features())
    }
}

pub(crate) fn check_weights(dims: (usize, usize), weights_len: usize) -> Result<()> {
    if dims.1 != weights_len {
        return Err(EdgeStrengthError::dimension_mismatch(
            format!("weights of length {} for features {:?}", dims.1, dims),
            format!("weights of length {}", weights_len),
        ));
    }
    Ok(())
}

pub(crate) fn check_row_scalars(dims: (usize, usize), scalars_len: usize) -> Result<()> {
    if dims.0 != scalars_len {
        return Err(EdgeStrengthError::dimension_mismatch(
            format!("{} per-edge values for features {:?}", dims.0, dims),
            format!("{} per-edge values", scalars_len),
        ));
    }
    Ok(())
}

/// View an (E, 1) strength column as an (E,) vector.
pub fn strength_from_column(strength: ArrayView2<'_, f64>) -> Result<ArrayView1<'_, f64>> {
    if strength.ncols() != 1 {
        return Err(EdgeStrengthError::dimension_mismatch(
            format!("strength of shape ({}, 1)", strength.nrows()),
            format!("strength of shape {:?}", strength.dim()),
        ));
    }
    Ok(strength.index_axis_move(Axis(1), 0))
}
