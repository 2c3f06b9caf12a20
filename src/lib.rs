//! # Edge Strength - Activations and Gradients for Edge Weighting
//!
//! Computes a scalar "strength" for every edge of a graph from a matrix of edge
//! features and a shared weight vector, together with the gradient of that
//! strength with respect to the weights. These are the building blocks of
//! gradient-based edge-weight learning (for example supervised random walks).
//!
//! ## Key Features
//!
//! - **Activations**: Logistic, tanh with a positive floor, and softplus
//! - **Dense and Sparse Features**: any 2-D `ndarray` or a CSR [`features::SparseFeatures`]
//! - **Pure Kernels**: inputs are never modified and every call allocates its output
//! - **Diagnostics**: finite-difference gradient checks and numerical issue reports
//! - **Persistence**: models serialize with bincode or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use edge_strength::activations::Activation;
//! use edge_strength::model::EdgeStrengthModel;
//! use ndarray::array;
//!
//! let features = array![[1.0, 0.2], [0.0, 3.0], [0.5, 0.5]];
//! let model = EdgeStrengthModel::new(Activation::Softplus, array![0.4, -0.1]).unwrap();
//!
//! let (strength, gradient) = model.strengths_and_gradient(&features).unwrap();
//! assert_eq!(strength.len(), 3);
//! assert_eq!(gradient.dim(), (3, 2));
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation variants and their per-edge gradients
//! - [`debug`] - Gradient checking and numerical diagnostics
//! - [`error`] - Error types and result handling
//! - [`features`] - Dense and sparse feature matrices
//! - [`model`] - Activation plus weights, with persistence

pub mod activations;
pub mod debug;
pub mod error;
pub mod features;
pub mod model;

pub use activations::Activation;
pub use error::{EdgeStrengthError, Result};
pub use features::{FeatureMatrix, SparseFeatures};
pub use model::EdgeStrengthModel;

#[cfg(test)]
mod tests;
