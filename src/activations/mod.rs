//! # Edge Strength Activations
//!
//! Each edge of a graph gets a scalar "strength" computed from its feature row
//! `x` and a shared weight vector `w`: `strength = f(x · w)`. Gradient-based weight
//! learning also needs `d(strength)/dw`, which for every activation here has the
//! form `features * slope(strength)` with the per-edge slope broadcast across the
//! feature columns.
//!
//! ## Available Activations
//!
//! - **Logistic**: `1 / (1 + e^(-x))` - Outputs in (0, 1), the stable default
//! - **TanhReluFloor**: `max(tanh(x), floor)` - Tanh forced positive, `floor = 1e-5`
//! - **Softplus**: `ln(1 + e^x)` - Always non-negative
//!
//! ## Usage Example
//!
//! ```rust
//! use edge_strength::activations::Activation;
//! use ndarray::array;
//!
//! let features = array![[1.0, 0.0], [0.5, 2.0]];
//! let weights = array![0.3, -0.1];
//!
//! let activation = Activation::Logistic;
//! let strength = activation.strength(&features, weights.view()).unwrap();
//! let gradient = activation.gradient(&features, strength.view()).unwrap();
//! assert_eq!(gradient.dim(), (2, 2));
//! ```
//!
//! ## Numerical Behaviour
//!
//! Exponentials are allowed to overflow or underflow: logistic saturates to 0
//! or 1 and softplus to `inf` for very large dot products. These are not errors.
//! The tanh variant and the softplus gradient reproduce formulas that were tuned
//! empirically rather than derived; see [`Activation`] for details.

pub mod edge;
pub mod functions;

pub use edge::{
    logistic_edge_strength, logistic_strength_gradient, softplus_edge_strength,
    softplus_strength_gradient, tanh_edge_strength, tanh_strength_gradient,
};
pub use functions::{Activation, DEFAULT_RELU_FLOOR};
