use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, ArrayView1};
use serde::{Serialize, Deserialize};
use tracing::trace;

use crate::error::{EdgeStrengthError, Result};
use crate::features::FeatureMatrix;

/// Floor applied by [`Activation::TanhReluFloor`] unless configured otherwise.
pub const DEFAULT_RELU_FLOOR: f64 = 1e-5;

/// The activation used to turn an edge's `features · weights` into its strength.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum Activation {
    /// `1 / (1 + e^(-x))`, slope `s * (1 - s)`.
    #[default]
    Logistic,
    /// `tanh(x)` with every value below `floor` raised to `floor`.
    ///
    /// Plain tanh lets strengths go negative, which made the downstream walk
    /// diverge; forcing them positive fixed that in practice. The slope is
    /// `r * (1 - s^2)` where `r` is 1 for positive strengths and `floor` otherwise.
    /// Since strengths never drop below `floor`, the second case only fires for a
    /// zero floor. The slope is not the exact derivative of the clamped function
    /// (it ignores the flat region) and is kept as is.
    TanhReluFloor { floor: f64 },
    /// `ln(1 + e^x)`, slope `s / (1 + s)`.
    ///
    /// The slope is the historical formula, not the true derivative `1 - e^(-s)`.
    Softplus,
}

impl Activation {
    /// Tanh with the standard `1e-5` floor.
    pub fn tanh_relu_floor() -> Self {
        Activation::TanhReluFloor { floor: DEFAULT_RELU_FLOOR }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activation::Logistic => "logistic",
            Activation::TanhReluFloor { .. } => "tanh_relu_floor",
            Activation::Softplus => "softplus",
        }
    }

    /// Reject parameters that would make the floor meaningless.
    pub fn validate(&self) -> Result<()> {
        if let Activation::TanhReluFloor { floor } = self {
            if !floor.is_finite() || *floor < 0.0 {
                return Err(EdgeStrengthError::invalid_parameter(
                    "floor".to_string(),
                    format!("must be finite and non-negative, got {}", floor),
                ));
            }
        }
        Ok(())
    }

    /// Strength of a single edge from its pre-activation value `x = features · weights`.
    #[inline]
    pub fn activate(&self, x: f64) -> f64 {
        match self {
            Activation::Logistic => 1.0 / (1.0 + (-x).exp()),
            // f64::tanh instead of (e^x - e^-x) / (e^x + e^-x): equal up to a few ULPs,
            // but saturates to +/-1 where the exponential form overflows to NaN (|x| > ~710).
            Activation::TanhReluFloor { floor } => x.tanh().max(*floor),
            Activation::Softplus => x.exp().ln_1p(),
        }
    }

    /// Per-edge factor that, multiplied into an edge's features, gives `d(strength)/dw`.
    #[inline]
    pub fn slope(&self, strength: f64) -> f64 {
        match self {
            Activation::Logistic => strength * (1.0 - strength),
            Activation::TanhReluFloor { floor } => {
                let relu = if strength > 0.0 { 1.0 } else { *floor };
                relu * (1.0 - strength * strength)
            }
            Activation::Softplus => strength / (1.0 + strength),
        }
    }

    /// Apply the activation to pre-activation values in-place.
    pub fn apply(&self, input: &mut Array1<f64>) {
        input.mapv_inplace(|x| self.activate(x));
    }

    /// Compute the per-edge slopes for a strength vector.
    pub fn derivative(&self, strength: &Array1<f64>) -> Array1<f64> {
        strength.mapv(|s| self.slope(s))
    }

    /// Strength of every edge: `f(features · weights)`, one value per row.
    pub fn strength<F>(&self, features: &F, weights: ArrayView1<f64>) -> Result<Array1<f64>>
    where
        F: FeatureMatrix + ?Sized,
    {
        self.validate()?;
        let mut strength = features.dot_weights(weights)?;
        self.apply(&mut strength);
        trace!(
            activation = self.name(),
            edges = features.num_edges(),
            features = features.num_features(),
            "computed edge strengths"
        );
        Ok(strength)
    }

    /// Gradient of each edge's strength with respect to the weights, shape (E, W).
    ///
    /// `strength` must be the output of [`Activation::strength`] for the same
    /// features. Neither argument is modified.
    pub fn gradient<F>(&self, features: &F, strength: ArrayView1<f64>) -> Result<F::Scaled>
    where
        F: FeatureMatrix + ?Sized,
    {
        self.validate()?;
        let slopes = strength.mapv(|s| self.slope(s));
        let gradient = features.scale_rows(slopes.view())?;
        trace!(
            activation = self.name(),
            edges = features.num_edges(),
            features = features.num_features(),
            "computed strength gradient"
        );
        Ok(gradient)
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::TanhReluFloor { floor } => write!(f, "{}(floor={})", self.name(), floor),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Activation {
    type Err = EdgeStrengthError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logistic" | "sigmoid" => Ok(Activation::Logistic),
            "tanh" | "tanh_relu_floor" => Ok(Activation::tanh_relu_floor()),
            "softplus" => Ok(Activation::Softplus),
            other => Err(EdgeStrengthError::invalid_parameter(
                "activation".to_string(),
                format!("unknown activation '{}'", other),
            )),
        }
    }
}
