use std::path::Path;

use ndarray::{Array1, ArrayView1};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::activations::Activation;
use crate::error::{EdgeStrengthError, Result};
use crate::features::FeatureMatrix;

/// An activation paired with the weight vector it is evaluated against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeStrengthModel {
    pub activation: Activation,
    pub weights: Array1<f64>,
}

impl EdgeStrengthModel {
    pub fn new(activation: Activation, weights: Array1<f64>) -> Result<Self> {
        activation.validate()?;
        Ok(EdgeStrengthModel { activation, weights })
    }

    /// Create a model with `num_features` weights drawn uniformly from [-0.1, 0.1).
    pub fn random(num_features: usize, activation: Activation) -> Result<Self> {
        let weights = Array1::random(num_features, Uniform::new(-0.1, 0.1));
        Self::new(activation, weights)
    }

    /// Same as [`EdgeStrengthModel::random`] but reproducible.
    pub fn random_with_seed(num_features: usize, activation: Activation, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let weights = Array1::random_using(num_features, Uniform::new(-0.1, 0.1), &mut rng);
        Self::new(activation, weights)
    }

    pub fn num_features(&self) -> usize {
        self.weights.len()
    }

    pub fn strengths<F>(&self, features: &F) -> Result<Array1<f64>>
    where
        F: FeatureMatrix + ?Sized,
    {
        self.activation.strength(features, self.weights.view())
    }

    pub fn gradient<F>(&self, features: &F, strength: ArrayView1<f64>) -> Result<F::Scaled>
    where
        F: FeatureMatrix + ?Sized,
    {
        self.activation.gradient(features, strength)
    }

    /// Strengths and their gradient in one call.
    pub fn strengths_and_gradient<F>(&self, features: &F) -> Result<(Array1<f64>, F::Scaled)>
    where
        F: FeatureMatrix + ?Sized,
    {
        let strength = self.strengths(features)?;
        let gradient = self.gradient(features, strength.view())?;
        Ok((strength, gradient))
    }

    /// Save the model to disk
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = bincode::serialize(self)?;
        std::fs::write(path.as_ref(), serialized)?;
        debug!(path = %path.as_ref().display(), activation = %self.activation, "saved edge strength model");
        Ok(())
    }

    /// Load model from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        let model: Self = bincode::deserialize(&data)?;
        model.checked()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.checked()
    }

    fn checked(self) -> Result<Self> {
        self.activation.validate()?;
        if let Some(bad) = self.weights.iter().find(|w| !w.is_finite()) {
            return Err(EdgeStrengthError::NumericalError(format!(
                "loaded weights contain non-finite value {}",
                bad
            )));
        }
        debug!(activation = %self.activation, features = self.num_features(), "loaded edge strength model");
        Ok(self)
    }
}
