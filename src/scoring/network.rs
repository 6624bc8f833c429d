//! Pretrained feed-forward classifier stored as JSON.
//!
//! ```json
//! { "input_width": 8,
//!   "layers": [ { "kernel": [[...], ...], "bias": [...], "activation": "relu" },
//!               { "kernel": [[w], ...],    "bias": [b],   "activation": "sigmoid" } ] }
//! ```
//!
//! `kernel` is input-major (`kernel[i][j]` connects input `i` to unit `j`),
//! the layout a Keras `Dense` layer exports.

use super::{check_width, Scorer};
use crate::analysis::encoder::FeatureVector;
use crate::error::AppError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Linear,
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DenseLayer {
    pub kernel: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
    pub activation: Activation,
}

impl DenseLayer {
    fn inputs(&self) -> usize {
        self.kernel.len()
    }

    fn units(&self) -> usize {
        self.bias.len()
    }

    fn forward(&self, input: &[f32]) -> Vec<f32> {
        let mut out = self.bias.clone();
        for (x, row) in input.iter().zip(&self.kernel) {
            if *x == 0.0 {
                continue;
            }
            for (acc, w) in out.iter_mut().zip(row) {
                *acc += x * w;
            }
        }
        for v in out.iter_mut() {
            *v = self.activation.apply(*v);
        }
        out
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DenseNetwork {
    input_width: usize,
    layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::ModelLoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let network: DenseNetwork = serde_json::from_str(content).map_err(|e| {
            AppError::ModelLoadError(format!("Failed to parse model: {}", e))
        })?;

        network.validate()?;
        Ok(network)
    }

    pub fn new(input_width: usize, layers: Vec<DenseLayer>) -> Result<Self, AppError> {
        let network = DenseNetwork {
            input_width,
            layers,
        };
        network.validate()?;
        Ok(network)
    }

    fn validate(&self) -> Result<(), AppError> {
        let last = self
            .layers
            .last()
            .ok_or_else(|| AppError::ModelLoadError("Model has no layers".to_string()))?;

        let mut width = self.input_width;
        for (idx, layer) in self.layers.iter().enumerate() {
            if layer.inputs() != width {
                return Err(AppError::ModelLoadError(format!(
                    "Layer {} expects {} inputs, previous layer gives {}",
                    idx,
                    layer.inputs(),
                    width
                )));
            }
            if let Some(row) = layer.kernel.iter().find(|row| row.len() != layer.units()) {
                return Err(AppError::ModelLoadError(format!(
                    "Layer {} has a kernel row of {} weights for {} units",
                    idx,
                    row.len(),
                    layer.units()
                )));
            }
            let finite = layer
                .bias
                .iter()
                .chain(layer.kernel.iter().flatten())
                .all(|w| w.is_finite());
            if !finite {
                return Err(AppError::ModelLoadError(format!(
                    "Layer {} has a weight that is not a finite number",
                    idx
                )));
            }
            width = layer.units();
        }

        if last.units() != 1 || last.activation != Activation::Sigmoid {
            return Err(AppError::ModelLoadError(
                "Output layer must be a single sigmoid unit".to_string(),
            ));
        }

        Ok(())
    }
}

impl Scorer for DenseNetwork {
    fn input_width(&self) -> usize {
        self.input_width
    }

    fn score(&self, features: &FeatureVector) -> Result<f64, AppError> {
        check_width(self.input_width, features)?;

        let mut activations = features.as_slice().to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations);
        }

        Ok(activations[0] as f64)
    }
}
