//! Pre-trained churn scoring head

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ArtifactError, PredictError};
use crate::types::PredictionResult;

/// Probability at or above which a customer is flagged as churning.
pub const CHURN_THRESHOLD: f64 = 0.5;

/// Single-output dense scoring head: sigmoid(x . w + b).
///
/// Fitted offline; this crate only loads and evaluates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl ChurnModel {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model: Self = serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.weights.is_empty() {
            return Err(ArtifactError::Invalid("model has no weights".to_string()));
        }
        if !self.bias.is_finite() {
            return Err(ArtifactError::Invalid("model bias is not finite".to_string()));
        }
        if let Some(i) = self.weights.iter().position(|w| !w.is_finite()) {
            return Err(ArtifactError::Invalid(format!(
                "model weight {i} is not finite"
            )));
        }
        Ok(())
    }

    /// Input width this model scores.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Churn probability per row of `x`.
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>, PredictError> {
        if x.ncols() != self.weights.len() {
            return Err(PredictError::WidthMismatch {
                expected: self.weights.len(),
                got: x.ncols(),
            });
        }
        let w = Array1::from_vec(self.weights.clone());
        Ok(x.dot(&w).mapv(|z| sigmoid(z + self.bias)))
    }

    /// Probability plus its thresholded verdict per row of `x`.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Vec<PredictionResult>, PredictError> {
        let probabilities = self.predict_proba(x)?;
        Ok(probabilities
            .iter()
            .map(|&probability| PredictionResult {
                probability,
                churn: probability >= CHURN_THRESHOLD,
            })
            .collect())
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
