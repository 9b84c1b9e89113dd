//! Fitted feature transformer, loaded from a serialized artifact

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ArtifactError;
use crate::types::{CustomerRecord, FieldValue};

/// Vectorizes normalized records into the feature matrix the model scores.
///
/// The artifact lists output feature names the way a fitted dict vectorizer
/// does: `"Contract=month-to-month"` one-hots a category, a bare name like
/// `"tenure"` passes the numeric column through. Optional per-feature
/// mean/std standardize the result when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVectorizer {
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub mean: Option<Vec<f64>>,
    #[serde(default)]
    pub std: Option<Vec<f64>>,
}

impl FeatureVectorizer {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let vectorizer: Self =
            serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.feature_names.is_empty() {
            return Err(ArtifactError::Invalid(
                "transformer has an empty feature list".to_string(),
            ));
        }
        for (name, stat) in [("mean", &self.mean), ("std", &self.std)] {
            if let Some(values) = stat {
                if values.len() != self.feature_names.len() {
                    return Err(ArtifactError::Invalid(format!(
                        "{name} has {} entries for {} features",
                        values.len(),
                        self.feature_names.len()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Width of the output feature matrix.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// One row per record. Unknown categories leave their one-hot group
    /// all-zero; non-numeric values in numeric columns contribute 0.
    pub fn transform(&self, records: &[CustomerRecord]) -> Array2<f64> {
        let mut x = Array2::zeros((records.len(), self.feature_names.len()));

        for (i, record) in records.iter().enumerate() {
            for (j, name) in self.feature_names.iter().enumerate() {
                x[[i, j]] = match name.split_once('=') {
                    Some((column, category)) => {
                        let hit = record
                            .get(column)
                            .and_then(FieldValue::as_str)
                            .map(|s| s.trim().eq_ignore_ascii_case(category))
                            .unwrap_or(false);
                        if hit {
                            1.0
                        } else {
                            0.0
                        }
                    }
                    None => record.get(name).and_then(FieldValue::as_f64).unwrap_or(0.0),
                };
            }
        }

        if let (Some(mean), Some(std)) = (&self.mean, &self.std) {
            for mut row in x.rows_mut() {
                for (j, val) in row.iter_mut().enumerate() {
                    // Guard against division by zero on constant features
                    let s = if std[j].abs() < 1e-10 { 1.0 } else { std[j] };
                    *val = (*val - mean[j]) / s;
                }
            }
        }

        x
    }

    pub fn transform_one(&self, record: &CustomerRecord) -> Array1<f64> {
        self.transform(std::slice::from_ref(record)).row(0).to_owned()
    }
}
