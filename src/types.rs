/// Wire and schema types for the churn demo

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column set the fitted transformer was trained against, in schema order.
pub const EXPECTED_COLUMNS: [&str; 19] = [
    "gender",
    "SeniorCitizen",
    "Partner",
    "Dependents",
    "PhoneService",
    "MultipleLines",
    "InternetService",
    "OnlineSecurity",
    "OnlineBackup",
    "DeviceProtection",
    "TechSupport",
    "StreamingTV",
    "StreamingMovies",
    "Contract",
    "PaperlessBilling",
    "PaymentMethod",
    "MonthlyCharges",
    "TotalCharges",
    "tenure",
];

/// A single cell of a customer record. Numeric fields (tenure, charges,
/// already-coded flags) arrive as numbers, categorical fields as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// One customer, one request. A flat field-name -> value map with no
/// identity and no lifecycle beyond the request that carries it.
pub type CustomerRecord = BTreeMap<String, FieldValue>;

/// Outcome for a single scored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub probability: f64, // in [0, 1]
    pub churn: bool,      // probability >= threshold
}

/// Outcome for one row of an uploaded batch, in upload order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPrediction {
    pub row: usize,
    pub probability: f64,
    pub churn: bool,
}
