//! Churn ML - library behind the browser demo server

pub mod error;
pub mod ingest;
pub mod models;
pub mod preprocessing;
pub mod types;

pub use models::{ChurnModel, CHURN_THRESHOLD};
pub use preprocessing::{CategoryNormalizer, FeatureVectorizer};
pub use types::*;
