/// Pre-trained model artifacts

pub mod churn;

pub use churn::{ChurnModel, CHURN_THRESHOLD};
