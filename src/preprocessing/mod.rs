/// Preprocessing of incoming customer records

pub mod normalization;
pub mod vectorizer;

pub use normalization::CategoryNormalizer;
pub use vectorizer::FeatureVectorizer;
