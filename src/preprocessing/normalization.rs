//! Category normalization for raw customer records

use crate::types::{CustomerRecord, FieldValue, EXPECTED_COLUMNS};

/// Maps raw categorical strings onto the numeric codes the fitted
/// transformer was trained against, and fills absent columns with 0.
///
/// Recognized codings: yes/no -> 1/0, the "no internet service" /
/// "no phone service" tiers -> 0 (underscore spellings included, since
/// uploads in the wild use both). `InternetService == "no"` falls under the
/// yes/no table and so is zeroed as well. Lookup is case-insensitive.
///
/// Unrecognized categories pass through unmodified; the vectorizer turns
/// them into an all-zero one-hot group rather than an error, so a typo
/// silently demotes a feature instead of failing the request.
pub struct CategoryNormalizer;

impl CategoryNormalizer {
    /// Numeric code for a recognized categorical string, if any.
    fn code_for(value: &str) -> Option<f64> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" => Some(1.0),
            "no" => Some(0.0),
            "no internet service" | "no_internet_service" => Some(0.0),
            "no phone service" | "no_phone_service" => Some(0.0),
            _ => None,
        }
    }

    /// Normalizes a single record in place and returns it with the full
    /// expected column set.
    pub fn normalize(mut record: CustomerRecord) -> CustomerRecord {
        for value in record.values_mut() {
            if let FieldValue::Text(s) = value {
                if let Some(code) = Self::code_for(s) {
                    *value = FieldValue::Number(code);
                }
            }
        }

        for col in EXPECTED_COLUMNS {
            record
                .entry(col.to_string())
                .or_insert(FieldValue::Number(0.0));
        }

        record
    }

    /// Normalizes every record of a batch, preserving order and shape.
    pub fn normalize_batch(records: Vec<CustomerRecord>) -> Vec<CustomerRecord> {
        records.into_iter().map(Self::normalize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, FieldValue)]) -> CustomerRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn yes_no_become_codes() {
        let normalized = CategoryNormalizer::normalize(record(&[
            ("Partner", "yes".into()),
            ("Dependents", "no".into()),
        ]));
        assert_eq!(normalized["Partner"], FieldValue::Number(1.0));
        assert_eq!(normalized["Dependents"], FieldValue::Number(0.0));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let normalized =
            CategoryNormalizer::normalize(record(&[("PaperlessBilling", "Yes".into())]));
        assert_eq!(normalized["PaperlessBilling"], FieldValue::Number(1.0));
    }

    #[test]
    fn no_service_tiers_zero_in_both_spellings() {
        let normalized = CategoryNormalizer::normalize(record(&[
            ("OnlineSecurity", "no internet service".into()),
            ("TechSupport", "no_internet_service".into()),
            ("MultipleLines", "no phone service".into()),
            ("StreamingTV", "no_phone_service".into()),
        ]));
        for col in ["OnlineSecurity", "TechSupport", "MultipleLines", "StreamingTV"] {
            assert_eq!(normalized[col], FieldValue::Number(0.0), "{col}");
        }
    }

    #[test]
    fn internet_service_no_is_zeroed() {
        let normalized =
            CategoryNormalizer::normalize(record(&[("InternetService", "no".into())]));
        assert_eq!(normalized["InternetService"], FieldValue::Number(0.0));
    }

    #[test]
    fn missing_columns_default_to_zero() {
        let normalized = CategoryNormalizer::normalize(record(&[("tenure", 12.0.into())]));
        for col in EXPECTED_COLUMNS {
            assert!(normalized.contains_key(col), "missing {col}");
        }
        assert_eq!(normalized["MonthlyCharges"], FieldValue::Number(0.0));
        assert_eq!(normalized["tenure"], FieldValue::Number(12.0));
    }

    #[test]
    fn unknown_categories_pass_through() {
        let normalized = CategoryNormalizer::normalize(record(&[
            ("InternetService", "fiber optic".into()),
            ("Contract", "month-to-month".into()),
        ]));
        assert_eq!(
            normalized["InternetService"],
            FieldValue::Text("fiber optic".to_string())
        );
        assert_eq!(
            normalized["Contract"],
            FieldValue::Text("month-to-month".to_string())
        );
    }

    #[test]
    fn numbers_are_untouched() {
        let normalized = CategoryNormalizer::normalize(record(&[
            ("SeniorCitizen", 1.0.into()),
            ("MonthlyCharges", 29.85.into()),
        ]));
        assert_eq!(normalized["SeniorCitizen"], FieldValue::Number(1.0));
        assert_eq!(normalized["MonthlyCharges"], FieldValue::Number(29.85));
    }

    #[test]
    fn batch_preserves_order_and_shape() {
        let batch = vec![
            record(&[("Partner", "yes".into())]),
            record(&[("Partner", "no".into())]),
        ];
        let normalized = CategoryNormalizer::normalize_batch(batch);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0]["Partner"], FieldValue::Number(1.0));
        assert_eq!(normalized[1]["Partner"], FieldValue::Number(0.0));
    }
}
