//! CSV batch ingestion

use crate::error::IngestError;
use crate::types::{CustomerRecord, FieldValue, EXPECTED_COLUMNS};

/// Parses an uploaded CSV into an ordered batch of customer records.
///
/// Headers are matched case-insensitively against the documented schema
/// (uploads in the wild say `Tenure` where the schema says `tenure`);
/// unrecognized headers are kept verbatim. Cells parse as numbers where
/// possible, otherwise they become lowercased category strings.
pub fn read_records(data: &[u8]) -> Result<Vec<CustomerRecord>, IngestError> {
    let mut reader = csv::Reader::from_reader(data);
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(canonical_column)
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = CustomerRecord::new();
        for (column, cell) in columns.iter().zip(row.iter()) {
            record.insert(column.clone(), coerce(cell));
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(IngestError::Empty);
    }
    Ok(records)
}

fn canonical_column(header: &str) -> String {
    let trimmed = header.trim();
    EXPECTED_COLUMNS
        .iter()
        .find(|c| c.eq_ignore_ascii_case(trimmed))
        .map_or_else(|| trimmed.to_string(), |c| (*c).to_string())
}

fn coerce(cell: &str) -> FieldValue {
    let trimmed = cell.trim();
    match trimmed.parse::<f64>() {
        Ok(n) => FieldValue::Number(n),
        Err(_) => FieldValue::Text(trimmed.to_lowercase()),
    }
}
