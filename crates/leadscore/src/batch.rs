//! CSV batch scoring.

use crate::config::BatchConfig;
use crate::error::BatchError;
use crate::pipeline::run_inference_with;
use csv::{ReaderBuilder, StringRecord, Trim};
use leadscore_artifacts::ArtifactBundle;
use leadscore_features::{CustomerRecord, FieldValue, ValidationError, missing_fields};
use leadscore_output::{BatchReport, InvalidRow, ScoredLead};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Field delimiter for a header line: `;` when it has more semicolons than
/// commas, else `,`.
pub fn detect_delimiter(header: &str) -> u8 {
    if header.matches(';').count() > header.matches(',').count() {
        b';'
    } else {
        b','
    }
}

/// Score every data row of a CSV upload.
///
/// The header must name all required fields (case-insensitive). Rows that
/// fail validation or inference are dropped and listed in the report's
/// invalid rows; they do not fail the batch.
pub fn score_csv<R: Read>(
    mut reader: R,
    artifacts: &ArtifactBundle,
    config: &BatchConfig,
) -> Result<BatchReport, BatchError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let delimiter = detect_delimiter(text.lines().next().unwrap_or_default());
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect();

    let missing = missing_fields(|field| headers.iter().any(|name| name == field));
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing).into());
    }

    let rows = csv_reader.records().collect::<Result<Vec<_>, _>>()?;
    if rows.is_empty() {
        return Err(BatchError::Empty);
    }
    if rows.len() > config.max_rows {
        return Err(BatchError::TooManyRows {
            rows: rows.len(),
            limit: config.max_rows,
        });
    }

    let mut predictions = Vec::with_capacity(rows.len());
    let mut invalid_rows = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        let record = row_to_record(&headers, row);
        match run_inference_with(&record, artifacts, &config.pipeline) {
            Ok(result) => predictions.push(ScoredLead { row_index, result }),
            Err(err) => {
                tracing::warn!(row = row_index, error = %err, "Dropping row");
                invalid_rows.push(InvalidRow {
                    row_index,
                    error: err.to_string(),
                });
            }
        }
    }

    let report = BatchReport::new(predictions, invalid_rows);
    tracing::info!(
        total = report.summary.total_rows,
        processed = report.summary.processed_rows,
        dropped = report.summary.dropped_rows,
        "Batch scored"
    );
    Ok(report)
}

/// Score a CSV file.
pub fn score_csv_path(
    path: impl AsRef<Path>,
    artifacts: &ArtifactBundle,
    config: &BatchConfig,
) -> Result<BatchReport, BatchError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Scoring batch file");
    let file = File::open(path)?;
    score_csv(BufReader::new(file), artifacts, config)
}

// Empty cells are left out so the row fails validation on that field.
fn row_to_record(headers: &[String], row: &StringRecord) -> CustomerRecord {
    headers
        .iter()
        .zip(row.iter())
        .filter_map(|(name, cell)| FieldValue::parse_cell(cell).map(|value| (name.as_str(), value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("age,job,month", b',')]
    #[case("age;job;month", b';')]
    #[case("\"a,b\";c;d", b';')]
    #[case("age", b',')]
    #[case("", b',')]
    fn test_detect_delimiter(#[case] header: &str, #[case] expected: u8) {
        assert_eq!(detect_delimiter(header), expected);
    }

    #[test]
    fn test_row_to_record_parses_cells() {
        let headers = vec!["age".to_string(), "job".to_string(), "balance".to_string()];
        let row = StringRecord::from(vec!["35", "technician", ""]);
        let record = row_to_record(&headers, &row);

        assert_eq!(record.get("age"), Some(&FieldValue::Int(35)));
        assert_eq!(record.get("job"), Some(&FieldValue::from("technician")));
        assert!(!record.contains("balance"));
    }

    #[test]
    fn test_short_row_leaves_fields_out() {
        let headers = vec!["age".to_string(), "job".to_string()];
        let row = StringRecord::from(vec!["35"]);
        let record = row_to_record(&headers, &row);
        assert_eq!(record.len(), 1);
    }
}
