//! Required-field validation.

use crate::record::CustomerRecord;
use thiserror::Error;

/// Fields every customer record must carry, in canonical order.
pub const REQUIRED_FIELDS: [&str; 15] = [
    "age",
    "job",
    "marital",
    "education",
    "default",
    "balance",
    "housing",
    "loan",
    "contact",
    "day",
    "month",
    "campaign",
    "pdays",
    "previous",
    "poutcome",
];

/// Input rejected before any pipeline work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are absent.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

impl ValidationError {
    /// Names of the missing fields.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            Self::MissingFields(fields) => fields,
        }
    }
}

/// Required fields for which `contains` returns false, in canonical order.
pub fn missing_fields<F>(mut contains: F) -> Vec<String>
where
    F: FnMut(&str) -> bool,
{
    REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !contains(*field))
        .map(str::to_string)
        .collect()
}

/// Check that all required fields are present.
///
/// Types and value ranges are not checked here.
pub fn validate_record(record: &CustomerRecord) -> Result<(), ValidationError> {
    let missing = missing_fields(|field| record.contains(field));
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}
