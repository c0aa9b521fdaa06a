//! CSV and JSON export of scoring output.

use crate::batch::{BatchReport, BatchSummary, ScoredLead};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }

    /// Pick a format from a file extension, defaulting to pretty JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::PrettyJson,
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// Flattened lead for CSV export; reason codes are embedded as JSON.
#[derive(Debug, Serialize)]
struct LeadRow<'a> {
    row_index: usize,
    probability: f64,
    prediction: u8,
    prediction_label: &'a str,
    risk_level: &'static str,
    reason_codes: String,
}

impl<'a> LeadRow<'a> {
    fn from_lead(lead: &'a ScoredLead) -> Result<Self, ExportError> {
        Ok(Self {
            row_index: lead.row_index,
            probability: lead.result.probability,
            prediction: lead.result.prediction,
            prediction_label: &lead.result.prediction_label,
            risk_level: lead.result.risk_level.as_str(),
            reason_codes: serde_json::to_string(&lead.result.reason_codes)?,
        })
    }
}

fn into_csv_string(wtr: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
}

fn leads_to_csv(leads: &[ScoredLead]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for lead in leads {
        wtr.serialize(LeadRow::from_lead(lead)?)?;
    }
    into_csv_string(wtr)
}

impl Exporter for Vec<ScoredLead> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => leads_to_csv(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for BatchSummary {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.serialize(self)?;
                into_csv_string(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for BatchReport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let summary = &self.summary;
                let mut output = String::new();

                // Summary as comment lines, then one row per scored lead
                output.push_str(&format!("# Total Rows: {}\n", summary.total_rows));
                output.push_str(&format!("# Processed Rows: {}\n", summary.processed_rows));
                output.push_str(&format!("# Dropped Rows: {}\n", summary.dropped_rows));
                if let Some(avg) = summary.avg_probability {
                    output.push_str(&format!("# Avg Probability: {}\n", avg));
                }
                output.push_str(&leads_to_csv(&self.predictions)?);
                Ok(output)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
