//! Batch scoring reports.
//!
//! A batch is a list of customer rows scored independently. Rows that fail
//! validation or inference are dropped from the predictions and reported
//! separately; the summary aggregates what was scored.

use crate::result::{InferenceResult, RiskLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A successfully scored row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLead {
    /// Zero-based data row index (header excluded).
    pub row_index: usize,

    /// Score for the row.
    #[serde(flatten)]
    pub result: InferenceResult,
}

/// A row that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRow {
    /// Zero-based data row index (header excluded).
    pub row_index: usize,

    /// Why the row was dropped.
    pub error: String,
}

/// Aggregate statistics over a scored batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Data rows received.
    pub total_rows: usize,

    /// Rows scored.
    pub processed_rows: usize,

    /// Rows dropped as invalid.
    pub dropped_rows: usize,

    /// Mean probability over scored rows; `None` when nothing was scored.
    pub avg_probability: Option<f64>,

    /// Scored rows in the High tier.
    pub conversion_high: usize,

    /// Scored rows in the Medium tier.
    pub conversion_medium: usize,

    /// Scored rows in the Low tier.
    pub conversion_low: usize,
}

impl BatchSummary {
    /// Summarize `leads` out of `total_rows` received.
    pub fn from_leads(total_rows: usize, leads: &[ScoredLead]) -> Self {
        let processed_rows = leads.len();
        let count = |level: RiskLevel| {
            leads
                .iter()
                .filter(|lead| lead.result.risk_level == level)
                .count()
        };

        let avg_probability = if leads.is_empty() {
            None
        } else {
            Some(leads.iter().map(|lead| lead.result.probability).sum::<f64>() / processed_rows as f64)
        };

        Self {
            total_rows,
            processed_rows,
            dropped_rows: total_rows.saturating_sub(processed_rows),
            avg_probability,
            conversion_high: count(RiskLevel::High),
            conversion_medium: count(RiskLevel::Medium),
            conversion_low: count(RiskLevel::Low),
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows:            {}", self.total_rows)?;
        writeln!(f, "Processed:       {}", self.processed_rows)?;
        writeln!(f, "Dropped:         {}", self.dropped_rows)?;
        match self.avg_probability {
            Some(p) => writeln!(f, "Avg probability: {:.4}", p)?,
            None => writeln!(f, "Avg probability: n/a")?,
        }
        write!(
            f,
            "High / Medium / Low: {} / {} / {}",
            self.conversion_high, self.conversion_medium, self.conversion_low
        )
    }
}

/// Everything produced by scoring one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Aggregate statistics.
    pub summary: BatchSummary,

    /// Scored rows, in input order.
    pub predictions: Vec<ScoredLead>,

    /// Dropped rows, in input order.
    pub invalid_rows: Vec<InvalidRow>,
}

impl BatchReport {
    /// Build a report; the total is scored plus dropped rows.
    pub fn new(predictions: Vec<ScoredLead>, invalid_rows: Vec<InvalidRow>) -> Self {
        let total_rows = predictions.len() + invalid_rows.len();
        Self {
            summary: BatchSummary::from_leads(total_rows, &predictions),
            predictions,
            invalid_rows,
        }
    }
}
