//! Raw customer records.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One scalar input value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Whole number (age, day, campaign, ...).
    Int(i64),
    /// Fractional number.
    Float(f64),
    /// Categorical string (job, month, ...).
    Text(String),
}

impl FieldValue {
    /// Parse a CSV cell, preferring integer, then float, then text.
    ///
    /// Returns `None` for an empty cell.
    pub fn parse_cell(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        if cell.is_empty() {
            return None;
        }
        if let Ok(v) = cell.parse::<i64>() {
            return Some(Self::Int(v));
        }
        match cell.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(Self::Float(v)),
            _ => Some(Self::Text(cell.to_string())),
        }
    }

    /// Numeric view of the value, if it has one.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// String view of the value, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    fn to_column(&self, name: &str) -> Column {
        match self {
            Self::Int(v) => Column::new(name.into(), [*v]),
            Self::Float(v) => Column::new(name.into(), [*v]),
            Self::Text(v) => Column::new(name.into(), [v.as_str()]),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// One customer, as a mapping from field name to scalar value.
///
/// Deserializes from a flat JSON object. Fields beyond the required ones
/// are kept and flow into the frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerRecord(BTreeMap<String, FieldValue>);

impl CustomerRecord {
    /// Empty record.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set a field, returning the previous value.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(field.into(), value.into())
    }

    /// Remove a field.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.0.remove(field)
    }

    /// Value of a field.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Whether a field is present.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Single-row frame with one typed column per field.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        DataFrame::new(self.iter().map(|(name, value)| value.to_column(name)).collect())
    }
}

impl<K, V> FromIterator<(K, V)> for CustomerRecord
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
