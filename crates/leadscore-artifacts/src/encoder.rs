//! Fitted label encoders for categorical fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Code emitted for a category the encoder was never fitted on.
pub const UNKNOWN_CODE: i64 = -1;

/// Label encoders keyed by categorical field name.
pub type LabelEncoders = BTreeMap<String, LabelEncoder>;

/// Maps known category strings to integer codes.
///
/// The code of a category is its position in `classes`, which is the order
/// the encoder learned at training time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Create an encoder from its learned classes.
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Known categories, in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether `value` is a known category.
    pub fn contains(&self, value: &str) -> bool {
        self.classes.iter().any(|c| c == value)
    }

    /// Code for `value`, or [`UNKNOWN_CODE`] if it was never seen.
    pub fn encode(&self, value: &str) -> i64 {
        self.classes
            .iter()
            .position(|c| c == value)
            .map_or(UNKNOWN_CODE, |idx| idx as i64)
    }
}
