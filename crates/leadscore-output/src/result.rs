//! Per-request inference result.
//!
//! Serializes to the response shape consumed by callers:
//!
//! ```json
//! {
//!   "probability": 0.4523,
//!   "prediction": 0,
//!   "prediction_label": "no",
//!   "risk_level": "Medium",
//!   "reason_codes": [{"feature": "poutcome", "direction": "negative", "shap_value": -0.234}]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse conversion-likelihood tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// probability < 0.3.
    Low,
    /// 0.3 <= probability < 0.6.
    Medium,
    /// probability >= 0.6.
    High,
}

impl RiskLevel {
    /// Display name, as serialized.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way a feature pushed the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Raised the conversion probability.
    Positive,
    /// Lowered it, or had no effect.
    Negative,
}

impl Direction {
    /// Direction of an attribution value; zero counts as negative.
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Display name, as serialized.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked driver of a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonCode {
    /// Feature name, as in the model's feature list.
    pub feature: String,

    /// Sign of the attribution.
    pub direction: Direction,

    /// Raw attribution value.
    pub shap_value: f64,
}

impl ReasonCode {
    /// Reason code for a feature's attribution value.
    ///
    /// # Examples
    ///
    /// ```
    /// use leadscore_output::{Direction, ReasonCode};
    ///
    /// let reason = ReasonCode::new("poutcome".to_string(), -0.234);
    /// assert_eq!(reason.direction, Direction::Negative);
    /// ```
    pub fn new(feature: String, shap_value: f64) -> Self {
        Self {
            feature,
            direction: Direction::of(shap_value),
            shap_value,
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {:+.4})", self.feature, self.direction, self.shap_value)
    }
}

/// Score for one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    /// Probability of conversion, in [0, 1].
    pub probability: f64,

    /// Predicted class: 1 converts, 0 does not.
    pub prediction: u8,

    /// `"yes"` when `prediction` is 1, else `"no"`.
    pub prediction_label: String,

    /// Tier derived from `probability`.
    pub risk_level: RiskLevel,

    /// Top drivers, strongest first.
    pub reason_codes: Vec<ReasonCode>,
}

impl InferenceResult {
    /// Assemble a result; the label is derived from `prediction`.
    pub fn new(
        probability: f64,
        prediction: u8,
        risk_level: RiskLevel,
        reason_codes: Vec<ReasonCode>,
    ) -> Self {
        Self {
            probability,
            prediction,
            prediction_label: prediction_label(prediction).to_string(),
            risk_level,
            reason_codes,
        }
    }

    /// Whether the lead is predicted to convert.
    pub const fn converts(&self) -> bool {
        self.prediction == 1
    }
}

/// Human label for a predicted class.
pub const fn prediction_label(prediction: u8) -> &'static str {
    if prediction == 1 { "yes" } else { "no" }
}

impl fmt::Display for InferenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (p={:.4}, risk={})",
            self.prediction_label, self.probability, self.risk_level
        )?;
        for reason in &self.reason_codes {
            write!(f, "\n  {}", reason)?;
        }
        Ok(())
    }
}
