//! Prediction and risk tiers.

use crate::align::ScaledRow;
use crate::error::PipelineError;
use leadscore_artifacts::{Classifier, POSITIVE_CLASS};
use leadscore_output::RiskLevel;

/// Probabilities below this are Low risk.
pub const LOW_RISK_CEILING: f64 = 0.3;

/// Probabilities at or above this are High risk.
pub const HIGH_RISK_FLOOR: f64 = 0.6;

/// Risk tier for a conversion probability.
///
/// `p < 0.3` is Low, `0.3 <= p < 0.6` is Medium, `p >= 0.6` is High.
pub fn classify_risk(probability: f64) -> RiskLevel {
    if probability < LOW_RISK_CEILING {
        RiskLevel::Low
    } else if probability < HIGH_RISK_FLOOR {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Classifier output for one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Positive-class probability, in [0, 1].
    pub probability: f64,
    /// Predicted class, 0 or 1.
    pub class: u8,
}

impl Prediction {
    /// Risk tier of this prediction.
    pub fn risk_level(&self) -> RiskLevel {
        classify_risk(self.probability)
    }
}

/// Run the classifier on a scaled row.
///
/// Rejects a probability outside [0, 1] (or NaN) and any class other than
/// 0 or 1 rather than passing them on.
pub fn predict(row: &ScaledRow<'_>, model: &dyn Classifier) -> Result<Prediction, PipelineError> {
    let proba = model.predict_proba(row.view())?;
    let probability = proba.get(POSITIVE_CLASS).copied().ok_or_else(|| {
        PipelineError::InvalidPrediction(format!(
            "expected probabilities for 2 classes, got {}",
            proba.len()
        ))
    })?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(PipelineError::InvalidPrediction(format!(
            "probability {} is outside [0, 1]",
            probability
        )));
    }

    let class = match model.predict(row.view())? {
        0 => 0,
        1 => 1,
        other => {
            return Err(PipelineError::InvalidPrediction(format!(
                "class {} is not binary",
                other
            )));
        }
    };

    Ok(Prediction { probability, class })
}
