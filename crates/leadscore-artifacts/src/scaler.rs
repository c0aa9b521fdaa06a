//! Standard scaler (`preprocessor.json`).

use crate::collaborator::Preprocessor;
use crate::error::ModelError;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Centers each feature on its training mean and divides by its scale.
///
/// A zero scale means the feature was constant at training time; it is
/// treated as 1 so the feature is only centered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature training mean.
    pub mean: Vec<f64>,
    /// Per-feature standard deviation.
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Create a scaler from fitted parameters.
    pub const fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    /// Scaler that leaves `width` features unchanged.
    pub fn identity(width: usize) -> Self {
        Self::new(vec![0.0; width], vec![1.0; width])
    }
}

impl Preprocessor for StandardScaler {
    fn transform(&self, row: ArrayView1<'_, f64>) -> Result<Array1<f64>, ModelError> {
        if self.mean.len() != self.scale.len() {
            return Err(ModelError::InvalidParameter(format!(
                "scaler has {} means but {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if row.len() != self.mean.len() {
            return Err(ModelError::DimensionMismatch {
                artifact: "preprocessor",
                expected: self.mean.len(),
                actual: row.len(),
            });
        }

        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_transform() {
        let scaler = StandardScaler::new(vec![10.0, 0.0], vec![2.0, 0.5]);
        let scaled = scaler.transform(array![14.0, -1.0].view()).unwrap();
        assert_relative_eq!(scaled[0], 2.0);
        assert_relative_eq!(scaled[1], -2.0);
    }

    #[test]
    fn test_zero_scale_only_centers() {
        let scaler = StandardScaler::new(vec![3.0], vec![0.0]);
        let scaled = scaler.transform(array![5.0].view()).unwrap();
        assert_relative_eq!(scaled[0], 2.0);
    }

    #[test]
    fn test_identity() {
        let scaler = StandardScaler::identity(3);
        let row = array![1.5, -2.0, 0.0];
        assert_eq!(scaler.transform(row.view()).unwrap(), row);
    }

    #[test]
    fn test_width_mismatch() {
        let scaler = StandardScaler::identity(2);
        assert!(matches!(
            scaler.transform(array![1.0, 2.0, 3.0].view()),
            Err(ModelError::DimensionMismatch {
                expected: 2,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_inconsistent_parameters() {
        let scaler = StandardScaler::new(vec![0.0, 0.0], vec![1.0]);
        assert!(matches!(
            scaler.transform(array![1.0, 2.0].view()),
            Err(ModelError::InvalidParameter(_))
        ));
    }
}
