//! The classifier boundary and the logistic-regression artifact.
//!
//! Callers only see [`Classifier::predict`]: a feature vector goes in, a
//! [`Prediction`] comes out. How the score is produced is private to the
//! implementation.

use std::path::Path;

use diabetes_model::{FEATURE_COUNT, FeatureName, FeatureVector, Prediction};
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Scores a feature vector.
pub trait Classifier {
    /// Predicts the class for one submission.
    ///
    /// # Errors
    ///
    /// Implementations fail only when the model itself cannot produce a
    /// class; the failure is scoped to this call.
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ClassifierError>;
}

impl<T: Classifier + ?Sized> Classifier for Box<T> {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ClassifierError> {
        (**self).predict(features)
    }
}

/// Logistic-regression model as exported from training.
///
/// ```json
/// {
///   "kind": "logistic",
///   "feature_names": ["HighBP", "HighChol", "..."],
///   "coefficients": [0.74, 0.58, "..."],
///   "intercept": -6.2,
///   "threshold": 0.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub kind: String,
    /// Column order the model was trained with.
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Probability at or above which the prediction is diabetic.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// Model kind tag for [`LogisticModel`].
pub const LOGISTIC_KIND: &str = "logistic";

impl LogisticModel {
    /// Parses and checks a JSON artifact.
    pub fn from_json_slice(bytes: &[u8], path: &Path) -> Result<Self, ClassifierError> {
        let model: Self = serde_json::from_slice(bytes).map_err(|source| ClassifierError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        model.check()?;
        Ok(model)
    }

    /// Verifies the artifact matches the canonical feature order and is numerically sane.
    pub fn check(&self) -> Result<(), ClassifierError> {
        if self.kind != LOGISTIC_KIND {
            return Err(ClassifierError::UnsupportedKind {
                kind: self.kind.clone(),
            });
        }
        if self.feature_names.len() != FEATURE_COUNT {
            return Err(ClassifierError::invalid(format!(
                "expected {FEATURE_COUNT} feature names, found {}",
                self.feature_names.len()
            )));
        }
        for (position, (expected, actual)) in FeatureName::CANONICAL_ORDER
            .iter()
            .zip(&self.feature_names)
            .enumerate()
        {
            if expected.as_str() != actual {
                return Err(ClassifierError::FeatureOrderMismatch {
                    position,
                    expected: expected.as_str().to_string(),
                    actual: actual.clone(),
                });
            }
        }
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(ClassifierError::invalid(format!(
                "expected {FEATURE_COUNT} coefficients, found {}",
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ClassifierError::invalid("coefficients must be finite"));
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(ClassifierError::invalid(format!(
                "threshold {} must lie strictly between 0 and 1",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Probability of the diabetic class.
    pub fn probability(&self, features: &FeatureVector) -> f64 {
        let logit = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.values())
                .map(|(coefficient, value)| coefficient * value)
                .sum::<f64>();
        sigmoid(logit)
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ClassifierError> {
        let probability = self.probability(features);
        if !probability.is_finite() {
            return Err(ClassifierError::invalid("model produced a non-finite score"));
        }
        tracing::trace!(probability, threshold = self.threshold, "scored feature vector");
        Ok(if probability >= self.threshold {
            Prediction::Diabetic
        } else {
            Prediction::NonDiabetic
        })
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_midpoint() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(10.0) > 0.99);
        assert!(sigmoid(-10.0) < 0.01);
    }
}
