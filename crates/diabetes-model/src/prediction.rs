//! Classifier output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary outcome of the diabetes classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    NonDiabetic,
    Diabetic,
}

impl Prediction {
    /// Interprets a raw class label (0 or 1).
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Prediction::NonDiabetic),
            1 => Some(Prediction::Diabetic),
            _ => None,
        }
    }

    pub fn label(&self) -> u8 {
        match self {
            Prediction::NonDiabetic => 0,
            Prediction::Diabetic => 1,
        }
    }

    pub fn is_diabetic(&self) -> bool {
        matches!(self, Prediction::Diabetic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::NonDiabetic => "Non-Diabetic",
            Prediction::Diabetic => "Diabetic",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
