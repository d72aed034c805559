//! Classifier feature names and the fixed-order feature vector.
//!
//! The classifier only sees positions, never names. [`FeatureName::CANONICAL_ORDER`]
//! is the column order the model was trained with; changing it requires
//! retraining.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 19;

/// One classifier input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureName {
    HighBp,
    HighChol,
    CholCheck,
    Bmi,
    Smoker,
    Stroke,
    HeartDiseaseOrAttack,
    PhysActivity,
    Fruits,
    Veggies,
    HvyAlcoholConsump,
    AnyHealthcare,
    NoDocBcCost,
    GenHlth,
    MentHlth,
    PhysHlth,
    DiffWalk,
    Sex,
    Age,
}

impl FeatureName {
    /// Column order of the trained classifier.
    pub const CANONICAL_ORDER: [FeatureName; FEATURE_COUNT] = [
        FeatureName::HighBp,
        FeatureName::HighChol,
        FeatureName::CholCheck,
        FeatureName::Bmi,
        FeatureName::Smoker,
        FeatureName::Stroke,
        FeatureName::HeartDiseaseOrAttack,
        FeatureName::PhysActivity,
        FeatureName::Fruits,
        FeatureName::Veggies,
        FeatureName::HvyAlcoholConsump,
        FeatureName::AnyHealthcare,
        FeatureName::NoDocBcCost,
        FeatureName::GenHlth,
        FeatureName::MentHlth,
        FeatureName::PhysHlth,
        FeatureName::DiffWalk,
        FeatureName::Sex,
        FeatureName::Age,
    ];

    /// Column name as used in the training data.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureName::HighBp => "HighBP",
            FeatureName::HighChol => "HighChol",
            FeatureName::CholCheck => "CholCheck",
            FeatureName::Bmi => "BMI",
            FeatureName::Smoker => "Smoker",
            FeatureName::Stroke => "Stroke",
            FeatureName::HeartDiseaseOrAttack => "HeartDiseaseorAttack",
            FeatureName::PhysActivity => "PhysActivity",
            FeatureName::Fruits => "Fruits",
            FeatureName::Veggies => "Veggies",
            FeatureName::HvyAlcoholConsump => "HvyAlcoholConsump",
            FeatureName::AnyHealthcare => "AnyHealthcare",
            FeatureName::NoDocBcCost => "NoDocbcCost",
            FeatureName::GenHlth => "GenHlth",
            FeatureName::MentHlth => "MentHlth",
            FeatureName::PhysHlth => "PhysHlth",
            FeatureName::DiffWalk => "DiffWalk",
            FeatureName::Sex => "Sex",
            FeatureName::Age => "Age",
        }
    }

    /// Position of this feature in the canonical order.
    pub fn position(&self) -> usize {
        // CANONICAL_ORDER lists every variant exactly once.
        Self::CANONICAL_ORDER
            .iter()
            .position(|name| name == self)
            .unwrap_or(FEATURE_COUNT)
    }

    /// Short description of where the value comes from.
    pub fn description(&self) -> &'static str {
        match self {
            FeatureName::CholCheck | FeatureName::AnyHealthcare | FeatureName::NoDocBcCost => {
                "constant"
            }
            FeatureName::Bmi => "derived from weight and height",
            FeatureName::Sex => "Male = 1, Female = 0",
            FeatureName::Age => "years",
            FeatureName::GenHlth => "1 (excellent) to 5 (poor)",
            FeatureName::MentHlth | FeatureName::PhysHlth => "days per month",
            _ => "Yes = 1, No = 0",
        }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeatureName {
    type Err = String;

    /// Parses a training column name (exact, case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CANONICAL_ORDER
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown feature name: {s}"))
    }
}

/// The 19 numeric classifier inputs, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Wraps values that are already in canonical order.
    pub fn from_ordered(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Value of a single named feature.
    pub fn get(&self, name: FeatureName) -> f64 {
        self.values[name.position()]
    }

    /// Values in canonical order.
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Always [`FEATURE_COUNT`].
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates `(name, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, f64)> + '_ {
        FeatureName::CANONICAL_ORDER
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_match_canonical_order() {
        for (index, name) in FeatureName::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(name.position(), index);
        }
    }

    #[test]
    fn test_feature_name_round_trip() {
        assert_eq!("NoDocbcCost".parse::<FeatureName>().unwrap(), FeatureName::NoDocBcCost);
        assert_eq!("BMI".parse::<FeatureName>().unwrap(), FeatureName::Bmi);
        assert!("bmi".parse::<FeatureName>().is_err());
    }

    #[test]
    fn test_get_reads_by_position() {
        let mut values = [0.0; FEATURE_COUNT];
        values[3] = 22.5;
        values[18] = 40.0;
        let vector = FeatureVector::from_ordered(values);
        assert_eq!(vector.get(FeatureName::Bmi), 22.5);
        assert_eq!(vector.get(FeatureName::Age), 40.0);
        assert_eq!(vector.len(), FEATURE_COUNT);
    }
}
