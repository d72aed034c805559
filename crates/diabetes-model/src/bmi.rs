//! BMI categories and display severity.
//!
//! These values are for presentation only; the classifier receives the raw
//! BMI number, never the category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which set of BMI bands to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiScheme {
    /// Sex-independent clinical bands (18.5 / 25 / 30).
    #[default]
    Clinical,
    /// Separate male and female bands with a "slightly overweight" band.
    SexSpecific,
}

impl BmiScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiScheme::Clinical => "clinical",
            BmiScheme::SexSpecific => "sex_specific",
        }
    }
}

impl fmt::Display for BmiScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BmiScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "clinical" => Ok(BmiScheme::Clinical),
            "sex_specific" => Ok(BmiScheme::SexSpecific),
            _ => Err(format!("Unknown BMI scheme: {s}")),
        }
    }
}

/// A BMI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    /// Only produced by [`BmiScheme::SexSpecific`].
    SlightlyOverweight,
    Overweight,
    /// Only produced by [`BmiScheme::Clinical`].
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::SlightlyOverweight => "Slightly overweight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Color-coding tier for a BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Normal,
    Caution,
    Risk,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Normal => "normal",
            SeverityTier::Caution => "caution",
            SeverityTier::Risk => "risk",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A BMI value together with its band and tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    pub bmi: f64,
    pub category: BmiCategory,
    pub tier: SeverityTier,
    /// Scheme actually applied.
    pub scheme: BmiScheme,
}

impl BmiAssessment {
    /// BMI rounded to two decimals for display.
    pub fn rounded(&self) -> f64 {
        (self.bmi * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("clinical".parse::<BmiScheme>().unwrap(), BmiScheme::Clinical);
        assert_eq!(
            "Sex-Specific".parse::<BmiScheme>().unwrap(),
            BmiScheme::SexSpecific
        );
        assert!("who".parse::<BmiScheme>().is_err());
    }

    #[test]
    fn test_tier_ordering() {
        assert!(SeverityTier::Normal < SeverityTier::Caution);
        assert!(SeverityTier::Caution < SeverityTier::Risk);
    }
}
