//! Assembler configuration.
//!
//! Everything the assembler treats as policy rather than logic lives here:
//! the BMI bands to display, the constant health-access fields, and the
//! accepted input ranges. The defaults reproduce the deployed form; a TOML
//! file can override any subset.
//!
//! ```toml
//! bmi_scheme = "clinical"
//!
//! [constants]
//! chol_check = true
//! any_healthcare = true
//! no_doc_bc_cost = false
//!
//! [limits]
//! age = { min = 10, max = 100 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use diabetes_model::BmiScheme;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {message}")]
    Invalid { message: String },
}

/// Fields the form never asks for.
///
/// The classifier was trained on survey rows where these were collected; the
/// form assumes the population-level answer instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantFields {
    /// Cholesterol checked in the past five years.
    pub chol_check: bool,
    /// Has any kind of health-care coverage.
    pub any_healthcare: bool,
    /// Could not see a doctor because of cost.
    pub no_doc_bc_cost: bool,
}

impl Default for ConstantFields {
    fn default() -> Self {
        Self {
            chol_check: true,
            any_healthcare: true,
            no_doc_bc_cost: false,
        }
    }
}

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Inclusive floating-point range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Accepted ranges for each raw field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Age in whole years.
    pub age: IntRange,
    pub weight_kg: FloatRange,
    pub height_ft: FloatRange,
    /// Height options are offered at this resolution, starting at `height_ft.min`.
    pub height_step_ft: f64,
    pub gen_hlth: IntRange,
    /// Applies to both mental- and physical-health days.
    pub health_days: IntRange,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            age: IntRange::new(10, 100),
            weight_kg: FloatRange::new(30.0, 200.0),
            height_ft: FloatRange::new(3.0, 7.5),
            height_step_ft: 0.1,
            gen_hlth: IntRange::new(1, 5),
            health_days: IntRange::new(0, 30),
        }
    }
}

impl InputLimits {
    /// Heights the form offers, smallest first.
    pub fn height_options(&self) -> Vec<f64> {
        let steps = ((self.height_ft.max - self.height_ft.min) / self.height_step_ft).round();
        (0..=steps as i64)
            .map(|index| {
                let value = self.height_ft.min + index as f64 * self.height_step_ft;
                (value * 1e6).round() / 1e6
            })
            .collect()
    }

    /// True when `height_ft` sits on the option grid.
    pub fn is_on_height_grid(&self, height_ft: f64) -> bool {
        let steps = (height_ft - self.height_ft.min) / self.height_step_ft;
        (steps - steps.round()).abs() < 1e-6
    }
}

/// Full assembler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Bands used for the displayed BMI category.
    pub bmi_scheme: BmiScheme,
    pub constants: ConstantFields,
    pub limits: InputLimits,
}

impl AssemblerConfig {
    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|source| ConfigError::Toml { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), scheme = %config.bmi_scheme, "loaded assembler config");
        Ok(config)
    }

    /// Reject ranges that could never accept a value or would let BMI degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        let int_ranges = [
            ("age", limits.age),
            ("gen_hlth", limits.gen_hlth),
            ("health_days", limits.health_days),
        ];
        for (name, range) in int_ranges {
            if range.min > range.max {
                return Err(invalid(format!(
                    "limits.{name}: min {} exceeds max {}",
                    range.min, range.max
                )));
            }
        }
        for (name, range) in [("weight_kg", limits.weight_kg), ("height_ft", limits.height_ft)] {
            if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
                return Err(invalid(format!(
                    "limits.{name}: [{}, {}] is not a valid range",
                    range.min, range.max
                )));
            }
            if range.min <= 0.0 {
                return Err(invalid(format!("limits.{name}: min must be positive")));
            }
        }
        if !limits.height_step_ft.is_finite() || limits.height_step_ft <= 0.0 {
            return Err(invalid("limits.height_step_ft must be positive".to_string()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form() {
        let config = AssemblerConfig::default();
        assert_eq!(config.bmi_scheme, BmiScheme::Clinical);
        assert!(config.constants.chol_check);
        assert!(config.constants.any_healthcare);
        assert!(!config.constants.no_doc_bc_cost);
        assert_eq!(config.limits.age, IntRange::new(10, 100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn height_options_cover_three_to_seven_and_a_half_feet() {
        let options = InputLimits::default().height_options();
        assert_eq!(options.len(), 46);
        assert_eq!(options.first().copied(), Some(3.0));
        assert_eq!(options[25], 5.5);
        assert_eq!(options.last().copied(), Some(7.5));
    }

    #[test]
    fn height_grid() {
        let limits = InputLimits::default();
        assert!(limits.is_on_height_grid(5.9));
        assert!(limits.is_on_height_grid(7.5));
        assert!(!limits.is_on_height_grid(5.95));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AssemblerConfig::from_toml_str(
            r#"
bmi_scheme = "sex_specific"

[constants]
no_doc_bc_cost = true
"#,
        )
        .unwrap();
        assert_eq!(config.bmi_scheme, BmiScheme::SexSpecific);
        assert!(config.constants.chol_check);
        assert!(config.constants.no_doc_bc_cost);
        assert_eq!(config.limits, InputLimits::default());
    }

    #[test]
    fn rejects_inverted_range() {
        let err = AssemblerConfig::from_toml_str(
            r#"
[limits]
age = { min = 50, max = 20 }
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn rejects_unknown_scheme() {
        let err = AssemblerConfig::from_toml_str(r#"bmi_scheme = "who""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }
}
