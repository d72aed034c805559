//! Data model for the diabetes risk form.

pub mod bmi;
pub mod enums;
pub mod error;
pub mod feature;
pub mod input;
pub mod prediction;

pub use bmi::{BmiAssessment, BmiCategory, BmiScheme, SeverityTier};
pub use enums::{ConditionFlag, InputField, Sex, YesNo};
pub use error::{AssembleError, Result};
pub use feature::{FEATURE_COUNT, FeatureName, FeatureVector};
pub use input::RawInput;
pub use prediction::Prediction;
