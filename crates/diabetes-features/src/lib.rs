//! Feature assembly for the diabetes risk classifier.
//!
//! - **assembler**: validates a [`RawInput`](diabetes_model::RawInput) and emits
//!   the fixed-order [`FeatureVector`](diabetes_model::FeatureVector)
//! - **bmi**: BMI derivation from kilograms and feet, and BMI banding
//! - **config**: constant fields, input limits and the BMI scheme

pub mod assembler;
pub mod bmi;
pub mod config;

pub use assembler::{AssembledSubmission, FeatureAssembler};
pub use bmi::{FEET_TO_METERS, classify_bmi, compute_bmi, feet_to_meters};
pub use config::{AssemblerConfig, ConfigError, ConstantFields, InputLimits};
