use thiserror::Error;

use crate::enums::InputField;

/// Failure to turn a form submission into a feature vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssembleError {
    /// A value is out of range or not one of the allowed categories.
    #[error("invalid {field}: {reason}")]
    Validation { field: InputField, reason: String },

    /// A required field was not supplied.
    #[error("missing required field: {field}")]
    IncompleteInput { field: InputField },

    /// A derived value came out degenerate (for example a non-positive height).
    #[error("cannot derive {derived}: {reason}")]
    Derivation {
        derived: &'static str,
        reason: String,
    },
}

impl AssembleError {
    pub fn validation(field: InputField, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Field the user has to correct, if the error points at one.
    pub fn field(&self) -> Option<InputField> {
        match self {
            Self::Validation { field, .. } | Self::IncompleteInput { field } => Some(*field),
            Self::Derivation { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssembleError>;
