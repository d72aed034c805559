//! Classifier boundary for diabetes risk prediction.
//!
//! - **model**: the [`Classifier`] trait and the logistic-regression artifact
//! - **manifest**: SHA-256 pinned model manifests and [`ModelHandle`]
//! - **hash**: digest helpers

pub mod error;
pub mod hash;
pub mod manifest;
pub mod model;

pub use error::ClassifierError;
pub use manifest::{ModelHandle, ModelManifest, load_model};
pub use model::{Classifier, LogisticModel};
