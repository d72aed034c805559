#![deny(unsafe_code)]

//! Pinned model artifacts.
//!
//! A TOML manifest names the artifact file and its SHA-256. The artifact is
//! only parsed after the digest matches, so a retrained model cannot be
//! swapped in without updating the pin.
//!
//! ```toml
//! [manifest]
//! schema = "diabetes-risk.model"
//! schema_version = 1
//!
//! [model]
//! kind = "logistic"
//! path = "logistic.json"
//! sha256 = "..."
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use diabetes_model::{FeatureVector, Prediction};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ClassifierError;
use crate::hash::{is_sha256_hex, sha256_hex};
use crate::model::{Classifier, LOGISTIC_KIND, LogisticModel};

pub const MANIFEST_SCHEMA: &str = "diabetes-risk.model";
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelManifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub notes: Option<ManifestNotes>,
    pub model: ManifestModel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestNotes {
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestModel {
    pub kind: String,
    /// Artifact path, relative to the manifest.
    pub path: String,
    pub sha256: String,
}

impl ModelManifest {
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ClassifierError> {
        let manifest: Self = toml::from_str(contents).map_err(|source| ClassifierError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        if manifest.manifest.schema != MANIFEST_SCHEMA
            || manifest.manifest.schema_version != MANIFEST_SCHEMA_VERSION
        {
            return Err(ClassifierError::UnsupportedSchema {
                schema: manifest.manifest.schema.clone(),
                version: manifest.manifest.schema_version,
            });
        }
        if !is_sha256_hex(&manifest.model.sha256) {
            return Err(ClassifierError::InvalidSha256 {
                message: format!(
                    "{:?} is not 64 lowercase hex characters",
                    manifest.model.sha256
                ),
            });
        }
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let contents = fs::read_to_string(path).map_err(|e| ClassifierError::io(path, e))?;
        Self::from_toml_str(&contents, path)
    }
}

/// A verified, loaded model ready to score submissions.
///
/// Created once at startup and passed to whatever needs predictions.
pub struct ModelHandle {
    artifact_path: PathBuf,
    sha256: String,
    classifier: Box<dyn Classifier + Send + Sync>,
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("artifact_path", &self.artifact_path)
            .field("sha256", &self.sha256)
            .finish_non_exhaustive()
    }
}

impl ModelHandle {
    /// Wraps an already-constructed classifier (tests, alternative backends).
    pub fn from_classifier(
        artifact_path: impl Into<PathBuf>,
        classifier: Box<dyn Classifier + Send + Sync>,
    ) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            sha256: String::new(),
            classifier,
        }
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Digest of the loaded artifact (empty when not loaded from a manifest).
    pub fn sha256(&self) -> &str {
        &self.sha256
    }
}

impl Classifier for ModelHandle {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ClassifierError> {
        self.classifier.predict(features)
    }
}

/// Loads the model described by the manifest at `manifest_path`.
///
/// # Errors
///
/// Fails when the manifest or artifact cannot be read or parsed, when the
/// artifact digest differs from the pin, or when the artifact does not
/// match the canonical feature order.
pub fn load_model(manifest_path: &Path) -> Result<ModelHandle, ClassifierError> {
    let manifest = ModelManifest::load(manifest_path)?;
    let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let artifact_path = base.join(&manifest.model.path);
    let bytes = fs::read(&artifact_path).map_err(|e| ClassifierError::io(&artifact_path, e))?;

    let actual = sha256_hex(&bytes);
    if actual != manifest.model.sha256 {
        return Err(ClassifierError::Sha256Mismatch {
            path: artifact_path,
            expected: manifest.model.sha256,
            actual,
        });
    }

    let classifier: Box<dyn Classifier + Send + Sync> = match manifest.model.kind.as_str() {
        LOGISTIC_KIND => Box::new(LogisticModel::from_json_slice(&bytes, &artifact_path)?),
        other => {
            return Err(ClassifierError::UnsupportedKind {
                kind: other.to_string(),
            });
        }
    };

    info!(
        path = %artifact_path.display(),
        kind = %manifest.model.kind,
        sha256 = %actual,
        "loaded model"
    );
    Ok(ModelHandle {
        artifact_path,
        sha256: actual,
        classifier,
    })
}
