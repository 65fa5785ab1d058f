//! Credential block for the Firebase state store.
//!
//! Responsibilities:
//! - Hold the Firebase project id and the path to its service-account credentials.
//! - Confirm, at construction, that the project id is set and the credentials file exists.
//!
//! Does NOT handle:
//! - Reading the credentials file or talking to Firebase.
//!
//! Invariants:
//! - A `FirebaseConfig` value only exists if validation passed.
//! - Validation order: project id first, then the credentials file.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::constants::{FIREBASE_CREDENTIALS_VAR, FIREBASE_PROJECT_ID_VAR};
use crate::loader::ConfigError;
use crate::validate::{require_exists, require_non_empty};

/// Firebase configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirebaseConfig {
    project_id: String,
    credentials_path: PathBuf,
}

impl FirebaseConfig {
    /// Build and validate a credential block.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredValue` if `project_id` is empty.
    /// - `ResourceNotFound` if no file exists at `credentials_path`.
    pub fn new(
        project_id: impl Into<String>,
        credentials_path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            project_id: project_id.into(),
            credentials_path: credentials_path.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-check the block's constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(FIREBASE_PROJECT_ID_VAR, &self.project_id)?;
        require_exists(FIREBASE_CREDENTIALS_VAR, &self.credentials_path)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }
}
