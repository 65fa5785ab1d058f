//! Error types for configuration loading and validation.
//!
//! Responsibilities:
//! - Define one error variant per startup failure (missing value, missing resource,
//!   out-of-range number, unknown enum name, unparseable value).
//! - Tag every variant with a `ConfigErrorKind` so callers can branch on the
//!   failure category without matching on message text.
//!
//! Does NOT handle:
//! - Recovery. Every error here is fatal to startup; nothing retries or substitutes defaults.
//!
//! Invariants:
//! - Every variant names the offending environment key (except dotenv failures).
//! - `InvalidEnumValue` messages list the full allowed set.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Category tag carried by every [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    MissingRequiredValue,
    ResourceNotFound,
    OutOfRange,
    InvalidEnumValue,
    ParseError,
}

impl ConfigErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ConfigErrorKind::MissingRequiredValue => "MissingRequiredValue",
            ConfigErrorKind::ResourceNotFound => "ResourceNotFound",
            ConfigErrorKind::OutOfRange => "OutOfRange",
            ConfigErrorKind::InvalidEnumValue => "InvalidEnumValue",
            ConfigErrorKind::ParseError => "ParseError",
        }
    }
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort configuration construction.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} environment variable must be set")]
    MissingRequiredValue { var: String },

    #[error("{var}: file not found at {}", path.display())]
    ResourceNotFound { var: String, path: PathBuf },

    /// The existence check itself failed (permission denied, I/O error).
    #[error("{var}: unable to check {}: {source}", path.display())]
    ResourceUnreadable {
        var: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {var}: {message}")]
    OutOfRange { var: String, message: String },

    #[error("Invalid value for {var}: '{value}'. Must be one of {allowed:?}")]
    InvalidEnumValue {
        var: String,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("Failed to parse {var}: {message}")]
    ParseError { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// The failure category of this error.
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            ConfigError::MissingRequiredValue { .. } => ConfigErrorKind::MissingRequiredValue,
            ConfigError::ResourceNotFound { .. }
            | ConfigError::ResourceUnreadable { .. }
            | ConfigError::DotenvIo { .. } => ConfigErrorKind::ResourceNotFound,
            ConfigError::OutOfRange { .. } => ConfigErrorKind::OutOfRange,
            ConfigError::InvalidEnumValue { .. } => ConfigErrorKind::InvalidEnumValue,
            ConfigError::ParseError { .. }
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvUnknown => ConfigErrorKind::ParseError,
        }
    }

    /// The environment key this error is about, if any.
    pub fn var(&self) -> Option<&str> {
        match self {
            ConfigError::MissingRequiredValue { var }
            | ConfigError::ResourceNotFound { var, .. }
            | ConfigError::ResourceUnreadable { var, .. }
            | ConfigError::OutOfRange { var, .. }
            | ConfigError::InvalidEnumValue { var, .. }
            | ConfigError::ParseError { var, .. } => Some(var),
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => None,
        }
    }
}
