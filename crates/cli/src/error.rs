//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish startup failures.
//! - Map ConfigError kinds to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow / thiserror Display).
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors (bad flags, unknown subcommands).
//! - Exit codes 3-7 map one-to-one onto configuration error kinds.

use asde_config::{ConfigError, ConfigErrorKind};

/// Structured exit codes for asde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A required setting (e.g. FIREBASE_PROJECT_ID) is unset or empty.
    MissingRequiredValue = 3,

    /// A referenced file (e.g. the Firebase credentials) does not exist.
    ResourceNotFound = 4,

    /// A numeric setting is outside its allowed range.
    OutOfRange = 5,

    /// A setting names a value outside its allowed set.
    InvalidEnumValue = 6,

    /// A setting could not be parsed into its declared type.
    ParseError = 7,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<ConfigErrorKind> for ExitCode {
    fn from(kind: ConfigErrorKind) -> Self {
        match kind {
            ConfigErrorKind::MissingRequiredValue => ExitCode::MissingRequiredValue,
            ConfigErrorKind::ResourceNotFound => ExitCode::ResourceNotFound,
            ConfigErrorKind::OutOfRange => ExitCode::OutOfRange,
            ConfigErrorKind::InvalidEnumValue => ExitCode::InvalidEnumValue,
            ConfigErrorKind::ParseError => ExitCode::ParseError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        ExitCode::from(err.kind())
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
