//! Configuration loader for environment variables.
//!
//! Responsibilities:
//! - Read raw settings from the process environment or an injected key-value source.
//! - Coerce raw strings to typed values and apply documented defaults.
//! - Provide a builder-pattern `ConfigLoader` that yields a validated `AsdeConfig`.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Constraint checks on typed values (see the `types` blocks and `validate`).
//!
//! Invariants / Assumptions:
//! - Explicit builder overrides applied after `from_env()` take precedence over
//!   environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod source;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{parse_bool, parse_int, parse_log_level};
pub use error::{ConfigError, ConfigErrorKind};
pub use source::{EnvSource, ProcessEnv};
