//! Configuration type definitions for ASDE.
//!
//! Responsibilities:
//! - Define the sub-configuration blocks (credentials, data source) and the root config.
//! - Define the log verbosity enum.
//!
//! Does NOT handle:
//! - Reading or coercing raw environment values (see `loader` module).
//!
//! Invariants:
//! - Every block validates itself on construction; no partially-valid block is observable.
//! - All fields are private and exposed through read-only accessors.

mod config;
mod data;
mod firebase;
mod log_level;

pub use config::AsdeConfig;
pub use data::DataConfig;
pub use firebase::FirebaseConfig;
pub use log_level::LogLevel;
