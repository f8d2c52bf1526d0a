//! Core types for the migration generator.
//!
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Registry collaborator invocation settings

mod config;
mod errors;

pub use config::{Config, RegistryConfig};
pub use errors::{Error, Result};
