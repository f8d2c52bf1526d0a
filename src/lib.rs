//! # tool-migrate — tools-table migration generator
//!
//! One-shot generator that bridges the Node.js tool registry and SQL:
//! - Invokes the registry collaborator and reads the tool map as JSON
//! - Applies per-field defaults (`input_types`, `config_schema`, `output_type`)
//! - Emits one `UPDATE tools SET … WHERE id = '…';` statement per known tool
//!
//! ## Pipeline
//!
//! ```text
//!   node (registry dump) → ToolRegistry → normalize → SQL text → stdout
//! ```
//!
//! The generated SQL is written to stdout for manual or separate-tool
//! execution; this crate never touches a database itself. Logs go to stderr
//! so stdout stays clean.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod migration;
pub mod registry;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, RegistryConfig, Result};
