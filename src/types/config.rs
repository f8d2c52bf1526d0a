//! Configuration structures.
//!
//! The generator carries no runtime configuration surface: no CLI flags, no
//! environment lookups, no config files. The identifier list and the registry
//! source are fixed at build time, so `Config::default()` is the only
//! configuration the binary ever uses. The structs stay serde-capable for
//! embedding in tests.

use serde::{Deserialize, Serialize};

/// Inline Node.js program that dumps the registry as JSON on stdout.
///
/// The collaborator module owns the registry shape; we only require that its
/// `TOOLS` export serializes to a JSON object keyed by tool identifier.
const REGISTRY_DUMP_SCRIPT: &str =
    "import('./lib/tools.js').then(m => process.stdout.write(JSON.stringify(m.TOOLS)))";

/// Global generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Registry collaborator invocation.
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Registry collaborator invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Program to invoke.
    pub command: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            command: "node".to_string(),
            args: vec!["-e".to_string(), REGISTRY_DUMP_SCRIPT.to_string()],
        }
    }
}
