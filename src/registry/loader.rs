//! Registry collaborator invocation.
//!
//! The registry lives in a Node.js module; we spawn one subprocess, await it
//! to completion, and parse its stdout as the JSON tool map. No timeout or
//! cancellation beyond what the OS provides — this is a one-shot offline
//! tool, and any failure aborts the whole run.

use super::ToolRegistry;
use crate::types::{Error, RegistryConfig, Result};
use tokio::process::Command;
use tracing::debug;

/// Invoke the registry collaborator and parse its output.
///
/// Fatal on spawn failure, non-zero exit, non-UTF-8 output, or malformed
/// JSON.
pub async fn fetch_registry(config: &RegistryConfig) -> Result<ToolRegistry> {
    debug!(command = %config.command, args = ?config.args, "invoking registry collaborator");

    let output = Command::new(&config.command)
        .args(&config.args)
        .output()
        .await
        .map_err(|e| Error::registry(format!("failed to invoke '{}': {}", config.command, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::registry(format!(
            "'{}' exited with {}: {}",
            config.command,
            output.status,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|e| Error::registry(format!("registry output is not UTF-8: {}", e)))?;

    let registry = ToolRegistry::from_json(&stdout)?;
    debug!(tools = registry.len(), "registry loaded");

    Ok(registry)
}
