//! Migration generator entry point.
//!
//! Invokes the registry collaborator, generates the tools-table migration,
//! and prints it to stdout. Exits non-zero if the collaborator cannot be
//! invoked or its output is malformed — no partial SQL is ever emitted.

use tool_migrate::{migration, registry, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize observability (stderr; stdout is reserved for the SQL)
    tool_migrate::observability::init_tracing();

    // Fixed configuration — no CLI flags, no env lookups
    let config = Config::default();

    let registry = registry::fetch_registry(&config.registry).await?;
    let sql = migration::generate(&registry)?;

    println!("{sql}");

    Ok(())
}
