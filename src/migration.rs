//! Migration generation — normalization and SQL statement assembly.
//!
//! Takes a parsed [`ToolRegistry`] and produces the `UPDATE tools …`
//! statements that persist each tool's `input_types`, `config_schema`, and
//! `output_type` columns. Pure text transformation: no database connection,
//! no I/O.
//!
//! String templating is acceptable here only because the identifier list is
//! fixed and the registry is a trusted build-time collaborator. Single quotes
//! are doubled inside the `config_schema` JSON literal and nowhere else —
//! preserving the original generator's asymmetric escaping rather than
//! silently hardening it.

use crate::registry::{ToolRecord, ToolRegistry};
use crate::types::Result;
use serde_json::{json, Value};
use tracing::debug;

/// Tool identifiers covered by the migration, in emission order.
///
/// Fixed at build time. Identifiers missing from the live registry (currently
/// `js-beautifier` and `js-minifier`) are skipped silently at generation
/// time; they stay listed so the migration picks them up if they land.
pub const TOOL_IDS: [&str; 17] = [
    "case-converter",
    "email-validator",
    "find-replace",
    "html-minifier",
    "integer-to-ip",
    "ip-range-calculator",
    "ip-to-integer",
    "ip-validator",
    "js-beautifier",
    "js-minifier",
    "markdown-linter",
    "reverse-text",
    "slug-generator",
    "sort-lines",
    "text-analyzer",
    "whitespace-visualizer",
    "word-counter",
];

/// A tool record with defaults applied and `config_schema` pre-serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTool {
    /// Accepted input types; defaults to `["text"]`.
    pub input_types: Vec<String>,

    /// Compact JSON text of the config schema; defaults to `"[]"`.
    pub config_schema_json: String,

    /// Output type; defaults to `"text"`.
    pub output_type: String,
}

/// Apply the defaulting rules to a registry record.
pub fn normalize(record: &ToolRecord) -> Result<NormalizedTool> {
    let input_types = record
        .input_types
        .clone()
        .unwrap_or_else(|| vec!["text".to_string()]);
    let config_schema: Value = record.config_schema.clone().unwrap_or_else(|| json!([]));
    let output_type = record
        .output_type
        .clone()
        .unwrap_or_else(|| "text".to_string());

    Ok(NormalizedTool {
        input_types,
        config_schema_json: serde_json::to_string(&config_schema)?,
        output_type,
    })
}

/// Double every single quote so the text is a valid SQL string literal body.
fn escape_single_quotes(s: &str) -> String {
    s.replace('\'', "''")
}

/// Render one `UPDATE` statement for a normalized tool.
///
/// Only the JSON literal is quote-escaped. Input types, output type, and the
/// identifier are embedded as-is (trusted, fixed registry).
fn statement(tool_id: &str, tool: &NormalizedTool) -> String {
    let array_elems: Vec<String> = tool
        .input_types
        .iter()
        .map(|t| format!("'{}'", t))
        .collect();

    format!(
        "UPDATE tools SET input_types = ARRAY[{}], config_schema = '{}'::jsonb, output_type = '{}' WHERE id = '{}';",
        array_elems.join(","),
        escape_single_quotes(&tool.config_schema_json),
        tool.output_type,
        tool_id
    )
}

/// Generate the full migration for a registry.
///
/// One statement per [`TOOL_IDS`] entry found in the registry, in list order,
/// joined with `\n`. Identifiers absent from the registry are skipped without
/// error. Returns an empty string when nothing matched.
pub fn generate(registry: &ToolRegistry) -> Result<String> {
    let mut statements = Vec::with_capacity(TOOL_IDS.len());

    for tool_id in TOOL_IDS {
        let Some(record) = registry.get(tool_id) else {
            debug!(tool_id, "not in registry, skipping");
            continue;
        };
        let normalized = normalize(record)?;
        statements.push(statement(tool_id, &normalized));
    }

    debug!(
        emitted = statements.len(),
        listed = TOOL_IDS.len(),
        "migration generated"
    );
    Ok(statements.join("\n"))
}
