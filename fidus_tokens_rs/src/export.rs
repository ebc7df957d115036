//! Serialization of token sets to the two export formats, plus the file
//! naming scheme used by `fitok export`.
//!
//! The JSON object maps derived names to raw values and is lossy: variable
//! and category are dropped, and tokens sharing a derived name collapse to
//! one entry with the last-processed value. That collapse is long-standing
//! documented behavior; [`name_collisions`] lets callers warn about it
//! instead of silently "fixing" it. The CSS block keys by variable and
//! preserves every entry in order.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use crate::types::{DesignToken, ExportFormat, TokenCategory};

/// Serialize the token set in the given format.
pub fn serialize_tokens(tokens: &[DesignToken], format: ExportFormat) -> String {
    match format {
        ExportFormat::Json => {
            let mut map = serde_json::Map::new();
            for token in tokens {
                map.insert(token.name.clone(), Value::String(token.value.clone()));
            }
            serde_json::to_string_pretty(&Value::Object(map)).expect("string map serializes")
        }
        ExportFormat::Css => {
            let lines: Vec<String> = tokens
                .iter()
                .map(|token| format!("  {}: {};", token.variable, token.value))
                .collect();
            format!(":root {{\n{}\n}}", lines.join("\n"))
        }
    }
}

/// Serialize one token for the per-card copy action: the raw value in JSON
/// format, the full declaration line in CSS format.
pub fn single_token_snippet(token: &DesignToken, format: ExportFormat) -> String {
    match format {
        ExportFormat::Json => token.value.clone(),
        ExportFormat::Css => format!("{}: {};", token.variable, token.value),
    }
}

/// Derived names that appear more than once in the set, in first-seen order.
pub fn name_collisions(tokens: &[DesignToken]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut collisions = Vec::new();
    for token in tokens {
        if !seen.insert(token.name.as_str()) && !collisions.contains(&token.name) {
            collisions.push(token.name.clone());
        }
    }
    collisions
}

/// Default export file name: `fidus-<category>-tokens[-filtered].<ext>`,
/// the category segment omitted for unscoped exports.
pub fn export_filename(
    category: Option<TokenCategory>,
    filtered: bool,
    format: ExportFormat,
) -> String {
    let mut stem = String::from("fidus");
    if let Some(category) = category {
        stem.push('-');
        stem.push_str(category.slug());
    }
    stem.push_str("-tokens");
    if filtered {
        stem.push_str("-filtered");
    }
    format!("{stem}.{}", format.extension())
}

pub fn write_export(path: &Path, content: &str) -> anyhow::Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
