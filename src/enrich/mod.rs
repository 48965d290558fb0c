//! Enrichment Module
//!
//! Offline batch tools that backfill optional metadata directly into the
//! manifest file. Both generators share one skeleton: read the file, parse,
//! mutate the `files` array in memory, and write back only if something
//! changed. They operate on the raw JSON tree so fields they don't touch
//! survive a run verbatim.

pub mod colors;
pub mod emojis;

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SoundbankError};

/// Outcome of one enrichment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichOutcome {
    /// At least one entry was filled and the file was rewritten.
    Updated,
    /// Every entry already carried the metadata; the file was left alone.
    Unchanged,
}

/// Run a fill function over the manifest file's `files` array.
///
/// The fill receives the mutable array and reports whether it changed
/// anything. A manifest without a `files` array is a fatal error, and a
/// fill that errors aborts before any write. On change, the file is
/// rewritten pretty-printed with a trailing newline.
pub fn rewrite_manifest_file<F>(path: &Path, fill: F) -> Result<EnrichOutcome>
where
    F: FnOnce(&mut Vec<Value>) -> Result<bool>,
{
    let content = fs::read_to_string(path)?;
    let mut manifest: Value = serde_json::from_str(&content)?;

    let files = manifest
        .get_mut("files")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| SoundbankError::MissingFilesArray {
            path: path.to_path_buf(),
        })?;

    let updated = fill(files)?;
    if !updated {
        return Ok(EnrichOutcome::Unchanged);
    }

    let mut output = serde_json::to_string_pretty(&manifest)?;
    output.push('\n');
    fs::write(path, output)?;

    Ok(EnrichOutcome::Updated)
}

/// Entry id used in progress lines, tolerating malformed entries.
pub(crate) fn entry_id(entry: &Value) -> &str {
    entry.get("id").and_then(Value::as_str).unwrap_or("<no id>")
}

/// Loose truthiness over a JSON value.
///
/// The color generator's presence check is "any truthy value": `null`,
/// `false`, `0`, and `""` count as missing while `{}` counts as present.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
