//! Manifest normalization
//!
//! Validates the top-level manifest object, applies defaults, de-duplicates
//! entries by id, and enforces that at least one playable file survives.
//! The output is a fully-populated [`Manifest`] that downstream code can
//! trust without further checks.

use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SoundbankError};
use crate::manifest::coerce::{to_number, trimmed_string};
use crate::manifest::entry::{sanitize_entry, FileEntry};

/// Formats assumed when the manifest does not declare any.
pub const DEFAULT_FORMATS: [&str; 2] = ["webm", "mp3"];

/// Default manifest time-to-live in hours.
pub const DEFAULT_TTL_HOURS: f64 = 3.0;

/// Loudness normalization settings, passed through for consumer use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationSettings {
    /// Target integrated loudness in LUFS (default -14).
    pub target_lufs: f64,

    /// True-peak ceiling in dBTP (default -1).
    pub peak_dbtp: f64,
}

impl Default for NormalizationSettings {
    fn default() -> Self {
        Self {
            target_lufs: -14.0,
            peak_dbtp: -1.0,
        }
    }
}

/// The validated, defaulted description of all playable audio files and
/// playback-related settings.
///
/// Constructed fresh on every load call and immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Manifest schema version (default 1).
    pub version: i64,

    /// Time-to-live in hours (default 3).
    pub ttl_hours: f64,

    /// Derived TTL in milliseconds; `None` when `ttl_hours` is not positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_ms: Option<u64>,

    /// Preferred audio formats, in order.
    pub formats: Vec<String>,

    /// Loudness normalization settings.
    pub normalization: NormalizationSettings,

    /// Whole-manifest cache validator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_etag: Option<String>,

    /// Prefix for resolving relative `src` values; resolution is owned by
    /// the consumer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Playable file entries, input order preserved, ids unique.
    pub files: Vec<FileEntry>,
}

/// Normalize a raw parsed manifest payload.
///
/// Per-entry problems are dropped with a diagnostic; only a non-object root
/// or an empty surviving file list fail the call.
pub fn normalize_manifest(raw: &Value) -> Result<Manifest> {
    let obj = raw.as_object().ok_or(SoundbankError::NotAnObject)?;

    let version = obj.get("version").and_then(Value::as_i64).unwrap_or(1);

    let ttl_hours = to_number(obj.get("ttlHours"), DEFAULT_TTL_HOURS);
    let ttl_ms = if ttl_hours > 0.0 {
        Some((ttl_hours * 60.0 * 60.0 * 1000.0).round() as u64)
    } else {
        None
    };

    let formats = normalize_formats(obj.get("formats"));
    let normalization = normalize_settings(obj.get("normalization"));
    let manifest_etag = trimmed_string(obj.get("manifestEtag"));
    let base_path = trimmed_string(obj.get("basePath"));

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut files: Vec<FileEntry> = Vec::new();
    if let Some(raw_files) = obj.get("files").and_then(Value::as_array) {
        for raw_entry in raw_files {
            let Some(entry) = sanitize_entry(raw_entry) else {
                continue;
            };
            if !seen_ids.insert(entry.id.clone()) {
                warn!("manifest: duplicate id skipped: {}", entry.id);
                continue;
            }
            files.push(entry);
        }
    }

    if files.is_empty() {
        return Err(SoundbankError::NoPlayableFiles);
    }

    Ok(Manifest {
        version,
        ttl_hours,
        ttl_ms,
        formats,
        normalization,
        manifest_etag,
        base_path,
        files,
    })
}

/// Apply the formats rule: fall back to the default sequence when the raw
/// field is absent, non-array, or empty; otherwise keep only string members
/// with a non-empty trim, as-is. A non-empty raw array that filters down to
/// nothing stays empty; there is no partial-to-full fallback.
fn normalize_formats(raw: Option<&Value>) -> Vec<String> {
    match raw.and_then(Value::as_array) {
        Some(formats) if !formats.is_empty() => formats
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect(),
        _ => DEFAULT_FORMATS.iter().map(|s| s.to_string()).collect(),
    }
}

fn normalize_settings(raw: Option<&Value>) -> NormalizationSettings {
    match raw.and_then(Value::as_object) {
        Some(obj) => NormalizationSettings {
            target_lufs: to_number(obj.get("targetLufs"), -14.0),
            peak_dbtp: to_number(obj.get("peakDbtp"), -1.0),
        },
        None => NormalizationSettings::default(),
    }
}
