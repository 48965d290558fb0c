//! File entry sanitization
//!
//! Turns one arbitrary raw JSON value into a fully-populated [`FileEntry`],
//! or rejects it. Rejection is a `None`, never an error: the normalizer
//! drops invalid entries and keeps going.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::manifest::coerce::{to_number, to_number_opt, trimmed_string};

/// Default category applied when an entry carries none.
pub const DEFAULT_CATEGORY: &str = "misc";

/// Per-entry visual theming data.
///
/// A color record exists only when `hue` coerces to a finite number; every
/// other field defaults independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTheme {
    pub hue: f64,

    /// Saturation percentage (default 85).
    pub saturation: f64,

    /// Lightness percentage (default 50).
    pub lightness: f64,

    /// Background gradient angle in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_angle: Option<f64>,

    /// First radial gradient anchor, free-form (e.g. `"35% 70%"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radial1_pos: Option<String>,

    /// Second radial gradient anchor, free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radial2_pos: Option<String>,
}

/// One playable asset's metadata record within the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Unique identifier within the manifest.
    pub id: String,

    /// Path or URL of the audio asset.
    pub src: String,

    /// Display name; consumers fall back to `id` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Grouping category (default `"misc"`).
    pub category: String,

    /// Playback gain (default 0; semantics owned by the consumer).
    pub gain: f64,

    /// Duration hint in milliseconds, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_hint_ms: Option<f64>,

    /// Per-file cache validator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Optional color theming.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorTheme>,

    /// Optional emoji tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// Validate and normalize one raw file entry.
///
/// Returns `None` when the input is not an object or lacks a non-empty
/// `id` or `src` after trimming. All other fields are defaulted per field.
pub fn sanitize_entry(raw: &Value) -> Option<FileEntry> {
    let obj = raw.as_object()?;

    let id = trimmed_string(obj.get("id"))?;
    let src = trimmed_string(obj.get("src"))?;

    let display = trimmed_string(obj.get("display"));
    let color = sanitize_color(obj.get("color"));
    let emoji = trimmed_string(obj.get("emoji"));

    Some(FileEntry {
        id,
        src,
        display,
        category: trimmed_string(obj.get("category"))
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        gain: to_number(obj.get("gain"), 0.0),
        duration_hint_ms: to_number_opt(obj.get("durationHintMs")),
        etag: trimmed_string(obj.get("etag")),
        color,
        emoji,
    })
}

/// Sanitize a raw color sub-record.
///
/// The record survives only when it is object-shaped and its `hue` is
/// present, non-null, and coerces to a finite number. Otherwise the whole
/// sub-record is discarded; there is no partially-kept color.
fn sanitize_color(raw: Option<&Value>) -> Option<ColorTheme> {
    let obj = raw?.as_object()?;

    // hue gates the whole record
    let hue_raw = obj.get("hue").filter(|v| !v.is_null())?;
    let hue = to_number_opt(Some(hue_raw))?;

    let position = |key: &str| match obj.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    };

    Some(ColorTheme {
        hue,
        saturation: to_number(obj.get("saturation"), 85.0),
        lightness: to_number(obj.get("lightness"), 50.0),
        bg_angle: to_number_opt(obj.get("bgAngle")),
        radial1_pos: position("radial1Pos"),
        radial2_pos: position("radial2Pos"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_accepts_minimal_entry() {
        let entry = sanitize_entry(&json!({"id": " kick ", "src": " kick.mp3 "})).unwrap();
        assert_eq!(entry.id, "kick");
        assert_eq!(entry.src, "kick.mp3");
        assert_eq!(entry.display, None);
        assert_eq!(entry.category, "misc");
        assert_eq!(entry.gain, 0.0);
        assert_eq!(entry.duration_hint_ms, None);
        assert_eq!(entry.etag, None);
        assert_eq!(entry.color, None);
        assert_eq!(entry.emoji, None);
    }

    #[test]
    fn test_rejects_non_objects_and_missing_keys() {
        assert_eq!(sanitize_entry(&json!(null)), None);
        assert_eq!(sanitize_entry(&json!("kick")), None);
        assert_eq!(sanitize_entry(&json!(["kick"])), None);
        assert_eq!(sanitize_entry(&json!({"id": "kick"})), None);
        assert_eq!(sanitize_entry(&json!({"src": "kick.mp3"})), None);
        assert_eq!(sanitize_entry(&json!({"id": "  ", "src": "kick.mp3"})), None);
        assert_eq!(sanitize_entry(&json!({"id": 5, "src": "kick.mp3"})), None);
    }

    #[test]
    fn test_full_entry_fields() {
        let entry = sanitize_entry(&json!({
            "id": "hat",
            "src": "hat.webm",
            "display": "  Hi-Hat  ",
            "category": " percussion ",
            "gain": "-3.5",
            "durationHintMs": 420,
            "etag": " abc123 ",
            "emoji": " 🥁 "
        }))
        .unwrap();

        assert_eq!(entry.display, Some("Hi-Hat".to_string()));
        assert_eq!(entry.category, "percussion");
        assert_eq!(entry.gain, -3.5);
        assert_eq!(entry.duration_hint_ms, Some(420.0));
        assert_eq!(entry.etag, Some("abc123".to_string()));
        assert_eq!(entry.emoji, Some("🥁".to_string()));
    }

    #[test]
    fn test_color_present_iff_hue_is_finite() {
        let with_numeric_string = sanitize_entry(&json!({
            "id": "a", "src": "a.mp3",
            "color": {"hue": "120"}
        }))
        .unwrap();
        let color = with_numeric_string.color.unwrap();
        assert_eq!(color.hue, 120.0);
        assert_eq!(color.saturation, 85.0);
        assert_eq!(color.lightness, 50.0);
        assert_eq!(color.bg_angle, None);

        let with_bad_hue = sanitize_entry(&json!({
            "id": "a", "src": "a.mp3",
            "color": {"hue": "abc", "saturation": 90}
        }))
        .unwrap();
        assert_eq!(with_bad_hue.color, None);

        let without_hue = sanitize_entry(&json!({
            "id": "a", "src": "a.mp3",
            "color": {"saturation": 90}
        }))
        .unwrap();
        assert_eq!(without_hue.color, None);

        let null_hue = sanitize_entry(&json!({
            "id": "a", "src": "a.mp3",
            "color": {"hue": null}
        }))
        .unwrap();
        assert_eq!(null_hue.color, None);

        let non_object_color = sanitize_entry(&json!({
            "id": "a", "src": "a.mp3",
            "color": "red"
        }))
        .unwrap();
        assert_eq!(non_object_color.color, None);
    }

    #[test]
    fn test_color_subfields_default_independently() {
        let entry = sanitize_entry(&json!({
            "id": "a", "src": "a.mp3",
            "color": {
                "hue": 200,
                "saturation": "not a number",
                "bgAngle": 45,
                "radial1Pos": "20% 80%",
                "radial2Pos": ""
            }
        }))
        .unwrap();

        let color = entry.color.unwrap();
        assert_eq!(color.hue, 200.0);
        assert_eq!(color.saturation, 85.0);
        assert_eq!(color.lightness, 50.0);
        assert_eq!(color.bg_angle, Some(45.0));
        // Radial anchors are free-form strings, kept verbatim.
        assert_eq!(color.radial1_pos, Some("20% 80%".to_string()));
        assert_eq!(color.radial2_pos, Some("".to_string()));
    }

    #[test]
    fn test_blank_emoji_is_absent() {
        let entry = sanitize_entry(&json!({
            "id": "a", "src": "a.mp3", "emoji": "   "
        }))
        .unwrap();
        assert_eq!(entry.emoji, None);
    }
}
