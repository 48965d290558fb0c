//! Emoji generation
//!
//! Backfills missing `emoji` tags by keyword matching over each entry's
//! display name and id, with category and default fallbacks, and enforces
//! uniqueness across the whole manifest. The keyword table is an ordered
//! priority list: first containment match wins.

use std::collections::HashSet;
use std::path::Path;

use log::{info, warn};
use serde_json::{json, Value};

use crate::enrich::{entry_id, rewrite_manifest_file, EnrichOutcome};
use crate::error::{Result, SoundbankError};

/// Category assumed when an entry carries none.
const FALLBACK_CATEGORY: &str = "music";

/// Emoji used when nothing matches at all.
const DEFAULT_EMOJI: &str = "🎵";

/// Keyword -> emoji suggestions, checked in order against the lowercased
/// concatenation of display and id. Order is the precedence rule.
const KEYWORD_EMOJIS: &[(&str, &str)] = &[
    // People and names
    ("alma", "👶"),
    ("silas", "👨"),
    ("barn", "👶"),
    ("babe", "👶"),
    ("baby", "👶"),
    ("danser", "💃"),
    ("dance", "💃"),
    ("dancing", "💃"),
    // Nature and animals
    ("dyr", "🦋"),
    ("dyredans", "🦋"),
    ("skog", "🌲"),
    ("skogens", "🌲"),
    ("hemmeligheter", "🔮"),
    ("hemmelighet", "🔮"),
    // Music and sounds
    ("rumpa", "🎵"),
    ("rumpemannen", "🎸"),
    ("music", "🎵"),
    ("song", "🎵"),
    // Moonlight and night
    ("moonlight", "🌙"),
    ("moon", "🌙"),
    ("night", "🌙"),
    // Colors
    ("farger", "🎨"),
    ("color", "🎨"),
    ("farge", "🎨"),
    // Disappearing/mystery
    ("forsvant", "✨"),
    ("disappear", "✨"),
    ("vanished", "✨"),
];

/// Category fallbacks when no keyword matches.
const CATEGORY_EMOJIS: &[(&str, &str)] = &[
    ("music", "🎵"),
    ("voice", "🎤"),
    ("jingle", "🔔"),
    ("misc", "🎶"),
];

/// Alternatives tried, in order, when the primary suggestion is taken.
const EMOJI_ALTERNATIVES: &[(&str, &[&str])] = &[
    ("👶", &["👨‍👩‍👧", "👧", "👨", "👩"]),
    ("💃", &["🕺", "🎵", "🎶", "🎸"]),
    ("🌙", &["⭐", "✨", "🌃", "🌌"]),
    ("🦋", &["🐛", "🌺", "🌸", "🌼"]),
    ("🌲", &["🌳", "🌴", "🍃", "🌿"]),
    ("🔮", &["✨", "🌟", "💫", "⭐"]),
    ("🎵", &["🎶", "🎸", "🎹", "🎺"]),
    ("🎸", &["🎵", "🎶", "🎹", "🎤"]),
    ("🎨", &["🌈", "✨", "🌟", "💫"]),
    ("✨", &["🌟", "💫", "⭐", "🔮"]),
];

/// Last-resort pool when every alternative is taken.
const COMMON_EMOJIS: &[&str] = &[
    "🎵", "🎶", "🎸", "🎹", "🎺", "🎤", "🎧", "🎼", "🎻", "🥁", "🎪", "🎭", "🎨", "🎬", "🎯",
    "🎲", "🎰", "🎳", "🎴", "🃏", "🎴", "🀄", "🎲", "🎯", "🎪", "🎭", "🎨", "🎬",
];

/// Suggest an emoji for an entry by keyword, then category, then default.
pub fn suggest_emoji(display: &str, id: &str, category: &str) -> &'static str {
    let text = format!("{} {}", display, id).to_lowercase();

    for (keyword, emoji) in KEYWORD_EMOJIS {
        if text.contains(keyword) {
            return emoji;
        }
    }

    CATEGORY_EMOJIS
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_EMOJI)
}

/// Pick an emoji not yet in `used`, walking the suggestion's alternative
/// list and then the common pool. When everything is exhausted the primary
/// suggestion is accepted anyway, with a warning; the whole-manifest audit
/// catches the duplicate afterwards.
fn find_unique_emoji(used: &HashSet<String>, display: &str, id: &str, category: &str) -> String {
    let primary = suggest_emoji(display, id, category);
    if !used.contains(primary) {
        return primary.to_string();
    }

    let alternatives = EMOJI_ALTERNATIVES
        .iter()
        .find(|(emoji, _)| *emoji == primary)
        .map(|(_, alts)| *alts)
        .unwrap_or(&[]);
    for alt in alternatives {
        if !used.contains(*alt) {
            return (*alt).to_string();
        }
    }

    for emoji in COMMON_EMOJIS {
        if !used.contains(*emoji) {
            return (*emoji).to_string();
        }
    }

    warn!(
        "Could not find unique emoji for {}, using {} (may be duplicate)",
        display, primary
    );
    primary.to_string()
}

/// Fill missing emojis across the files array and audit uniqueness.
///
/// Emojis already present anywhere in the manifest are reserved before any
/// assignment. After processing, any duplicate across the whole manifest
/// (including one between a manual emoji and a generated one) is fatal.
pub fn fill_emojis(files: &mut [Value]) -> Result<bool> {
    let mut used: HashSet<String> = files
        .iter()
        .filter_map(|f| f.get("emoji").and_then(Value::as_str))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let mut updated = false;

    for (index, file) in files.iter_mut().enumerate() {
        if !file.is_object() {
            warn!("emojis: skipping non-object entry at index {}", index);
            continue;
        }

        let existing = file
            .get("emoji")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty());
        if let Some(emoji) = existing {
            info!("Skipping {} (already has emoji: {})", entry_id(file), emoji);
            continue;
        }

        let display = file.get("display").and_then(Value::as_str).unwrap_or("");
        let id = file.get("id").and_then(Value::as_str).unwrap_or("");
        let category = file
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or(FALLBACK_CATEGORY);

        let emoji = find_unique_emoji(&used, display, id, category);
        info!("Generated emoji for {}: {}", entry_id(file), emoji);
        used.insert(emoji.clone());
        file["emoji"] = json!(emoji);
        updated = true;
    }

    audit_uniqueness(files)?;

    Ok(updated)
}

/// Whole-manifest uniqueness audit. Runs even when nothing was generated,
/// so pre-existing manual duplicates also abort the tool.
fn audit_uniqueness(files: &[Value]) -> Result<()> {
    let emojis: Vec<&str> = files
        .iter()
        .filter_map(|f| f.get("emoji").and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for &emoji in &emojis {
        if !seen.insert(emoji) {
            duplicates.push(emoji.to_string());
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(SoundbankError::DuplicateEmojis { duplicates })
    }
}

/// Run the emoji generator against a manifest file on disk.
pub fn run(path: &Path) -> Result<EnrichOutcome> {
    rewrite_manifest_file(path, |files| fill_emojis(files))
}
