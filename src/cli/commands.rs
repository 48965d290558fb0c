//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::path::Path;

use log::info;

use crate::enrich::{colors, emojis, EnrichOutcome};
use crate::error::Result;
use crate::manifest::{default_url, normalize_manifest, Manifest, ManifestLoader};

/// Run the color generator against a manifest file.
pub fn gen_colors(manifest_path: &Path) -> Result<()> {
    info!("Generating colors for: {}", manifest_path.display());

    match colors::run(manifest_path)? {
        EnrichOutcome::Updated => {
            println!("✓ Updated {} with color data", manifest_path.display());
        }
        EnrichOutcome::Unchanged => {
            println!("✓ All files already have color data");
        }
    }

    Ok(())
}

/// Run the emoji generator against a manifest file.
pub fn gen_emojis(manifest_path: &Path) -> Result<()> {
    info!("Generating emojis for: {}", manifest_path.display());

    match emojis::run(manifest_path)? {
        EnrichOutcome::Updated => {
            println!("✓ Updated {} with emoji data", manifest_path.display());
        }
        EnrichOutcome::Unchanged => {
            println!("✓ All files already have emoji data");
        }
    }

    Ok(())
}

/// Normalize a local manifest file and print a summary.
pub fn validate(path: &Path) -> Result<()> {
    info!("Validating manifest: {}", path.display());

    let content = fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    let manifest = normalize_manifest(&raw)?;

    println!("Manifest OK: {}", path.display());
    print_summary(&manifest);

    Ok(())
}

/// Fetch a remote manifest and print a summary.
pub fn fetch(url: Option<String>) -> Result<()> {
    let url = url.unwrap_or_else(default_url);
    info!("Fetching manifest: {}", url);

    let loader = ManifestLoader::new(&url);
    let manifest = loader.load()?;

    println!("Manifest loaded: {}", url);
    print_summary(&manifest);

    Ok(())
}

fn print_summary(manifest: &Manifest) {
    println!("  version: {}", manifest.version);
    match manifest.ttl_ms {
        Some(ttl_ms) => println!("  ttl: {}h ({} ms)", manifest.ttl_hours, ttl_ms),
        None => println!("  ttl: none"),
    }
    println!("  formats: {}", manifest.formats.join(", "));
    println!("  files: {}", manifest.files.len());
}
