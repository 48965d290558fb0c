//! Soundbank - Audio Manifest Toolkit
//!
//! Soundbank validates and enriches the JSON manifest consumed by a
//! front-end audio player:
//! 1. Manifest pipeline - sanitize entries, normalize the whole object,
//!    load over HTTP with cache-busting
//! 2. Enrichment tools - offline batch jobs that backfill missing color
//!    and emoji metadata into the manifest file
//!
//! # Architecture
//!
//! Data flows one direction: raw JSON → entry sanitizer → manifest
//! normalizer → consumer. The enrichment tools operate directly on the
//! JSON file and are run before deployment, not at load time.

pub mod cli;
pub mod enrich;
pub mod error;
pub mod manifest;

pub use error::{Result, SoundbankError};
pub use manifest::{normalize_manifest, ColorTheme, FileEntry, Manifest, ManifestLoader};
