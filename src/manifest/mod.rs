//! Manifest Module
//!
//! Raw JSON flows one direction: per-entry sanitization, whole-manifest
//! normalization, then out to the consumer as a typed [`Manifest`]. The
//! loader wraps the same pipeline behind an HTTP fetch.

pub mod coerce;
pub mod entry;
pub mod loader;
pub mod normalize;

pub use entry::{sanitize_entry, ColorTheme, FileEntry};
pub use loader::{default_url, ManifestLoader, DEFAULT_MANIFEST_URL};
pub use normalize::{normalize_manifest, Manifest, NormalizationSettings, DEFAULT_FORMATS};
