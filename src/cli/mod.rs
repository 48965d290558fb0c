//! CLI Module
//!
//! Command-line interface for the Soundbank manifest toolkit.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Soundbank - manifest validation and enrichment for web audio players
#[derive(Parser, Debug)]
#[command(name = "soundbank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Backfill missing color themes in a manifest file
    #[command(name = "gen-colors")]
    GenColors {
        /// Path to the manifest file
        #[arg(short, long, default_value = "manifest.json")]
        manifest: PathBuf,
    },

    /// Backfill missing emoji tags in a manifest file
    #[command(name = "gen-emojis")]
    GenEmojis {
        /// Path to the manifest file
        #[arg(short, long, default_value = "manifest.json")]
        manifest: PathBuf,
    },

    /// Validate and normalize a local manifest file
    #[command(name = "validate")]
    Validate {
        /// Path to the manifest file
        path: PathBuf,
    },

    /// Fetch and normalize a remote manifest
    #[command(name = "fetch")]
    Fetch {
        /// Manifest URL (defaults to SOUNDBANK_MANIFEST_URL)
        #[arg(short, long)]
        url: Option<String>,
    },
}
