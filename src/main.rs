//! Soundbank CLI - Manifest Toolkit
//!
//! Command-line interface for validating and enriching audio manifests.

use clap::Parser;
use env_logger::Env;
use log::info;

use soundbank::cli::{commands, Cli, Commands};
use soundbank::Result;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Soundbank Manifest Toolkit v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Soundbank Manifest Toolkit v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::GenColors { manifest } => commands::gen_colors(&manifest),
        Commands::GenEmojis { manifest } => commands::gen_emojis(&manifest),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Fetch { url } => commands::fetch(url),
    }
}
