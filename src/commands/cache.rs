use chrono::{DateTime, Local};
use clap::Subcommand;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::cancellation::CancellationToken;
use crate::config::AurConfig;
use crate::error::Result;
use crate::metadata::{HttpMetadataSource, MetadataSource, SnapshotStore};

#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Download a fresh copy of the AUR package snapshot
    Refresh,
    /// Show snapshot information
    Info,
    /// Delete the local package snapshot
    Clear,
}

impl CacheCommand {
    pub fn execute(self, token: &CancellationToken, config: &AurConfig) -> Result<()> {
        match self {
            CacheCommand::Refresh => refresh_snapshot(token, config),
            CacheCommand::Info => show_snapshot_info(config),
            CacheCommand::Clear => clear_snapshot(config),
        }
    }
}

fn refresh_snapshot(token: &CancellationToken, config: &AurConfig) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("Refreshing package snapshot from the AUR...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let source = HttpMetadataSource::new(&config.aur_url, config.timeout());
    let store = SnapshotStore::new(config.snapshot_path(), config.snapshot_max_age());

    let result = source.load(token).and_then(|value| {
        store.save(&value)?;
        Ok(value)
    });

    spinner.finish_and_clear();
    let value = result?;

    println!("{} Snapshot refreshed successfully", "✓".green().bold());
    let count = value.as_array().map(Vec::len).unwrap_or(0);
    println!("  - {} packages available", count.to_string().cyan());

    Ok(())
}

fn show_snapshot_info(config: &AurConfig) -> Result<()> {
    let path = config.snapshot_path();

    if !path.exists() {
        println!("{} No snapshot found", "✗".red());
        println!(
            "\n{}: Run {} to download the AUR package snapshot.",
            "Solution".yellow().bold(),
            "'aurum cache refresh'".cyan()
        );
        return Ok(());
    }

    let metadata = std::fs::metadata(&path)?;

    println!("Snapshot Information:");
    println!("  Location: {}", path.display());
    println!("  Size: {} KB", metadata.len() / 1024);
    if let Ok(modified) = metadata.modified() {
        let modified: DateTime<Local> = modified.into();
        println!("  Last updated: {}", modified.format("%Y-%m-%d %H:%M:%S"));
    }

    let store = SnapshotStore::new(path, config.snapshot_max_age());
    let snapshot = store.load()?;
    let count = snapshot.as_array().map(Vec::len).unwrap_or(0);
    println!("  Packages: {count}");
    println!("  Fresh: {}", if store.is_fresh() { "yes" } else { "no" });

    Ok(())
}

fn clear_snapshot(config: &AurConfig) -> Result<()> {
    let path = config.snapshot_path();

    if path.exists() {
        std::fs::remove_file(&path)?;
        println!("{} Snapshot cleared successfully", "✓".green().bold());
    } else {
        println!("No snapshot to clear");
    }

    Ok(())
}
