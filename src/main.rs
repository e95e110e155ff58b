//! CLI entry point for kart-binding-editor
//!
//! Provides command-line interface for checking binding conflicts and
//! listing the bindings of every saved device configuration.

use clap::{Parser, Subcommand};
use colored::*;
use kart_binding_editor::core::conflict::ConflictDetector;
use kart_binding_editor::core::types::ActionRange;
use kart_binding_editor::devices::{DeviceList, FileStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kart-binding-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check for binding conflicts
    Check {
        /// Path to the devices file
        #[arg(short, long, default_value = "~/.config/kart-binding-editor/devices.json")]
        file: PathBuf,
    },

    /// List all device configurations and their bindings
    List {
        /// Path to the devices file
        #[arg(short, long, default_value = "~/.config/kart-binding-editor/devices.json")]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => check_conflicts(&file)?,
        Commands::List { file } => list_bindings(&file)?,
    }

    Ok(())
}

/// Loads the device list stored at `path`.
fn load_devices(path: &PathBuf) -> anyhow::Result<DeviceList> {
    // Expand tilde in path
    let expanded_path = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let store = FileStore::new(PathBuf::from(expanded_path.as_ref()));

    let mut devices = DeviceList::new(Box::new(store));
    let count = devices.load()?;
    println!(
        "{} Loaded {} device configuration{}\n",
        "✓".green(),
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(devices)
}

/// Check every device config for binding conflicts
fn check_conflicts(path: &PathBuf) -> anyhow::Result<()> {
    let devices = load_devices(path)?;

    let mut total = 0;
    for config in devices.configs() {
        for range in [ActionRange::Game, ActionRange::Menu] {
            let conflicts = ConflictDetector::scan(config, range).find_conflicts();
            for conflict in &conflicts {
                total += 1;
                println!(
                    "{} {} {}",
                    format!("Conflict {}", total).yellow().bold(),
                    config.name.bold(),
                    conflict.binding.cyan()
                );
                for action in &conflict.actions {
                    println!("  - {}", action);
                }
                println!();
            }
        }
    }

    if total == 0 {
        println!("{} {}", "✓".green().bold(), "No conflicts detected!".bold());
    } else {
        println!(
            "{} Found {} conflict{}",
            "✗".red().bold(),
            total,
            if total == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// List every device config's binding table
fn list_bindings(path: &PathBuf) -> anyhow::Result<()> {
    let devices = load_devices(path)?;

    for config in devices.configs() {
        let state = if config.enabled {
            "enabled".green()
        } else {
            "disabled".red()
        };
        println!("{} ({}, {})", config.name.bold(), config.kind, state);

        println!("  {}", "Game Keys".cyan());
        for action in ActionRange::Game.actions() {
            println!("    {:<12} {}", action.to_string(), config.binding(*action));
        }
        println!("  {}", "Menu Keys".cyan());
        for action in ActionRange::Menu.actions() {
            println!("    {:<12} {}", action.to_string(), config.binding(*action));
        }
        println!();
    }

    Ok(())
}
