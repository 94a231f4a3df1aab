// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Undangan - wedding-invitation message manager.
//!
//! This is the binary entry point: template and guest management,
//! personalized previews, WhatsApp deep links, text export, and an
//! interactive shell, all over the local SQLite store.

mod clipboard;
mod copy;
mod doctor;
mod export;
mod guests;
mod preview;
mod selection;
mod send;
mod shell;
mod templates;

use clap::{Parser, Subcommand};
use colored::Colorize;
use undangan_config::UndanganConfig;
use undangan_core::UndanganError;
use undangan_storage::Store;

/// Undangan - wedding-invitation message manager.
#[derive(Parser, Debug)]
#[command(name = "undangan", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage message templates.
    Template {
        #[command(subcommand)]
        command: templates::TemplateCommand,
    },
    /// Manage the guest list.
    Guest {
        #[command(subcommand)]
        command: guests::GuestCommand,
    },
    /// Render personalized messages for the current selection.
    Preview(preview::PreviewArgs),
    /// Print WhatsApp deep links for the current selection.
    Send(send::SendArgs),
    /// Write the plain-text export of personalized messages.
    Export(export::ExportArgs),
    /// Copy personalized messages to the system clipboard.
    Copy(copy::CopyArgs),
    /// Launch the interactive shell.
    Shell,
    /// Run environment diagnostics.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Copy the database to a backup file.
    Backup {
        /// Destination path for the backup.
        path: String,
    },
    /// Restore the database from a backup file.
    Restore {
        /// Backup file to restore from.
        path: String,
    },
    /// Remove all stored templates, guests, and settings.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match undangan_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            undangan_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    if let Err(err) = run(cli, config).await {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: UndanganConfig) -> Result<(), UndanganError> {
    match cli.command {
        Commands::Template { command } => {
            let store = Store::open(&config.storage).await?;
            templates::run(&store, &config, command).await
        }
        Commands::Guest { command } => {
            let store = Store::open(&config.storage).await?;
            guests::run(&store, command).await
        }
        Commands::Preview(args) => {
            let store = Store::open(&config.storage).await?;
            preview::run(&store, args).await
        }
        Commands::Send(args) => {
            let store = Store::open(&config.storage).await?;
            send::run(&store, &config, args).await
        }
        Commands::Export(args) => {
            let store = Store::open(&config.storage).await?;
            export::run(&store, args).await
        }
        Commands::Copy(args) => {
            let store = Store::open(&config.storage).await?;
            copy::run(&store, &clipboard::SystemClipboard, args).await
        }
        Commands::Shell => {
            let store = Store::open(&config.storage).await?;
            shell::run(store, &config).await
        }
        Commands::Doctor { plain } => doctor::run(&config, plain).await,
        Commands::Backup { path } => {
            undangan_storage::backup::run_backup(&config.storage.database_path, &path)?;
            println!("backup written to {path}");
            Ok(())
        }
        Commands::Restore { path } => {
            undangan_storage::backup::run_restore(&config.storage.database_path, &path)?;
            println!("database restored from {path}");
            Ok(())
        }
        Commands::Clear { yes } => {
            if !yes && !confirm("Remove ALL templates, guests, and settings?")? {
                println!("aborted");
                return Ok(());
            }
            let store = Store::open(&config.storage).await?;
            store.clear_all().await?;
            println!("all data cleared");
            Ok(())
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("undangan={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

/// Ask a yes/no question on stdin.
fn confirm(question: &str) -> Result<bool, UndanganError> {
    use std::io::Write;

    print!("{question} [y/N] ");
    std::io::stdout()
        .flush()
        .map_err(|e| UndanganError::Internal(e.to_string()))?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(|e| UndanganError::Internal(e.to_string()))?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = undangan_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.app.name, "undangan");
    }
}
