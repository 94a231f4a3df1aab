// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `undangan doctor` -- environment diagnostics.
//!
//! Runs quick checks against the configuration and the database to identify
//! problems before they bite mid-operation.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use colored::Colorize;
use undangan_config::UndanganConfig;
use undangan_core::UndanganError;
use undangan_storage::Store;

/// Status of a diagnostic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub status: CheckStatus,
    pub message: String,
    pub duration: Duration,
}

pub async fn run(config: &UndanganConfig, plain: bool) -> Result<(), UndanganError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let mut results = Vec::new();
    results.push(check_config(config));
    results.push(check_database(config).await);
    results.push(check_collections(config).await);

    let mut failed = 0;
    for result in &results {
        let tag = match result.status {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => {
                failed += 1;
                "FAIL"
            }
        };
        let tag = if use_color {
            match result.status {
                CheckStatus::Pass => tag.green().to_string(),
                CheckStatus::Warn => tag.yellow().to_string(),
                CheckStatus::Fail => tag.red().to_string(),
            }
        } else {
            tag.to_string()
        };
        println!(
            "[{tag}] {:<12} {} ({:?})",
            result.name, result.message, result.duration
        );
    }

    if failed > 0 {
        Err(UndanganError::Internal(format!("{failed} check(s) failed")))
    } else {
        Ok(())
    }
}

fn check_config(config: &UndanganConfig) -> CheckResult {
    let start = Instant::now();
    let status = match undangan_config::validation::validate_config(config) {
        Ok(()) => (CheckStatus::Pass, "configuration is valid".to_string()),
        Err(errors) => (
            CheckStatus::Fail,
            format!("{} configuration error(s)", errors.len()),
        ),
    };
    CheckResult {
        name: "config",
        status: status.0,
        message: status.1,
        duration: start.elapsed(),
    }
}

async fn check_database(config: &UndanganConfig) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match Store::open(&config.storage).await {
        Ok(store) => {
            let message = format!("opened {}", config.storage.database_path);
            match store.close().await {
                Ok(()) => (CheckStatus::Pass, message),
                Err(e) => (CheckStatus::Warn, format!("{message}; close failed: {e}")),
            }
        }
        Err(e) => (CheckStatus::Fail, format!("cannot open database: {e}")),
    };
    CheckResult {
        name: "database",
        status,
        message,
        duration: start.elapsed(),
    }
}

async fn check_collections(config: &UndanganConfig) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match Store::open(&config.storage).await {
        Err(e) => (CheckStatus::Fail, format!("cannot open database: {e}")),
        Ok(store) => {
            let mut problems = Vec::new();
            let mut counts = Vec::new();

            match store.templates().await {
                Ok(templates) => counts.push(format!("{} template(s)", templates.len())),
                Err(e) => problems.push(format!("templates: {e}")),
            }
            match store.guests().await {
                Ok(guests) => counts.push(format!("{} guest(s)", guests.len())),
                Err(e) => problems.push(format!("guests: {e}")),
            }
            match store.settings().await {
                Ok(_) => {}
                Err(e) => problems.push(format!("settings: {e}")),
            }

            if problems.is_empty() {
                (CheckStatus::Pass, counts.join(", "))
            } else {
                // Corrupt collections are recoverable via restore; report,
                // don't abort the remaining checks.
                (CheckStatus::Warn, problems.join("; "))
            }
        }
    };
    CheckResult {
        name: "collections",
        status,
        message,
        duration: start.elapsed(),
    }
}
