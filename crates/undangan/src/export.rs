// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `undangan export` -- write the plain-text export file.

use std::path::PathBuf;

use clap::Args;
use undangan_compose::{export_file_name, export_for_guests};
use undangan_core::UndanganError;
use undangan_storage::Store;

use crate::selection::{SelectionArgs, resolve_guests, resolve_template};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Template id or name (default: the active template).
    #[arg(long)]
    pub template: Option<String>,

    /// Output path; defaults to `undangan-<template>.txt` in the current directory.
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub async fn run(store: &Store, args: ExportArgs) -> Result<(), UndanganError> {
    let template = resolve_template(store, args.template.as_deref()).await?;
    let guests = resolve_guests(store, &args.selection).await?;

    if guests.is_empty() {
        return Err(UndanganError::Validation(
            "selection is empty -- nothing to export".to_string(),
        ));
    }

    let refs: Vec<_> = guests.iter().collect();
    let document = export_for_guests(&template, &refs);

    let path = args
        .out
        .unwrap_or_else(|| PathBuf::from(export_file_name(&template.name)));
    std::fs::write(&path, document).map_err(|e| UndanganError::Internal(e.to_string()))?;
    println!("wrote {} message(s) to {}", guests.len(), path.display());
    Ok(())
}
