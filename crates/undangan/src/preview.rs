// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `undangan preview` -- render personalized messages for the selection.

use clap::Args;
use colored::Colorize;
use undangan_compose::personalize;
use undangan_core::UndanganError;
use undangan_storage::Store;

use crate::selection::{SelectionArgs, resolve_guests, resolve_template};

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Template id or name (default: the active template).
    #[arg(long)]
    pub template: Option<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub async fn run(store: &Store, args: PreviewArgs) -> Result<(), UndanganError> {
    let template = resolve_template(store, args.template.as_deref()).await?;
    let guests = resolve_guests(store, &args.selection).await?;

    if guests.is_empty() {
        println!("selection is empty -- nothing to preview");
        return Ok(());
    }

    println!(
        "template {} for {} guest(s)\n",
        template.name.bold(),
        guests.len()
    );
    for guest in &guests {
        let message = personalize(&template.content, &guest.name);
        println!("{}", format!("--- {} ---", guest.name).cyan());
        println!("{message}\n");
    }
    Ok(())
}
