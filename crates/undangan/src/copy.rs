// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `undangan copy` -- put personalized messages on the system clipboard.
//!
//! A single-guest selection copies that guest's message verbatim; a larger
//! selection copies the `=== name ===` export blocks, matching the app's
//! copy-all behavior.

use clap::Args;
use undangan_compose::{export_for_guests, personalize};
use undangan_core::{Clipboard, UndanganError};
use undangan_storage::Store;

use crate::selection::{SelectionArgs, resolve_guests, resolve_template};

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Template id or name (default: the active template).
    #[arg(long)]
    pub template: Option<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub async fn run(
    store: &Store,
    clipboard: &dyn Clipboard,
    args: CopyArgs,
) -> Result<(), UndanganError> {
    let template = resolve_template(store, args.template.as_deref()).await?;
    let guests = resolve_guests(store, &args.selection).await?;

    match guests.as_slice() {
        [] => Err(UndanganError::Validation(
            "selection is empty -- nothing to copy".to_string(),
        )),
        [guest] => {
            let message = personalize(&template.content, &guest.name);
            clipboard.write_text(&message).await?;
            println!("copied message for {}", guest.name);
            Ok(())
        }
        many => {
            let refs: Vec<_> = many.iter().collect();
            let document = export_for_guests(&template, &refs);
            clipboard.write_text(&document).await?;
            println!("copied {} message blocks", many.len());
            Ok(())
        }
    }
}
