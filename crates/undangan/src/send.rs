// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `undangan send` -- WhatsApp deep links for the selection.
//!
//! Prints one link per guest with a number; guests without one are reported
//! and skipped. `--mark` records the linked guests as sent.

use clap::Args;
use colored::Colorize;
use undangan_compose::{personalize, send_link, wa_me_link};
use undangan_config::UndanganConfig;
use undangan_config::model::LinkStyle;
use undangan_core::UndanganError;
use undangan_storage::Store;

use crate::selection::{SelectionArgs, resolve_guests, resolve_template};

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Template id or name (default: the active template).
    #[arg(long)]
    pub template: Option<String>,

    /// Use the short wa.me link form.
    #[arg(long)]
    pub wa_me: bool,

    /// Mark the linked guests as sent.
    #[arg(long)]
    pub mark: bool,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub async fn run(
    store: &Store,
    config: &UndanganConfig,
    args: SendArgs,
) -> Result<(), UndanganError> {
    let template = resolve_template(store, args.template.as_deref()).await?;
    let guests = resolve_guests(store, &args.selection).await?;

    if guests.is_empty() {
        println!("selection is empty -- nothing to send");
        return Ok(());
    }

    let use_wa_me = args.wa_me || config.send.link_style == LinkStyle::WaMe;
    let mut linked_ids = Vec::new();

    for guest in &guests {
        match guest.whatsapp_number.as_deref() {
            Some(number) => {
                let message = personalize(&template.content, &guest.name);
                let link = if use_wa_me {
                    wa_me_link(number, &message)
                } else {
                    send_link(number, &message)
                };
                println!("{}\n{link}\n", guest.name.bold());
                linked_ids.push(guest.id.clone());
            }
            None => {
                println!(
                    "{}  {}",
                    guest.name.bold(),
                    "no WhatsApp number -- skipped".yellow()
                );
            }
        }
    }

    if args.mark && !linked_ids.is_empty() {
        store.mark_guests_as_sent(&linked_ids).await?;
        println!("marked {} guest(s) as sent", linked_ids.len());
    }
    Ok(())
}
