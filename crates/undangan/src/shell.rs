// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `undangan shell` -- interactive session over the store.
//!
//! Keeps a working copy of the guest collection and an ephemeral selection
//! set (defaulting to the unsent guests). Honors the persisted `autoSave`
//! setting: when it is off, status changes stay in memory until `save`.
//! Subscribes to store events and refreshes the working copy when another
//! writer changes the guest collection (advisory refresh only).

use std::collections::HashSet;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::broadcast;
use undangan_compose::{personalize, send_link, wa_me_link};
use undangan_config::UndanganConfig;
use undangan_config::model::LinkStyle;
use undangan_core::{Guest, SentStatus, UndanganError, default_selection};
use undangan_storage::{Collection, Store, StoreEvent};

use crate::selection::resolve_template;

fn internal(e: impl ToString) -> UndanganError {
    UndanganError::Internal(e.to_string())
}

struct ShellState {
    guests: Vec<Guest>,
    selected: HashSet<String>,
    auto_save: bool,
    dirty: bool,
}

pub async fn run(store: Store, config: &UndanganConfig) -> Result<(), UndanganError> {
    let settings = store.settings().await?;
    let guests = store.guests().await?;
    let mut events = store.subscribe();

    let mut state = ShellState {
        selected: default_selection(&guests),
        guests,
        auto_save: settings.auto_save,
        dirty: false,
    };

    println!(
        "{} -- {} guest(s), {} selected, autosave {}",
        "undangan shell".bold(),
        state.guests.len(),
        state.selected.len(),
        if state.auto_save { "on" } else { "off" }
    );
    println!("type `help` for commands, `quit` to leave");

    let mut editor = DefaultEditor::new().map_err(internal)?;

    loop {
        refresh_if_changed(&store, &mut events, &mut state).await?;

        match editor.readline("undangan> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                match handle(&store, config, &mut state, &mut events, &line).await {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(err) => eprintln!("{} {err}", "error:".red().bold()),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(internal(e)),
        }
    }

    if state.dirty {
        eprintln!(
            "{}",
            "warning: unsaved changes were discarded (autosave is off)".yellow()
        );
    }
    store.close().await
}

/// Advisory refresh: reload the working copy when another writer touched the
/// guest collection and we hold no unsaved edits.
async fn refresh_if_changed(
    store: &Store,
    events: &mut broadcast::Receiver<StoreEvent>,
    state: &mut ShellState,
) -> Result<(), UndanganError> {
    let mut guests_changed = false;
    while let Ok(event) = events.try_recv() {
        if event.collection == Collection::Guests {
            guests_changed = true;
        }
    }
    if guests_changed && !state.dirty {
        state.guests = store.guests().await?;
        let existing: HashSet<String> = state.guests.iter().map(|g| g.id.clone()).collect();
        state.selected.retain(|id| existing.contains(id));
        println!("{}", "(guest list refreshed)".dimmed());
    }
    Ok(())
}

fn drain(events: &mut broadcast::Receiver<StoreEvent>) {
    while events.try_recv().is_ok() {}
}

/// Execute one shell command. Returns `true` to leave the loop.
async fn handle(
    store: &Store,
    config: &UndanganConfig,
    state: &mut ShellState,
    events: &mut broadcast::Receiver<StoreEvent>,
    line: &str,
) -> Result<bool, UndanganError> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    match command {
        "quit" | "exit" => return Ok(true),

        "help" => {
            println!("  guests                 list guests (* marks the selection)");
            println!("  templates              list templates");
            println!("  use <template>         set the active template");
            println!("  preview <guest>        personalized message for one guest");
            println!("  links                  WhatsApp links for the selection");
            println!("  select all|none|unsent adjust the selection set");
            println!("  sent <ids...>          mark invitations as sent");
            println!("  unsent <ids...>        mark invitations as not sent");
            println!("  save                   persist pending changes");
            println!("  reload                 reload guests from the store");
            println!("  status                 counts and autosave state");
            println!("  quit                   leave the shell");
        }

        "guests" => {
            for guest in &state.guests {
                let mark = if state.selected.contains(&guest.id) { "*" } else { " " };
                let status = match guest.sent_status {
                    SentStatus::Sent => "sent".green(),
                    SentStatus::NotSent => "not sent".yellow(),
                };
                println!(
                    "{mark} {}  {}  {}",
                    guest.id.dimmed(),
                    guest.name.bold(),
                    status
                );
            }
        }

        "templates" => {
            let templates = store.templates().await?;
            let settings = store.settings().await?;
            for template in &templates {
                let mark = if settings.selected_template_id.as_deref() == Some(template.id.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{mark} {}  {}  [{}]",
                    template.id.dimmed(),
                    template.name.bold(),
                    template.kind
                );
            }
        }

        "use" => {
            let wanted = rest.join(" ");
            if wanted.is_empty() {
                return Err(UndanganError::Validation("usage: use <template>".to_string()));
            }
            let template = resolve_template(store, Some(wanted.as_str())).await?;
            let mut settings = store.settings().await?;
            settings.selected_template_id = Some(template.id.clone());
            store.save_settings(&settings).await?;
            drain(events);
            println!("active template is now {}", template.name.bold());
        }

        "preview" => {
            let wanted = rest.join(" ");
            if wanted.is_empty() {
                return Err(UndanganError::Validation("usage: preview <guest>".to_string()));
            }
            let guest = state
                .guests
                .iter()
                .find(|g| g.id == wanted || g.name.eq_ignore_ascii_case(&wanted))
                .ok_or_else(|| {
                    UndanganError::Validation(format!("guest not found: {wanted}"))
                })?;
            let template = resolve_template(store, None).await?;
            println!("{}", format!("--- {} ---", guest.name).cyan());
            println!("{}", personalize(&template.content, &guest.name));
        }

        "links" => {
            let template = resolve_template(store, None).await?;
            for guest in state.guests.iter().filter(|g| state.selected.contains(&g.id)) {
                match guest.whatsapp_number.as_deref() {
                    Some(number) => {
                        let message = personalize(&template.content, &guest.name);
                        let link = match config.send.link_style {
                            LinkStyle::Send => send_link(number, &message),
                            LinkStyle::WaMe => wa_me_link(number, &message),
                        };
                        println!("{}\n{link}", guest.name.bold());
                    }
                    None => println!(
                        "{}  {}",
                        guest.name.bold(),
                        "no WhatsApp number -- skipped".yellow()
                    ),
                }
            }
        }

        "select" => match rest.as_slice() {
            ["all"] => {
                state.selected = state.guests.iter().map(|g| g.id.clone()).collect();
                println!("{} selected", state.selected.len());
            }
            ["none"] => {
                state.selected.clear();
                println!("selection cleared");
            }
            ["unsent"] => {
                state.selected = default_selection(&state.guests);
                println!("{} selected", state.selected.len());
            }
            _ => {
                return Err(UndanganError::Validation(
                    "usage: select all|none|unsent".to_string(),
                ));
            }
        },

        "sent" | "unsent" => {
            if rest.is_empty() {
                return Err(UndanganError::Validation(format!("usage: {command} <ids...>")));
            }
            let ids: Vec<String> = rest.iter().map(|s| s.to_string()).collect();
            for id in &ids {
                if !state.guests.iter().any(|g| &g.id == id) {
                    return Err(UndanganError::Validation(format!("guest not found: {id}")));
                }
            }

            if state.auto_save {
                state.guests = if command == "sent" {
                    store.mark_guests_as_sent(&ids).await?
                } else {
                    store.mark_guests_as_not_sent(&ids).await?
                };
                drain(events);
            } else {
                let now = chrono::Utc::now();
                for guest in state.guests.iter_mut() {
                    if ids.contains(&guest.id) {
                        if command == "sent" {
                            guest.mark_sent(now);
                        } else {
                            guest.mark_not_sent();
                        }
                    }
                }
                state.dirty = true;
            }
            println!("{} guest(s) marked {command}", ids.len());
        }

        "save" => {
            if state.dirty {
                store.save_guests(&state.guests).await?;
                drain(events);
                state.dirty = false;
                println!("saved");
            } else {
                println!("nothing to save");
            }
        }

        "reload" => {
            state.guests = store.guests().await?;
            state.selected = default_selection(&state.guests);
            state.dirty = false;
            drain(events);
            println!("reloaded {} guest(s)", state.guests.len());
        }

        "status" => {
            let sent = state
                .guests
                .iter()
                .filter(|g| g.sent_status == SentStatus::Sent)
                .count();
            println!(
                "{} guest(s), {} sent, {} selected, autosave {}{}",
                state.guests.len(),
                sent,
                state.selected.len(),
                if state.auto_save { "on" } else { "off" },
                if state.dirty { ", unsaved changes" } else { "" }
            );
        }

        other => {
            return Err(UndanganError::Validation(format!(
                "unknown command `{other}` -- type `help`"
            )));
        }
    }

    Ok(false)
}
