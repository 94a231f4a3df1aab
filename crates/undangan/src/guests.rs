// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `undangan guest` subcommands: CRUD, CSV import, status toggles, and
//! label operations.

use std::path::PathBuf;

use clap::Subcommand;
use colored::Colorize;
use undangan_core::{Guest, GuestFilter, SentStatus, StatusFilter, UndanganError, phone};
use undangan_import::parse_guest_csv;
use undangan_storage::Store;

use crate::selection::parse_status;

#[derive(Subcommand, Debug)]
pub enum GuestCommand {
    /// List guests.
    List {
        /// Status filter: all, sent, not_sent (default: all).
        #[arg(long, value_parser = parse_status)]
        status: Option<StatusFilter>,
        /// Case-insensitive substring match over name and phone.
        #[arg(long)]
        search: Option<String>,
        /// Keep guests carrying at least one of these labels (repeatable).
        #[arg(long = "label", value_name = "LABEL")]
        labels: Vec<String>,
    },
    /// Add a guest.
    Add {
        /// Display name.
        name: String,
        /// WhatsApp number (08xxx, 628xxx, or +628xxx).
        #[arg(long)]
        number: Option<String>,
    },
    /// Edit a guest in place.
    Edit {
        /// Guest id.
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// New number; pass an empty string to clear it.
        #[arg(long)]
        number: Option<String>,
    },
    /// Delete a guest.
    Rm {
        /// Guest id.
        id: String,
    },
    /// Import guests from a CSV file.
    Import {
        /// CSV file with a header row (`Nama`/`Name` column required).
        file: PathBuf,
    },
    /// Mark guests' invitations as sent.
    MarkSent {
        /// Guest ids.
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Mark guests' invitations as not sent.
    MarkUnsent {
        /// Guest ids.
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Add or remove labels on guests.
    Label {
        #[command(subcommand)]
        command: LabelCommand,
    },
    /// List every label in use.
    Labels,
}

#[derive(Subcommand, Debug)]
pub enum LabelCommand {
    /// Add labels to guests.
    Add {
        /// Labels to add (repeatable).
        #[arg(long = "label", value_name = "LABEL", required = true)]
        labels: Vec<String>,
        /// Guest ids.
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Remove labels from guests.
    Rm {
        /// Labels to remove (repeatable).
        #[arg(long = "label", value_name = "LABEL", required = true)]
        labels: Vec<String>,
        /// Guest ids.
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Validate and canonicalize a user-supplied number; empty clears it.
fn checked_number(input: &str) -> Result<Option<String>, UndanganError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    if !phone::validate_whatsapp_number(input) {
        return Err(UndanganError::Validation(
            "invalid WhatsApp number format (e.g. 08xxx or +628xxx)".to_string(),
        ));
    }
    Ok(Some(phone::format_whatsapp_number(input)))
}

fn find_guest(guests: &[Guest], id: &str) -> Result<usize, UndanganError> {
    guests
        .iter()
        .position(|g| g.id == id)
        .ok_or_else(|| UndanganError::Validation(format!("guest not found: {id}")))
}

fn print_guest(guest: &Guest) {
    let status = match guest.sent_status {
        SentStatus::Sent => "sent".green(),
        SentStatus::NotSent => "not sent".yellow(),
    };
    let number = guest.whatsapp_number.as_deref().unwrap_or("-");
    let labels = if guest.labels.is_empty() {
        String::new()
    } else {
        format!("  [{}]", guest.labels.join(", "))
    };
    println!(
        "{}  {}  {}  {}{}",
        guest.id.dimmed(),
        guest.name.bold(),
        number,
        status,
        labels.cyan()
    );
}

pub async fn run(store: &Store, command: GuestCommand) -> Result<(), UndanganError> {
    match command {
        GuestCommand::List {
            status,
            search,
            labels,
        } => {
            let guests = store.guests().await?;
            let filter = GuestFilter {
                status: status.unwrap_or(StatusFilter::All),
                search,
                labels,
            };
            let hits = filter.apply(&guests);
            for guest in &hits {
                print_guest(guest);
            }
            println!("{} of {} guest(s)", hits.len(), guests.len());
            Ok(())
        }

        GuestCommand::Add { name, number } => {
            if name.trim().is_empty() {
                return Err(UndanganError::Validation(
                    "guest name must not be empty".to_string(),
                ));
            }
            let number = match number.as_deref() {
                Some(n) => checked_number(n)?,
                None => None,
            };

            let guest = Guest::new(name.trim(), number);
            let mut guests = store.guests().await?;
            guests.push(guest.clone());
            store.save_guests(&guests).await?;
            println!("added guest {} ({})", guest.name.bold(), guest.id);
            Ok(())
        }

        GuestCommand::Edit { id, name, number } => {
            let mut guests = store.guests().await?;
            let idx = find_guest(&guests, &id)?;

            if let Some(name) = name {
                if name.trim().is_empty() {
                    return Err(UndanganError::Validation(
                        "guest name must not be empty".to_string(),
                    ));
                }
                guests[idx].name = name.trim().to_string();
            }
            if let Some(number) = number {
                guests[idx].whatsapp_number = checked_number(&number)?;
            }

            store.save_guests(&guests).await?;
            println!("updated guest {}", guests[idx].name.bold());
            Ok(())
        }

        GuestCommand::Rm { id } => {
            let mut guests = store.guests().await?;
            let idx = find_guest(&guests, &id)?;
            let removed = guests.remove(idx);
            store.save_guests(&guests).await?;
            println!("removed guest {}", removed.name.bold());
            Ok(())
        }

        GuestCommand::Import { file } => {
            let contents = std::fs::read_to_string(&file).map_err(|e| {
                UndanganError::Validation(format!("cannot read {}: {e}", file.display()))
            })?;
            let parsed = parse_guest_csv(&contents)?;

            let mut guests = store.guests().await?;
            let count = parsed.len();
            guests.extend(parsed.into_iter().map(|p| p.into_guest()));
            store.save_guests(&guests).await?;
            println!("imported {count} guest(s) from {}", file.display());
            Ok(())
        }

        GuestCommand::MarkSent { ids } => {
            let guests = store.mark_guests_as_sent(&ids).await?;
            let sent = guests
                .iter()
                .filter(|g| ids.contains(&g.id))
                .count();
            println!("marked {sent} guest(s) as sent");
            Ok(())
        }

        GuestCommand::MarkUnsent { ids } => {
            let guests = store.mark_guests_as_not_sent(&ids).await?;
            let touched = guests.iter().filter(|g| ids.contains(&g.id)).count();
            println!("marked {touched} guest(s) as not sent");
            Ok(())
        }

        GuestCommand::Label { command } => match command {
            LabelCommand::Add { labels, ids } => {
                store.add_labels(&ids, &labels).await?;
                println!("added {} label(s) to {} guest(s)", labels.len(), ids.len());
                Ok(())
            }
            LabelCommand::Rm { labels, ids } => {
                store.remove_labels(&ids, &labels).await?;
                println!(
                    "removed {} label(s) from {} guest(s)",
                    labels.len(),
                    ids.len()
                );
                Ok(())
            }
        },

        GuestCommand::Labels => {
            let labels = store.all_labels().await?;
            if labels.is_empty() {
                println!("no labels in use");
            } else {
                for label in labels {
                    println!("{label}");
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_number_validates_and_formats() {
        assert_eq!(
            checked_number("08123456789").unwrap(),
            Some("+628123456789".to_string())
        );
        assert_eq!(checked_number("").unwrap(), None);
        assert!(checked_number("12345").is_err());
    }

    #[test]
    fn find_guest_reports_unknown_ids() {
        let guests = vec![Guest::new("Budi", None)];
        assert!(find_guest(&guests, &guests[0].id).is_ok());
        let err = find_guest(&guests, "x").unwrap_err();
        assert!(matches!(err, UndanganError::Validation(_)));
    }
}
