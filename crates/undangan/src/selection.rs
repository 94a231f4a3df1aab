// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared selection arguments for preview/send/export/copy.
//!
//! With no flags the working set defaults to every guest whose invitation is
//! not yet sent, matching the app's default selection. Explicit `--guest`
//! ids bypass the filters entirely.

use std::str::FromStr;

use clap::Args;
use undangan_core::{Guest, GuestFilter, StatusFilter, Template, UndanganError};
use undangan_storage::Store;

#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Target specific guest ids (repeatable; bypasses the filters).
    #[arg(long = "guest", value_name = "ID")]
    pub guests: Vec<String>,

    /// Keep guests carrying at least one of these labels (repeatable).
    #[arg(long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Status filter: all, sent, not_sent (default: not_sent).
    #[arg(long, value_parser = parse_status)]
    pub status: Option<StatusFilter>,

    /// Case-insensitive substring match over name and phone.
    #[arg(long)]
    pub search: Option<String>,

    /// Include every guest regardless of status.
    #[arg(long, conflicts_with = "status")]
    pub all: bool,
}

pub fn parse_status(value: &str) -> Result<StatusFilter, String> {
    StatusFilter::from_str(value)
        .map_err(|_| format!("expected all, sent, or not_sent, got `{value}`"))
}

/// Resolve the selection args against the stored guest collection.
pub async fn resolve_guests(
    store: &Store,
    args: &SelectionArgs,
) -> Result<Vec<Guest>, UndanganError> {
    let guests = store.guests().await?;

    if !args.guests.is_empty() {
        let mut picked = Vec::new();
        for id in &args.guests {
            match guests.iter().find(|g| &g.id == id) {
                Some(guest) => picked.push(guest.clone()),
                None => {
                    return Err(UndanganError::Validation(format!("guest not found: {id}")));
                }
            }
        }
        return Ok(picked);
    }

    let status = if args.all {
        StatusFilter::All
    } else {
        args.status.unwrap_or(StatusFilter::NotSent)
    };
    let filter = GuestFilter {
        status,
        search: args.search.clone(),
        labels: args.labels.clone(),
    };
    Ok(filter.apply(&guests).into_iter().cloned().collect())
}

/// Resolve the template to compose with: explicit id/name, falling back to
/// the selected template in settings.
pub async fn resolve_template(
    store: &Store,
    wanted: Option<&str>,
) -> Result<Template, UndanganError> {
    let templates = store.templates().await?;

    if let Some(wanted) = wanted {
        return templates
            .iter()
            .find(|t| t.id == wanted || t.name.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| UndanganError::Validation(format!("template not found: {wanted}")));
    }

    let settings = store.settings().await?;
    let selected = settings.selected_template_id.ok_or_else(|| {
        UndanganError::Validation(
            "no template selected -- pass --template or run `undangan template use <id>`"
                .to_string(),
        )
    })?;
    templates
        .iter()
        .find(|t| t.id == selected)
        .cloned()
        .ok_or_else(|| {
            UndanganError::Validation(format!(
                "selected template `{selected}` no longer exists -- run `undangan template use <id>`"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use undangan_core::{AppSettings, TemplateKind};

    async fn seeded_store() -> (Store, Vec<Guest>) {
        let store = Store::in_memory().await.unwrap();
        let mut sent = Guest::new("Ani", None);
        sent.mark_sent(chrono::Utc::now());
        let mut labeled = Guest::new("Budi", Some("+628123456789".to_string()));
        labeled.add_labels(&["keluarga"]);
        let plain = Guest::new("Citra", None);
        let guests = vec![sent, labeled, plain];
        store.save_guests(&guests).await.unwrap();
        (store, guests)
    }

    #[tokio::test]
    async fn default_selection_is_the_unsent_working_set() {
        let (store, _) = seeded_store().await;
        let picked = resolve_guests(&store, &SelectionArgs::default()).await.unwrap();
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|g| g.name != "Ani"));
    }

    #[tokio::test]
    async fn all_flag_widens_to_every_guest() {
        let (store, _) = seeded_store().await;
        let args = SelectionArgs {
            all: true,
            ..Default::default()
        };
        assert_eq!(resolve_guests(&store, &args).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn explicit_ids_bypass_the_filters() {
        let (store, guests) = seeded_store().await;
        let args = SelectionArgs {
            guests: vec![guests[0].id.clone()],
            ..Default::default()
        };
        // guests[0] is sent, yet explicitly targeting it works.
        let picked = resolve_guests(&store, &args).await.unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].name, "Ani");
    }

    #[tokio::test]
    async fn unknown_explicit_id_is_a_validation_error() {
        let (store, _) = seeded_store().await;
        let args = SelectionArgs {
            guests: vec!["tidak-ada".to_string()],
            ..Default::default()
        };
        let err = resolve_guests(&store, &args).await.unwrap_err();
        assert!(matches!(err, UndanganError::Validation(_)));
    }

    #[tokio::test]
    async fn label_filter_composes_with_default_status() {
        let (store, _) = seeded_store().await;
        let args = SelectionArgs {
            labels: vec!["keluarga".to_string()],
            ..Default::default()
        };
        let picked = resolve_guests(&store, &args).await.unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].name, "Budi");
    }

    #[tokio::test]
    async fn template_resolution_prefers_the_explicit_argument() {
        let store = Store::in_memory().await.unwrap();
        let a = Template::new("Formal", TemplateKind::Formal, "Yth. {nama_tamu}");
        let b = Template::new("Santai", TemplateKind::Informal, "Halo {nama_tamu}");
        store.save_templates(&[a.clone(), b.clone()]).await.unwrap();
        store
            .save_settings(&AppSettings {
                selected_template_id: Some(a.id.clone()),
                auto_save: true,
            })
            .await
            .unwrap();

        let by_name = resolve_template(&store, Some("santai")).await.unwrap();
        assert_eq!(by_name.id, b.id);

        let from_settings = resolve_template(&store, None).await.unwrap();
        assert_eq!(from_settings.id, a.id);
    }

    #[tokio::test]
    async fn missing_selection_yields_a_helpful_error() {
        let store = Store::in_memory().await.unwrap();
        let err = resolve_template(&store, None).await.unwrap_err();
        assert!(err.to_string().contains("template use"));
    }
}
