// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `undangan template` subcommands: CRUD, active-template selection,
//! seeding, and envelope export/import.

use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Subcommand;
use colored::Colorize;
use undangan_config::UndanganConfig;
use undangan_core::{Template, TemplateKind, UndanganError, seed};
use undangan_storage::{ImportMode, Store};

#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// List templates.
    List,
    /// Print one template's body.
    Show {
        /// Template id or name.
        id: String,
    },
    /// Add a template.
    Add {
        /// Display name.
        name: String,
        /// formal or informal.
        #[arg(long, default_value = "informal", value_parser = parse_kind)]
        kind: TemplateKind,
        /// Body text; read from stdin when omitted.
        #[arg(long)]
        content: Option<String>,
    },
    /// Edit a template in place.
    Edit {
        /// Template id or name.
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, value_parser = parse_kind)]
        kind: Option<TemplateKind>,
    },
    /// Delete a template.
    Rm {
        /// Template id or name.
        id: String,
    },
    /// Select the active template used by preview/send/export.
    Use {
        /// Template id or name.
        id: String,
    },
    /// Seed the starter templates into an empty collection.
    Seed,
    /// Export the collection as a JSON envelope.
    Export {
        /// Output path; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import templates from a JSON envelope.
    Import {
        /// Envelope file to import.
        file: PathBuf,
        /// replace or merge.
        #[arg(long, default_value = "merge", value_parser = parse_mode)]
        mode: ImportMode,
    },
}

fn parse_kind(value: &str) -> Result<TemplateKind, String> {
    TemplateKind::from_str(value).map_err(|_| format!("expected formal or informal, got `{value}`"))
}

fn parse_mode(value: &str) -> Result<ImportMode, String> {
    ImportMode::from_str(value).map_err(|_| format!("expected replace or merge, got `{value}`"))
}

fn find_template(templates: &[Template], wanted: &str) -> Result<usize, UndanganError> {
    templates
        .iter()
        .position(|t| t.id == wanted || t.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| UndanganError::Validation(format!("template not found: {wanted}")))
}

pub async fn run(
    store: &Store,
    config: &UndanganConfig,
    command: TemplateCommand,
) -> Result<(), UndanganError> {
    match command {
        TemplateCommand::List => {
            let templates = store.templates().await?;
            let settings = store.settings().await?;
            if templates.is_empty() {
                println!("no templates -- run `undangan template seed` to install the starters");
                return Ok(());
            }
            for template in &templates {
                let marker = if settings.selected_template_id.as_deref() == Some(template.id.as_str()) {
                    "*".green().to_string()
                } else {
                    " ".to_string()
                };
                println!(
                    "{marker} {}  {}  [{}]",
                    template.id.dimmed(),
                    template.name.bold(),
                    template.kind
                );
            }
            Ok(())
        }

        TemplateCommand::Show { id } => {
            let templates = store.templates().await?;
            let idx = find_template(&templates, &id)?;
            let template = &templates[idx];
            println!("{}  [{}]", template.name.bold(), template.kind);
            println!("{}", "-".repeat(40));
            println!("{}", template.content);
            Ok(())
        }

        TemplateCommand::Add { name, kind, content } => {
            if name.trim().is_empty() {
                return Err(UndanganError::Validation(
                    "template name must not be empty".to_string(),
                ));
            }
            let content = match content {
                Some(content) => content,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .map_err(|e| UndanganError::Internal(e.to_string()))?;
                    buffer
                }
            };
            if content.trim().is_empty() {
                return Err(UndanganError::Validation(
                    "template content must not be empty".to_string(),
                ));
            }

            let template = Template::new(name.trim(), kind, content);
            let mut templates = store.templates().await?;
            templates.push(template.clone());
            store.save_templates(&templates).await?;
            println!("added template {} ({})", template.name.bold(), template.id);
            Ok(())
        }

        TemplateCommand::Edit {
            id,
            name,
            content,
            kind,
        } => {
            let mut templates = store.templates().await?;
            let idx = find_template(&templates, &id)?;

            if let Some(name) = name {
                if name.trim().is_empty() {
                    return Err(UndanganError::Validation(
                        "template name must not be empty".to_string(),
                    ));
                }
                templates[idx].name = name.trim().to_string();
            }
            if let Some(content) = content {
                templates[idx].content = content;
            }
            if let Some(kind) = kind {
                templates[idx].kind = kind;
            }

            store.save_templates(&templates).await?;
            println!("updated template {}", templates[idx].name.bold());
            Ok(())
        }

        TemplateCommand::Rm { id } => {
            let mut templates = store.templates().await?;
            let idx = find_template(&templates, &id)?;
            let removed = templates.remove(idx);
            store.save_templates(&templates).await?;

            // Drop a dangling active-template reference along with it.
            let mut settings = store.settings().await?;
            if settings.selected_template_id.as_deref() == Some(removed.id.as_str()) {
                settings.selected_template_id = None;
                store.save_settings(&settings).await?;
            }
            println!("removed template {}", removed.name.bold());
            Ok(())
        }

        TemplateCommand::Use { id } => {
            let templates = store.templates().await?;
            let idx = find_template(&templates, &id)?;
            let mut settings = store.settings().await?;
            settings.selected_template_id = Some(templates[idx].id.clone());
            store.save_settings(&settings).await?;
            println!("active template is now {}", templates[idx].name.bold());
            Ok(())
        }

        TemplateCommand::Seed => {
            if !config.templates.seed_defaults {
                return Err(UndanganError::Validation(
                    "seeding is disabled (templates.seed_defaults = false)".to_string(),
                ));
            }
            let existing = store.templates().await?;
            if !existing.is_empty() {
                return Err(UndanganError::Validation(format!(
                    "collection already has {} template(s) -- seeding only fills an empty collection",
                    existing.len()
                )));
            }
            let seeded = seed::default_templates();
            store.save_templates(&seeded).await?;
            println!("seeded {} starter templates", seeded.len());
            Ok(())
        }

        TemplateCommand::Export { out } => {
            let envelope = store.export_template_config(&config.app.name).await?;
            let json = serde_json::to_string_pretty(&envelope)
                .map_err(|e| UndanganError::Internal(e.to_string()))?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .map_err(|e| UndanganError::Internal(e.to_string()))?;
                    println!(
                        "exported {} template(s) to {}",
                        envelope.templates.len(),
                        path.display()
                    );
                }
                None => println!("{json}"),
            }
            Ok(())
        }

        TemplateCommand::Import { file, mode } => {
            let contents = std::fs::read_to_string(&file).map_err(|e| {
                UndanganError::Validation(format!("cannot read {}: {e}", file.display()))
            })?;
            let outcome = store.import_template_config(&contents, mode).await?;
            match mode {
                ImportMode::Replace => {
                    println!("replaced the collection with {} template(s)", outcome.added);
                }
                ImportMode::Merge => println!(
                    "added {} of {} template(s); existing names were kept untouched",
                    outcome.added, outcome.total
                ),
            }
            Ok(())
        }
    }
}
