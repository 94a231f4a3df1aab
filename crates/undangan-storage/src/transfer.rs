// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Template collection export/import with a versioned JSON envelope.
//!
//! Import validation is an explicit schema check returning
//! `Result<Vec<Template>, ValidationError>` -- malformed files are a tagged
//! error, never a panic or a half-imported collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;
use undangan_core::{Template, UndanganError};

/// Envelope version written by [`build_export`].
pub const EXPORT_VERSION: &str = "1.0";

/// The export envelope: `{version, exportDate, appName, templates}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfigExport {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub app_name: String,
    pub templates: Vec<Template>,
}

/// Build an export envelope for the given collection.
pub fn build_export(app_name: &str, templates: Vec<Template>) -> TemplateConfigExport {
    TemplateConfigExport {
        version: EXPORT_VERSION.to_string(),
        export_date: Utc::now(),
        app_name: app_name.to_string(),
        templates,
    }
}

/// How an imported template set is applied to the existing collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ImportMode {
    /// Overwrite the whole collection.
    Replace,
    /// Add only templates whose name (case-insensitive) is absent.
    Merge,
}

/// Result of applying an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    pub mode: ImportMode,
    /// Templates carried by the import file.
    pub total: usize,
    /// Templates actually added to the collection.
    pub added: usize,
}

/// Schema validation failures for an import file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("import file is not valid JSON: {0}")]
    Json(String),

    #[error("import file has the wrong shape: {0}")]
    Shape(String),

    #[error("template #{index} is missing or has a non-string `{field}`")]
    BadField { index: usize, field: &'static str },

    #[error("template #{index} has unknown type `{value}` (expected `formal` or `informal`)")]
    BadKind { index: usize, value: String },
}

impl From<ValidationError> for UndanganError {
    fn from(err: ValidationError) -> Self {
        UndanganError::Validation(err.to_string())
    }
}

/// Parse and schema-validate an export envelope.
///
/// Checks the top-level shape and every template record (id/name/content are
/// strings, `type` is one of the two allowed tags, `createdAt` present)
/// before deserializing, so a single bad record rejects the whole file.
pub fn validate_template_config(contents: &str) -> Result<Vec<Template>, ValidationError> {
    let value: serde_json::Value =
        serde_json::from_str(contents).map_err(|e| ValidationError::Json(e.to_string()))?;

    let obj = value
        .as_object()
        .ok_or_else(|| ValidationError::Shape("top level must be an object".to_string()))?;
    let records = obj
        .get("templates")
        .and_then(|t| t.as_array())
        .ok_or_else(|| ValidationError::Shape("`templates` must be an array".to_string()))?;

    for (index, record) in records.iter().enumerate() {
        let record = record.as_object().ok_or_else(|| {
            ValidationError::Shape(format!("template #{index} must be an object"))
        })?;

        for field in ["id", "name", "content"] {
            let ok = record.get(field).map(|v| v.is_string()).unwrap_or(false);
            if !ok {
                return Err(ValidationError::BadField { index, field });
            }
        }

        match record.get("type").and_then(|v| v.as_str()) {
            Some("formal") | Some("informal") => {}
            other => {
                return Err(ValidationError::BadKind {
                    index,
                    value: other.unwrap_or("<missing>").to_string(),
                });
            }
        }

        if !record.contains_key("createdAt") {
            return Err(ValidationError::BadField {
                index,
                field: "createdAt",
            });
        }
    }

    serde_json::from_value(serde_json::Value::Array(records.clone()))
        .map_err(|e| ValidationError::Json(e.to_string()))
}

/// Merge imported templates into an existing collection.
///
/// Adds only templates whose name is absent (case-insensitive) from the
/// existing set; same-name templates are skipped even when their content
/// differs. That mirrors the original app's de-duplication policy -- whether
/// it should instead update the colliding template is an open product
/// question.
pub fn merge_templates(existing: &mut Vec<Template>, incoming: Vec<Template>) -> usize {
    let mut names: Vec<String> = existing.iter().map(|t| t.name.to_lowercase()).collect();
    let mut added = 0;

    for template in incoming {
        let key = template.name.to_lowercase();
        if names.contains(&key) {
            continue;
        }
        names.push(key);
        existing.push(template);
        added += 1;
    }

    added
}
