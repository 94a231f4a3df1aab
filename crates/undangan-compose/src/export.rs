// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text export of personalized messages.
//!
//! One block per guest:
//! ```text
//! === <guest name> ===
//! <personalized message>
//! <50 equals signs>
//! ```
//! joined with a single newline, which leaves one blank line between blocks
//! since each block already ends in a newline.

use undangan_core::{Guest, Template};

use crate::personalize::personalize;

const RULE_WIDTH: usize = 50;

/// Render one export block.
pub fn export_block(guest_name: &str, message: &str) -> String {
    format!("=== {guest_name} ===\n{message}\n{}\n", "=".repeat(RULE_WIDTH))
}

/// Join `(guest name, message)` pairs into the export document.
pub fn render_export<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    entries
        .into_iter()
        .map(|(name, message)| export_block(name, message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Personalize `template` for every guest and render the export document.
pub fn export_for_guests(template: &Template, guests: &[&Guest]) -> String {
    let entries: Vec<(String, String)> = guests
        .iter()
        .map(|g| (g.name.clone(), personalize(&template.content, &g.name)))
        .collect();
    render_export(entries.iter().map(|(n, m)| (n.as_str(), m.as_str())))
}

/// The download file name the original app used:
/// `undangan-<template-name-slug>.txt`.
pub fn export_file_name(template_name: &str) -> String {
    let slug = template_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("undangan-{slug}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use undangan_core::TemplateKind;

    #[test]
    fn block_has_header_body_and_rule() {
        let block = export_block("Budi", "Halo Budi");
        assert_eq!(
            block,
            format!("=== Budi ===\nHalo Budi\n{}\n", "=".repeat(50))
        );
    }

    #[test]
    fn blocks_are_separated_by_a_blank_line() {
        let doc = render_export([("A", "pesan a"), ("B", "pesan b")]);
        let rule = "=".repeat(50);
        assert_eq!(
            doc,
            format!("=== A ===\npesan a\n{rule}\n\n=== B ===\npesan b\n{rule}\n")
        );
    }

    #[test]
    fn export_for_guests_personalizes_each_block() {
        let template = Template::new("Singkat", TemplateKind::Informal, "Halo {nama_tamu}!");
        let ani = Guest::new("Ani", None);
        let budi = Guest::new("Budi", None);

        let doc = export_for_guests(&template, &[&ani, &budi]);
        assert!(doc.contains("=== Ani ===\nHalo Ani!"));
        assert!(doc.contains("=== Budi ===\nHalo Budi!"));
    }

    #[test]
    fn file_name_is_a_lowercase_slug() {
        assert_eq!(
            export_file_name("Template Formal 1"),
            "undangan-template-formal-1.txt"
        );
    }
}
