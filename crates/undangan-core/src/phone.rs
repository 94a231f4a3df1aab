// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indonesian WhatsApp number validation and canonicalization.
//!
//! Accepted input shapes after stripping spaces and hyphens: `08...`,
//! `628...`, `+628...`. The canonical stored form is `+628...`.

use std::sync::LazyLock;

use regex::Regex;

static INDONESIAN_WHATSAPP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+?628|08)\d{8,12}$").expect("valid number pattern"));

/// Strip whitespace and hyphens from user input.
fn clean(number: &str) -> String {
    number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Whether the input is an acceptable Indonesian WhatsApp number.
///
/// Empty input is valid -- the field is optional.
pub fn validate_whatsapp_number(number: &str) -> bool {
    if number.trim().is_empty() {
        return true;
    }
    INDONESIAN_WHATSAPP.is_match(&clean(number))
}

/// Canonicalize a number to the `+628...` form.
///
/// Inputs that match none of the known prefixes are returned cleaned but
/// otherwise untouched; validate first when canonical output is required.
pub fn format_whatsapp_number(number: &str) -> String {
    if number.trim().is_empty() {
        return String::new();
    }

    let cleaned = clean(number);
    if let Some(rest) = cleaned.strip_prefix("08") {
        format!("+628{rest}")
    } else if cleaned.starts_with("628") {
        format!("+{cleaned}")
    } else {
        cleaned
    }
}

/// Canonicalize an optional user-supplied number, mapping empty to `None`.
pub fn normalize_optional(number: Option<&str>) -> Option<String> {
    match number {
        Some(n) if !n.trim().is_empty() => Some(format_whatsapp_number(n)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_the_three_known_shapes() {
        assert!(validate_whatsapp_number("08123456789"));
        assert!(validate_whatsapp_number("628123456789"));
        assert!(validate_whatsapp_number("+628123456789"));
        assert!(validate_whatsapp_number("0812-3456-789"));
        assert!(validate_whatsapp_number("0812 3456 789"));
    }

    #[test]
    fn empty_is_valid_because_the_field_is_optional() {
        assert!(validate_whatsapp_number(""));
        assert!(validate_whatsapp_number("   "));
    }

    #[test]
    fn rejects_foreign_and_short_numbers() {
        assert!(!validate_whatsapp_number("+14155550100"));
        assert!(!validate_whatsapp_number("0812345"));
        assert!(!validate_whatsapp_number("bukan nomor"));
    }

    #[test]
    fn formats_each_prefix_to_canonical() {
        assert_eq!(format_whatsapp_number("08123456789"), "+628123456789");
        assert_eq!(format_whatsapp_number("628123456789"), "+628123456789");
        assert_eq!(format_whatsapp_number("+628123456789"), "+628123456789");
    }

    #[test]
    fn format_strips_separators() {
        assert_eq!(format_whatsapp_number("0812-3456 789"), "+628123456789");
    }

    #[test]
    fn normalize_optional_maps_empty_to_none() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("")), None);
        assert_eq!(normalize_optional(Some("  ")), None);
        assert_eq!(
            normalize_optional(Some("08123456789")),
            Some("+628123456789".to_string())
        );
    }

    proptest! {
        /// Formatting is idempotent: a canonicalized number re-formats to itself.
        #[test]
        fn format_is_idempotent(suffix in "[0-9]{8,12}") {
            let first = format_whatsapp_number(&format!("08{suffix}"));
            let second = format_whatsapp_number(&first);
            prop_assert_eq!(first, second);
        }

        /// Every valid input canonicalizes to a `+628...` number.
        #[test]
        fn valid_input_formats_to_canonical(prefix in "(\\+?628|08)", suffix in "[0-9]{8,12}") {
            let input = format!("{prefix}{suffix}");
            prop_assume!(validate_whatsapp_number(&input));
            let formatted = format_whatsapp_number(&input);
            prop_assert!(formatted.starts_with("+628"), "got {}", formatted);
        }
    }
}
