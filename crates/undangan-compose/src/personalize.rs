// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Guest-specific message generation.
//!
//! Two ordered passes over the template body:
//! 1. every literal `{nama_tamu}` token becomes the guest name (plain text,
//!    not URL-encoded), then
//! 2. URLs whose query string carries a `guest=` parameter get that
//!    parameter's value percent-encoded -- but only when the value equals
//!    the guest name verbatim, so unrelated query values survive untouched.
//!
//! The name lands in the message twice: once human-readable, once as a
//! machine-consumed URL parameter. Only the second occurrence may be
//! percent-encoded.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use undangan_core::types::GUEST_NAME_TOKEN;

use crate::encode::encode_uri_component;

// Capture group 2 runs to the next backtick, newline, or end of string, so
// names containing spaces are captured as a single token instead of the
// match stopping at the first internal space.
static GUEST_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(https?://[^\s]+\?[^`\s]*guest=)([^`\n]+)").expect("valid guest-param pattern")
});

/// Produce the personalized message for one guest.
///
/// Total over any input: a body with no token and no `guest=` URL comes back
/// unchanged, and re-running on already-personalized text is a no-op.
pub fn personalize(content: &str, guest_name: &str) -> String {
    // Literal substitution; a guest name full of regex metacharacters must
    // not corrupt either pass.
    let substituted = content.replace(GUEST_NAME_TOKEN, guest_name);

    GUEST_PARAM
        .replace_all(&substituted, |caps: &Captures| {
            if &caps[2] == guest_name {
                format!("{}{}", &caps[1], encode_uri_component(guest_name))
            } else {
                // The value is not exactly the guest name (extra text, or an
                // unrelated parameter that merely ends in `guest=`): keep the
                // original text for this match.
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn replaces_every_token_occurrence() {
        let content = "Halo {nama_tamu}! Sampai jumpa, {nama_tamu}.";
        let result = personalize(content, "Budi");
        assert_eq!(result, "Halo Budi! Sampai jumpa, Budi.");
        assert!(!result.contains(GUEST_NAME_TOKEN));
    }

    #[test]
    fn body_without_token_or_url_is_unchanged() {
        let content = "Pesan tanpa placeholder apa pun.";
        assert_eq!(personalize(content, "Budi"), content);
    }

    #[test]
    fn url_guest_param_is_encoded_while_text_stays_readable() {
        let content =
            "Halo {nama_tamu}!\nUndangan: https://contoh.id/undangan?guest={nama_tamu}\nDatang ya!";
        let result = personalize(content, "Budi Santoso");

        assert!(result.starts_with("Halo Budi Santoso!"));
        assert!(result.contains("https://contoh.id/undangan?guest=Budi%20Santoso"));
        assert!(result.ends_with("Datang ya!"));
    }

    #[test]
    fn spaced_name_is_captured_as_one_token_up_to_line_end() {
        let content = "https://contoh.id/u?guest={nama_tamu}\nbaris berikut";
        let result = personalize(content, "Siti Nur Aisyah");
        assert_eq!(
            result,
            "https://contoh.id/u?guest=Siti%20Nur%20Aisyah\nbaris berikut"
        );
    }

    #[test]
    fn backtick_terminates_the_capture() {
        let content = "Link: `https://contoh.id/u?guest={nama_tamu}` ya";
        let result = personalize(content, "Budi Santoso");
        assert_eq!(
            result,
            "Link: `https://contoh.id/u?guest=Budi%20Santoso` ya"
        );
    }

    #[test]
    fn other_query_values_are_left_untouched() {
        let content = "https://contoh.id/u?session=abc%20def&guest={nama_tamu}";
        let result = personalize(content, "Budi");
        assert_eq!(result, "https://contoh.id/u?session=abc%20def&guest=Budi");
    }

    #[test]
    fn mismatched_captured_value_skips_the_replacement() {
        // Extra text after the token means the capture is not exactly the
        // guest name; the original text must survive.
        let content = "https://contoh.id/u?guest={nama_tamu} (konfirmasi)";
        let result = personalize(content, "Budi Santoso");
        assert_eq!(
            result,
            "https://contoh.id/u?guest=Budi Santoso (konfirmasi)"
        );
    }

    #[test]
    fn regex_metacharacters_in_the_name_are_inert() {
        let content = "Halo {nama_tamu}! https://contoh.id/u?guest={nama_tamu}";
        let name = "B.u(d)i [ke-2]*";
        let result = personalize(content, name);
        assert!(result.starts_with(&format!("Halo {name}!")));
        assert!(result.contains("guest=B.u(d)i%20%5Bke-2%5D*"));
    }

    #[test]
    fn personalization_is_idempotent() {
        let content =
            "Halo {nama_tamu}! https://contoh.id/u?guest={nama_tamu}\nSampai jumpa {nama_tamu}.";
        for name in ["Budi", "Budi Santoso", "Nur'aini"] {
            let once = personalize(content, name);
            let twice = personalize(&once, name);
            assert_eq!(once, twice, "not idempotent for {name}");
        }
    }

    #[test]
    fn http_urls_match_too() {
        let content = "http://contoh.id/u?guest={nama_tamu}";
        assert_eq!(
            personalize(content, "Budi S"),
            "http://contoh.id/u?guest=Budi%20S"
        );
    }

    proptest! {
        /// No template leaves a token behind, whatever the name.
        #[test]
        fn no_token_survives(name in "[A-Za-z0-9 .'()-]{1,30}") {
            let content = "A {nama_tamu} B {nama_tamu} C";
            let result = personalize(content, &name);
            prop_assert!(!result.contains(GUEST_NAME_TOKEN));
        }

        /// Idempotence holds for arbitrary printable names.
        #[test]
        fn idempotent_for_arbitrary_names(name in "[A-Za-z0-9 .'()-]{1,30}") {
            let content = "Halo {nama_tamu}! https://contoh.id/u?guest={nama_tamu}";
            let once = personalize(content, &name);
            prop_assert_eq!(personalize(&once, &name), once);
        }
    }
}
