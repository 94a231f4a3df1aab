// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! WhatsApp deep-link building.
//!
//! The phone number goes into the link as the canonical `+62...` number with
//! the leading `+` stripped; the message text is percent-encoded.

use crate::encode::encode_uri_component;

/// Build the `api.whatsapp.com` send link.
pub fn send_link(number: &str, message: &str) -> String {
    let phone = number.strip_prefix('+').unwrap_or(number);
    format!(
        "https://api.whatsapp.com/send/?phone={phone}&text={}",
        encode_uri_component(message)
    )
}

/// Build the short `wa.me` link.
pub fn wa_me_link(number: &str, message: &str) -> String {
    let phone = number.strip_prefix('+').unwrap_or(number);
    format!("https://wa.me/{phone}?text={}", encode_uri_component(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_link_strips_the_plus_and_encodes_the_text() {
        let link = send_link("+628123456789", "Halo Budi, datang ya!");
        assert_eq!(
            link,
            "https://api.whatsapp.com/send/?phone=628123456789&text=Halo%20Budi%2C%20datang%20ya!"
        );
    }

    #[test]
    fn wa_me_link_uses_the_short_host() {
        let link = wa_me_link("+628123456789", "Halo");
        assert_eq!(link, "https://wa.me/628123456789?text=Halo");
    }

    #[test]
    fn numbers_without_a_plus_pass_through() {
        let link = wa_me_link("628123456789", "x");
        assert!(link.starts_with("https://wa.me/628123456789?"));
    }

    #[test]
    fn newlines_in_the_message_are_encoded() {
        let link = send_link("+628123456789", "baris satu\nbaris dua");
        assert!(link.ends_with("text=baris%20satu%0Abaris%20dua"));
    }
}
