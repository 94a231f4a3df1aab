// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Percent-encoding with JavaScript `encodeURIComponent` semantics.
//!
//! The original app built its URLs in the browser; data written by it must
//! keep round-tripping, so the exact same character set stays unescaped:
//! `A-Z a-z 0-9 - _ . ! ~ * ' ( )`. Non-ASCII encodes as UTF-8 bytes.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string the way `encodeURIComponent` would.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
