// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message composition for the Undangan invitation manager.
//!
//! Turns a template body plus a guest record into the exact text to send,
//! display, or export: placeholder substitution, URL-parameter re-encoding,
//! WhatsApp deep links, and the plain-text export format.

pub mod encode;
pub mod export;
pub mod personalize;
pub mod whatsapp;

pub use encode::encode_uri_component;
pub use export::{export_block, export_file_name, export_for_guests, render_export};
pub use personalize::personalize;
pub use whatsapp::{send_link, wa_me_link};
