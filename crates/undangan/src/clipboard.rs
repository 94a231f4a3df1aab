// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System clipboard via the platform's copy utility.
//!
//! Pipes text into the first of `wl-copy`, `xclip`, or `pbcopy` found on
//! PATH. No utility at all is an environment-capability error surfaced to
//! the user, not a crash.

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;
use undangan_core::{Clipboard, UndanganError};

const CANDIDATES: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["pbcopy"],
];

pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), UndanganError> {
        for candidate in CANDIDATES {
            let (program, args) = (candidate[0], &candidate[1..]);
            let spawned = Command::new(program)
                .args(args)
                .stdin(std::process::Stdio::piped())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn();

            let mut child = match spawned {
                Ok(child) => child,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(UndanganError::Clipboard {
                        message: format!("failed to start {program}: {e}"),
                    });
                }
            };

            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(text.as_bytes())
                    .await
                    .map_err(|e| UndanganError::Clipboard {
                        message: format!("failed to pipe text to {program}: {e}"),
                    })?;
                drop(stdin);
            }

            let status = child.wait().await.map_err(|e| UndanganError::Clipboard {
                message: format!("{program} did not finish: {e}"),
            })?;
            if status.success() {
                debug!(program, "clipboard write ok");
                return Ok(());
            }
            return Err(UndanganError::Clipboard {
                message: format!("{program} exited with {status}"),
            });
        }

        Err(UndanganError::Clipboard {
            message: "no clipboard utility found (wl-copy, xclip, or pbcopy)".to_string(),
        })
    }
}
