//! System clipboard access for the copy actions.
//!
//! Clipboard failure (no display server, denied access) is an expected
//! environment, not a bug: callers degrade to printing the serialized text
//! on stdout and warn on stderr.

use anyhow::Context;

/// Write text to the system clipboard.
pub fn copy_text(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("clipboard write failed")?;
    Ok(())
}
