//! System clipboard access for the rewrite copy action.
//!
//! Failures are non-fatal: the caller shows a status note and the session
//! continues.

use anyhow::{Context, Result};

pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to write to clipboard")?;
    Ok(())
}
