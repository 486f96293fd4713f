//! System clipboard collaborator for the copy buttons.
//!
//! Writing the clipboard is a side effect outside the feedback
//! controller's responsibility; the page calls this and then activates
//! the matching feedback target. A fresh `arboard` handle is opened per
//! write so no clipboard resource is held between clicks.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Place `text` on the system clipboard.
///
/// Fails when no clipboard is reachable (headless session, denied
/// access); callers treat that as non-fatal since the confirmation
/// indicator is cosmetic.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text)
        .context("clipboard write failed")?;
    Ok(())
}
