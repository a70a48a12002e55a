//! Clipboard support
//!
//! One-shot copies into the system clipboard via arboard.

use std::io;

use crate::error::FindError;

/// Copy `text` to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), FindError> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| FindError::Io(io::Error::other(e.to_string())))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| FindError::Io(io::Error::other(e.to_string())))
}
