use arboard::Clipboard;
use tracing::info;

use super::{LoadError, LoadedText};

/// Reads the current text selection from the system clipboard.
pub fn load() -> Result<LoadedText, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    let loaded = LoadedText::new(text, "clipboard")?;
    info!(bytes = loaded.text.len(), "loaded clipboard");
    Ok(loaded)
}
