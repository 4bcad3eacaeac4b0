use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Nothing to read in {0}")]
    EmptyInput(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Relay payload is malformed: {0}")]
    RelayPayload(#[from] serde_json::Error),
}

/// Text ready to be tokenized, with a label for where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    pub text: String,
    pub source: String,
}

impl LoadedText {
    /// Wraps `text`, rejecting input that has no words in it.
    pub fn new(text: String, source: impl Into<String>) -> Result<Self, LoadError> {
        let source = source.into();
        if text.trim().is_empty() {
            return Err(LoadError::EmptyInput(source));
        }
        Ok(Self { text, source })
    }
}

pub mod clipboard;
pub mod file;
pub mod relay;
