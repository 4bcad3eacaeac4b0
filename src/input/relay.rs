//! Relay inbox: text handed over by another process
//!
//! A sender drops a JSON payload `{ "text": ..., "timestamp": <epoch ms> }`
//! into an inbox file and launches the reader. The reader takes the payload
//! once: the file is removed whether or not it is used, and payloads older
//! than [`FRESHNESS_WINDOW_MS`] are ignored so a stale hand-off is never
//! replayed on a later launch.

use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{LoadError, LoadedText};

pub const FRESHNESS_WINDOW_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPayload {
    pub text: Option<String>,
    /// Creation time in milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl RelayPayload {
    pub fn new(text: impl Into<String>, timestamp: u64) -> Self {
        Self {
            text: Some(text.into()),
            timestamp,
        }
    }

    /// A payload stamped in the future counts as fresh.
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.timestamp) < FRESHNESS_WINDOW_MS
    }
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

/// Writes `payload` to the inbox, replacing anything pending.
pub fn write_pending(path: &Path, payload: &RelayPayload) -> Result<(), LoadError> {
    let json = serde_json::to_string(payload)?;
    fs::write(path, json).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Takes the pending payload out of the inbox.
///
/// Returns `Ok(None)` when the inbox is empty, the payload is stale, or it
/// carries no text.
pub fn take_pending(path: &Path, now_ms: u64) -> Result<Option<LoadedText>, LoadError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "could not clear relay inbox");
    }

    let payload: RelayPayload = serde_json::from_str(&raw)?;
    if !payload.is_fresh(now_ms) {
        info!(
            age_ms = now_ms.saturating_sub(payload.timestamp),
            "ignoring stale relay payload"
        );
        return Ok(None);
    }

    let Some(text) = payload.text else {
        return Ok(None);
    };
    match LoadedText::new(text, "relay") {
        Ok(loaded) => {
            info!(bytes = loaded.text.len(), "accepted relay payload");
            Ok(Some(loaded))
        }
        Err(LoadError::EmptyInput(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn inbox(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("readster_relay_{}_{}.json", std::process::id(), name))
    }

    #[test]
    fn test_freshness_window() {
        let payload = RelayPayload::new("hi", 1_000_000);
        assert!(payload.is_fresh(1_000_000));
        assert!(payload.is_fresh(1_029_999));
        assert!(!payload.is_fresh(1_030_000));
        assert!(payload.is_fresh(999_000));
    }

    #[test]
    fn test_payload_wire_format() {
        let payload: RelayPayload =
            serde_json::from_str(r#"{"text":"selected words","timestamp":1700000000000}"#).unwrap();
        assert_eq!(payload, RelayPayload::new("selected words", 1_700_000_000_000));

        let payload: RelayPayload =
            serde_json::from_str(r#"{"text":null,"timestamp":5}"#).unwrap();
        assert_eq!(payload.text, None);
    }

    #[test]
    fn test_take_fresh_payload_and_clear_inbox() {
        let path = inbox("fresh");
        write_pending(&path, &RelayPayload::new("read me now", 10_000)).unwrap();

        let loaded = take_pending(&path, 12_000).unwrap().unwrap();
        assert_eq!(loaded.text, "read me now");
        assert_eq!(loaded.source, "relay");
        assert!(!path.exists());
        assert!(take_pending(&path, 12_000).unwrap().is_none());
    }

    #[test]
    fn test_stale_payload_is_dropped_and_cleared() {
        let path = inbox("stale");
        write_pending(&path, &RelayPayload::new("old news", 10_000)).unwrap();

        assert!(take_pending(&path, 10_000 + FRESHNESS_WINDOW_MS).unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_or_blank_text_is_none() {
        let path = inbox("blank");
        write_pending(
            &path,
            &RelayPayload {
                text: None,
                timestamp: 0,
            },
        )
        .unwrap();
        assert!(take_pending(&path, 1).unwrap().is_none());

        write_pending(&path, &RelayPayload::new("   ", 0)).unwrap();
        assert!(take_pending(&path, 1).unwrap().is_none());
    }

    #[test]
    fn test_malformed_payload_is_error_and_cleared() {
        let path = inbox("malformed");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            take_pending(&path, 0),
            Err(LoadError::RelayPayload(_))
        ));
        assert!(!path.exists());
    }
}
