//! Conversation log - timestamped record of everything said this session
//!
//! Display timestamps are formatted by the caller (the page's locale),
//! this module only stores and renders them.

use serde::Serialize;
use thiserror::Error;

/// First line of an exported conversation
pub const EXPORT_HEADER: &str = "=== SignAI Conversation Export ===";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExportError {
    #[error("No conversation to export!")]
    Empty,
}

/// Where an entry came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Gesture,
    Preset,
    Translation,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConversationEntry {
    pub text: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, timestamp: impl Into<String>, kind: EntryKind) {
        self.entries.push(ConversationEntry {
            text: text.into(),
            timestamp: timestamp.into(),
            kind,
        });
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Plain-text export, one "[time] text" line per entry
    pub fn export(&self) -> Result<String, ExportError> {
        if self.entries.is_empty() {
            return Err(ExportError::Empty);
        }

        let mut out = format!("{}\n\n", EXPORT_HEADER);
        for entry in &self.entries {
            out.push_str(&format!("[{}] {}\n", entry.timestamp, entry.text));
        }
        Ok(out)
    }

    /// Entries as a JSON array for the history panel
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }
}

/// Download name for an export made at `epoch_ms`
pub fn export_filename(epoch_ms: f64) -> String {
    format!("signai-conversation-{}.txt", epoch_ms as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_empty_fails() {
        let log = ConversationLog::new();
        assert_eq!(log.export(), Err(ExportError::Empty));
        assert_eq!(ExportError::Empty.to_string(), "No conversation to export!");
    }

    #[test]
    fn test_export_format() {
        let mut log = ConversationLog::new();
        log.push("Hello", "10:00:01 AM", EntryKind::Gesture);
        log.push("[ES] Hola", "10:00:05 AM", EntryKind::Translation);

        let text = log.export().unwrap();
        assert_eq!(
            text,
            "=== SignAI Conversation Export ===\n\n[10:00:01 AM] Hello\n[10:00:05 AM] [ES] Hola\n"
        );
    }

    #[test]
    fn test_clear() {
        let mut log = ConversationLog::new();
        log.push("Please stop!", "t", EntryKind::Preset);
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let mut log = ConversationLog::new();
        log.push("Yes", "9:15:00", EntryKind::Gesture);
        assert_eq!(
            log.to_json().unwrap(),
            r#"[{"text":"Yes","timestamp":"9:15:00","type":"gesture"}]"#
        );
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(1_700_000_000_123.0), "signai-conversation-1700000000123.txt");
    }
}
