//! Plain-text transcript export.

use super::aggregate::Message;
use super::error::ChatError;
use chrono::{DateTime, Utc};

pub const EXPORT_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// Ready-to-download transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptExport {
    pub filename: String,
    pub content: String,
}

impl TranscriptExport {
    pub fn build(messages: &[Message], now: DateTime<Utc>) -> Result<Self, ChatError> {
        if messages.is_empty() {
            return Err(ChatError::NothingToExport);
        }
        Ok(Self {
            filename: export_filename(now),
            content: render_transcript(messages),
        })
    }
}

/// `"<label>: <text>"` per message, separated by a blank line
pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|msg| format!("{}: {}", msg.sender.label(), msg.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Example: 2024-03-15T14:02:26.123Z -> "chat_history_2024-03-15T14-02-26.txt"
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("chat_history_{}.txt", now.format("%Y-%m-%dT%H-%M-%S"))
}
