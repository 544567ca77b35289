//! Chat message types
//!
//! This module provides the [`Message`] struct shown in the conversation and
//! the [`ReplySnapshot`] a reply carries of the message it quotes.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::types::MessageId;

/// A copy of a quoted message, taken when the reply is sent.
///
/// This is a value, not a link back to the original: later edits or the
/// deletion of the quoted message leave the snapshot as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplySnapshot {
    /// Id of the quoted message at the time of quoting
    pub id: MessageId,
    /// Text of the quoted message at the time of quoting
    pub text: String,
}

/// A message in the conversation.
///
/// # Example
///
/// ```ignore
/// let message = Message {
///     id: MessageId(1705123456789),
///     text: "Hello!".to_string(),
///     timestamp: "14:05".to_string(),
///     created_at: 1705123456789,
///     reply_to: None,
///     edited: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Unique identifier, issued at creation
    pub id: MessageId,
    /// Message body; only changed by an edit
    pub text: String,
    /// Creation time formatted for display (`HH:MM`)
    pub timestamp: String,
    /// Creation time in Unix milliseconds
    pub created_at: i64,
    /// Snapshot of the message this one replies to
    pub reply_to: Option<ReplySnapshot>,
    /// Set on the first successful edit and never cleared
    pub edited: bool,
}

impl Message {
    /// Create a new, unedited message.
    pub fn new(
        id: MessageId,
        text: String,
        created_at: DateTime<Local>,
        reply_to: Option<ReplySnapshot>,
    ) -> Self {
        Self {
            id,
            text,
            timestamp: format_timestamp(&created_at),
            created_at: created_at.timestamp_millis(),
            reply_to,
            edited: false,
        }
    }

    /// Take a snapshot of this message for quoting.
    pub fn snapshot(&self) -> ReplySnapshot {
        ReplySnapshot {
            id: self.id,
            text: self.text.clone(),
        }
    }

    /// Whether this message quotes another one.
    pub fn is_reply(&self) -> bool {
        self.reply_to.is_some()
    }
}

/// Format a creation time the way message rows display it (`HH:MM`).
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}
