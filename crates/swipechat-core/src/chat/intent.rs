//! The reply-or-edit target steering what the next send does.

use serde::Serialize;

use super::message::Message;
use crate::types::MessageId;

/// At most one in-flight intent.
///
/// Holding replying and editing in one enum makes "both set" unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum PendingIntent {
    /// The next send appends a plain message
    #[default]
    Idle,
    /// The next send appends a reply quoting this message
    ReplyingTo(Message),
    /// The next send rewrites this message in place
    Editing(Message),
}

impl PendingIntent {
    /// The message the intent points at, if any.
    pub fn target(&self) -> Option<&Message> {
        match self {
            PendingIntent::Idle => None,
            PendingIntent::ReplyingTo(m) | PendingIntent::Editing(m) => Some(m),
        }
    }

    /// Id of the targeted message, if any.
    pub fn target_id(&self) -> Option<MessageId> {
        self.target().map(|m| m.id)
    }

    /// Whether the intent points at `id`.
    pub fn references(&self, id: MessageId) -> bool {
        self.target_id() == Some(id)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PendingIntent::Idle)
    }

    pub fn is_replying(&self) -> bool {
        matches!(self, PendingIntent::ReplyingTo(_))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, PendingIntent::Editing(_))
    }
}
