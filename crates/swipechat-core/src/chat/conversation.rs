//! Conversation abstraction for the chat screen
//!
//! A [`Conversation`] is the insertion-ordered list of messages shown on the
//! screen. It also issues message ids.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::message::{Message, ReplySnapshot};
use crate::types::MessageId;

/// The messages on screen, oldest first.
///
/// The list only ever grows by [`push`](Self::push), shrinks by
/// [`remove`](Self::remove), or has one message's text rewritten by
/// [`edit`](Self::edit). It is never reordered.
///
/// # Example
///
/// ```ignore
/// let mut conversation = Conversation::new();
/// let id = conversation.push("Hello".to_string(), Local::now(), None);
/// conversation.edit(id, "Hello!".to_string());
///
/// for msg in conversation.messages() {
///     println!("{} {}", msg.timestamp, msg.text);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conversation {
    /// Messages in insertion order
    messages: Vec<Message>,
    /// Most recently issued id, kept across deletes so ids are never reused
    last_id: Option<MessageId>,
}

impl Conversation {
    /// Create a new empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new message created at `at` and return its id.
    pub fn push(
        &mut self,
        text: String,
        at: DateTime<Local>,
        reply_to: Option<ReplySnapshot>,
    ) -> MessageId {
        let id = MessageId::issue(self.last_id, at.timestamp_millis());
        self.last_id = Some(id);
        self.messages.push(Message::new(id, text, at, reply_to));
        id
    }

    /// Rewrite the text of message `id` and mark it edited.
    ///
    /// Returns false if no such message exists.
    pub fn edit(&mut self, id: MessageId, text: String) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.text = text;
                message.edited = true;
                true
            }
            None => false,
        }
    }

    /// Remove message `id`, returning it if it existed.
    pub fn remove(&mut self, id: MessageId) -> Option<Message> {
        let pos = self.messages.iter().position(|m| m.id == id)?;
        Some(self.messages.remove(pos))
    }

    /// Look up a message by id.
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Whether a message with this id is in the conversation.
    pub fn contains(&self, id: MessageId) -> bool {
        self.get(id).is_some()
    }

    /// Look up a message by its 1-based position on screen.
    pub fn at_position(&self, position: usize) -> Option<&Message> {
        position.checked_sub(1).and_then(|i| self.messages.get(i))
    }

    /// 1-based position of message `id`.
    pub fn position_of(&self, id: MessageId) -> Option<usize> {
        self.messages.iter().position(|m| m.id == id).map(|i| i + 1)
    }

    /// Get all messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 13, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_conversation() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert_eq!(conversation.len(), 0);
        assert!(conversation.messages().is_empty());
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut conversation = Conversation::new();
        conversation.push("one".to_string(), noon(), None);
        conversation.push("two".to_string(), noon(), None);
        conversation.push("three".to_string(), noon(), None);

        let texts: Vec<_> = conversation.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert_eq!(conversation.messages().last().unwrap().text, "three");
    }

    #[test]
    fn test_push_same_millisecond_unique_ids() {
        let mut conversation = Conversation::new();
        let a = conversation.push("a".to_string(), noon(), None);
        let b = conversation.push("b".to_string(), noon(), None);
        let c = conversation.push("c".to_string(), noon(), None);

        assert!(a < b && b < c);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut conversation = Conversation::new();
        conversation.push("a".to_string(), noon(), None);
        let b = conversation.push("b".to_string(), noon(), None);
        conversation.remove(b);

        let c = conversation.push("c".to_string(), noon(), None);
        assert_ne!(b, c);
        assert!(c > b);
    }

    #[test]
    fn test_edit_in_place() {
        let mut conversation = Conversation::new();
        let a = conversation.push("a".to_string(), noon(), None);
        let b = conversation.push("b".to_string(), noon(), None);

        assert!(conversation.edit(a, "A".to_string()));

        assert_eq!(conversation.position_of(a), Some(1));
        assert_eq!(conversation.get(a).unwrap().text, "A");
        assert!(conversation.get(a).unwrap().edited);
        assert!(!conversation.get(b).unwrap().edited);
    }

    #[test]
    fn test_edit_missing() {
        let mut conversation = Conversation::new();
        assert!(!conversation.edit(MessageId(99), "x".to_string()));
    }

    #[test]
    fn test_remove() {
        let mut conversation = Conversation::new();
        let a = conversation.push("a".to_string(), noon(), None);
        let b = conversation.push("b".to_string(), noon(), None);

        let removed = conversation.remove(a).unwrap();
        assert_eq!(removed.text, "a");
        assert!(!conversation.contains(a));
        assert_eq!(conversation.position_of(b), Some(1));
        assert!(conversation.remove(a).is_none());
    }

    #[test]
    fn test_at_position() {
        let mut conversation = Conversation::new();
        conversation.push("a".to_string(), noon(), None);
        conversation.push("b".to_string(), noon(), None);

        assert!(conversation.at_position(0).is_none());
        assert_eq!(conversation.at_position(1).unwrap().text, "a");
        assert_eq!(conversation.at_position(2).unwrap().text, "b");
        assert!(conversation.at_position(3).is_none());
    }
}
