//! The conversation/composer state manager.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::conversation::Conversation;
use super::intent::PendingIntent;
use super::message::Message;
use crate::confirm::{Confirm, DeleteGate, DELETE_PROMPT};
use crate::types::MessageId;

/// What a send did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SendOutcome {
    /// A new message was appended
    Appended(MessageId),
    /// An existing message was rewritten in place
    Edited(MessageId),
    /// Nothing happened (blank text, or the edit target was gone)
    Ignored,
}

/// Everything the chat screen renders from.
///
/// All transitions take `&mut self` and are total: invalid input is absorbed
/// as a no-op. Clone the state to get an immutable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatState {
    conversation: Conversation,
    pending: PendingIntent,
    draft: String,
    deletion: DeleteGate,
}

impl ChatState {
    /// Create an empty chat screen state.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Composer
    // ------------------------------------------------------------------

    /// Replace the composer draft (two-way binding with the input field).
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Send the current draft.
    pub fn submit(&mut self) -> SendOutcome {
        let text = self.draft.clone();
        self.send(&text)
    }

    /// Send `text`, timestamped now.
    pub fn send(&mut self, text: &str) -> SendOutcome {
        self.send_at(text, Local::now())
    }

    /// Send `text` as if at time `now`.
    ///
    /// Blank text is ignored and leaves everything untouched. While editing,
    /// the target message is rewritten in place; otherwise a new message is
    /// appended, quoting the reply target if there is one. Either way the
    /// pending intent and the draft are cleared afterwards.
    pub fn send_at(&mut self, text: &str, now: DateTime<Local>) -> SendOutcome {
        if text.trim().is_empty() {
            tracing::debug!("Ignoring send of blank draft");
            return SendOutcome::Ignored;
        }

        let outcome = match std::mem::take(&mut self.pending) {
            PendingIntent::Editing(target) => {
                if self.conversation.edit(target.id, text.to_string()) {
                    tracing::debug!(id = %target.id, "Edited message");
                    SendOutcome::Edited(target.id)
                } else {
                    tracing::debug!(id = %target.id, "Edit target no longer exists");
                    SendOutcome::Ignored
                }
            }
            PendingIntent::ReplyingTo(target) => {
                // Quote the message as it reads now, not as it read when the
                // reply was started.
                let snapshot = self
                    .conversation
                    .get(target.id)
                    .map(Message::snapshot)
                    .unwrap_or_else(|| target.snapshot());
                let id = self.conversation.push(text.to_string(), now, Some(snapshot));
                tracing::debug!(%id, reply_to = %target.id, "Created reply");
                SendOutcome::Appended(id)
            }
            PendingIntent::Idle => {
                let id = self.conversation.push(text.to_string(), now, None);
                tracing::debug!(%id, "Created message");
                SendOutcome::Appended(id)
            }
        };

        self.draft.clear();
        outcome
    }

    // ------------------------------------------------------------------
    // Pending intent
    // ------------------------------------------------------------------

    /// Start replying to `message`.
    ///
    /// An edit in progress is abandoned together with its draft. Messages no
    /// longer in the conversation are ignored.
    pub fn begin_reply(&mut self, message: &Message) {
        let Some(current) = self.conversation.get(message.id) else {
            tracing::debug!(id = %message.id, "Ignoring reply to missing message");
            return;
        };
        if self.pending.is_editing() {
            self.draft.clear();
        }
        tracing::debug!(id = %current.id, "Replying to message");
        self.pending = PendingIntent::ReplyingTo(current.clone());
    }

    /// Start editing `message`, loading its text into the draft.
    ///
    /// A reply in progress is abandoned. Messages no longer in the
    /// conversation are ignored.
    pub fn begin_edit(&mut self, message: &Message) {
        let Some(current) = self.conversation.get(message.id) else {
            tracing::debug!(id = %message.id, "Ignoring edit of missing message");
            return;
        };
        tracing::debug!(id = %current.id, "Editing message");
        self.draft = current.text.clone();
        self.pending = PendingIntent::Editing(current.clone());
    }

    /// Drop the pending reply or edit and clear the draft.
    pub fn cancel_pending(&mut self) {
        self.pending = PendingIntent::Idle;
        self.draft.clear();
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Remove message `id` (the user has already confirmed).
    ///
    /// A pending intent pointing at the message is cleared. Replies quoting
    /// it keep their snapshot. Returns whether a message was removed.
    pub fn delete(&mut self, id: MessageId) -> bool {
        tracing::debug!(%id, "Handling delete");
        self.deletion.forget(id);

        if self.conversation.remove(id).is_none() {
            tracing::debug!(%id, "Delete of missing message ignored");
            return false;
        }

        if self.pending.references(id) {
            self.pending = PendingIntent::Idle;
        }
        tracing::debug!(%id, remaining = self.conversation.len(), "Message deleted");
        true
    }

    /// Ask `confirm` and delete message `id` only on a yes.
    pub fn delete_with<C: Confirm + ?Sized>(&mut self, id: MessageId, confirm: &mut C) -> bool {
        if !self.conversation.contains(id) {
            return false;
        }
        if confirm.confirm(DELETE_PROMPT) {
            self.delete(id)
        } else {
            tracing::debug!(%id, "Delete declined");
            false
        }
    }

    /// Open the delete confirmation for message `id`.
    ///
    /// Replaces any unanswered request. Ids not in the conversation are
    /// ignored. Returns whether the gate is now waiting on `id`.
    pub fn request_delete(&mut self, id: MessageId) -> bool {
        if !self.conversation.contains(id) {
            tracing::debug!(%id, "Ignoring delete request for missing message");
            return false;
        }
        if let Some(replaced) = self.deletion.request(id) {
            tracing::debug!(%replaced, %id, "Replaced unanswered delete request");
        }
        true
    }

    /// Answer the outstanding delete confirmation.
    ///
    /// Returns the id of the removed message, if the answer was yes and the
    /// message still existed.
    pub fn resolve_delete(&mut self, confirmed: bool) -> Option<MessageId> {
        let id = self.deletion.take()?;
        if confirmed {
            self.delete(id).then_some(id)
        } else {
            tracing::debug!(%id, "Delete declined");
            None
        }
    }

    /// The message awaiting delete confirmation, if any.
    pub fn pending_deletion(&self) -> Option<MessageId> {
        self.deletion.pending()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.conversation.get(id)
    }

    pub fn pending(&self) -> &PendingIntent {
        &self.pending
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn len(&self) -> usize {
        self.conversation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversation.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::Always;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 13, 14, minute, 0).unwrap()
    }

    fn chat_with(texts: &[&str]) -> ChatState {
        let mut chat = ChatState::new();
        for (i, text) in texts.iter().enumerate() {
            chat.send_at(text, at(i as u32));
        }
        chat
    }

    #[test]
    fn test_send_appends() {
        let mut chat = ChatState::new();
        chat.set_draft("hello");

        let outcome = chat.submit();

        let SendOutcome::Appended(id) = outcome else {
            panic!("expected append, got {:?}", outcome);
        };
        assert_eq!(chat.len(), 1);
        assert_eq!(chat.message(id).unwrap().text, "hello");
        assert_eq!(chat.draft(), "");
        assert!(chat.pending().is_idle());
    }

    #[test]
    fn test_send_keeps_text_untrimmed() {
        let mut chat = ChatState::new();
        chat.send("  padded  ");
        assert_eq!(chat.messages()[0].text, "  padded  ");
    }

    #[test]
    fn test_blank_send_is_noop() {
        let mut chat = chat_with(&["a"]);
        chat.set_draft("   ");
        let before = chat.clone();

        assert_eq!(chat.submit(), SendOutcome::Ignored);
        assert_eq!(chat.send(""), SendOutcome::Ignored);
        assert_eq!(chat.send("\t\n"), SendOutcome::Ignored);
        assert_eq!(chat, before);
    }

    #[test]
    fn test_blank_send_keeps_pending_intent() {
        let mut chat = chat_with(&["a"]);
        let a = chat.messages()[0].clone();
        chat.begin_reply(&a);

        chat.send("  ");
        assert!(chat.pending().is_replying());
    }

    #[test]
    fn test_edit_mutates_in_place() {
        let mut chat = chat_with(&["a", "b"]);
        let a = chat.messages()[0].clone();

        chat.begin_edit(&a);
        assert_eq!(chat.draft(), "a");
        assert!(chat.pending().is_editing());

        assert_eq!(chat.send("hello"), SendOutcome::Edited(a.id));

        assert_eq!(chat.len(), 2);
        let edited = &chat.messages()[0];
        assert_eq!(edited.id, a.id);
        assert_eq!(edited.text, "hello");
        assert!(edited.edited);
        assert_eq!(edited.timestamp, a.timestamp);
        assert!(chat.pending().is_idle());
        assert_eq!(chat.draft(), "");
    }

    #[test]
    fn test_edited_flag_never_cleared() {
        let mut chat = chat_with(&["a"]);
        let a = chat.messages()[0].clone();
        chat.begin_edit(&a);
        chat.send("b");

        let a = chat.messages()[0].clone();
        chat.begin_edit(&a);
        chat.send("a");
        assert!(chat.messages()[0].edited);
    }

    #[test]
    fn test_reply_snapshot() {
        let mut chat = chat_with(&["hi"]);
        let a = chat.messages()[0].clone();

        chat.begin_reply(&a);
        chat.send("re: hi");

        let b = &chat.messages()[1];
        let quoted = b.reply_to.as_ref().unwrap();
        assert_eq!(quoted.id, a.id);
        assert_eq!(quoted.text, "hi");
        assert!(chat.pending().is_idle());
    }

    #[test]
    fn test_reply_quotes_text_at_send_time() {
        let mut chat = chat_with(&["draft one"]);
        let a = chat.messages()[0].clone();

        chat.begin_reply(&a);
        // The quoted message is edited before the reply goes out.
        chat.conversation.edit(a.id, "draft two".to_string());
        chat.send("agreed");

        assert_eq!(chat.messages()[1].reply_to.as_ref().unwrap().text, "draft two");
    }

    #[test]
    fn test_begin_reply_cancels_edit_and_draft() {
        let mut chat = chat_with(&["a", "b"]);
        let a = chat.messages()[0].clone();
        let b = chat.messages()[1].clone();

        chat.begin_edit(&a);
        chat.begin_reply(&b);

        assert_eq!(*chat.pending(), PendingIntent::ReplyingTo(b));
        assert_eq!(chat.draft(), "");
    }

    #[test]
    fn test_begin_reply_keeps_typed_draft() {
        let mut chat = chat_with(&["a"]);
        let a = chat.messages()[0].clone();

        chat.set_draft("typing");
        chat.begin_reply(&a);
        assert_eq!(chat.draft(), "typing");
    }

    #[test]
    fn test_begin_edit_replaces_reply() {
        let mut chat = chat_with(&["a", "b"]);
        let a = chat.messages()[0].clone();
        let b = chat.messages()[1].clone();

        chat.begin_reply(&a);
        chat.begin_edit(&b);

        assert_eq!(*chat.pending(), PendingIntent::Editing(b.clone()));
        assert_eq!(chat.draft(), "b");
    }

    #[test]
    fn test_cancel_pending() {
        let mut chat = chat_with(&["a"]);
        let a = chat.messages()[0].clone();
        chat.begin_edit(&a);

        chat.cancel_pending();

        assert!(chat.pending().is_idle());
        assert_eq!(chat.draft(), "");
        assert_eq!(chat.messages()[0].text, "a");
    }

    #[test]
    fn test_begin_on_missing_message_ignored() {
        let mut chat = chat_with(&["a"]);
        let a = chat.messages()[0].clone();
        chat.delete(a.id);

        chat.begin_reply(&a);
        assert!(chat.pending().is_idle());
        chat.begin_edit(&a);
        assert!(chat.pending().is_idle());
        assert_eq!(chat.draft(), "");
    }

    #[test]
    fn test_delete_clears_dangling_intent() {
        let mut chat = chat_with(&["a"]);
        let a = chat.messages()[0].clone();
        chat.begin_edit(&a);

        assert!(chat.delete(a.id));

        assert!(chat.is_empty());
        assert!(chat.pending().is_idle());
    }

    #[test]
    fn test_delete_keeps_unrelated_intent() {
        let mut chat = chat_with(&["a", "b"]);
        let a = chat.messages()[0].clone();
        let b = chat.messages()[1].clone();
        chat.begin_reply(&a);

        chat.delete(b.id);
        assert_eq!(*chat.pending(), PendingIntent::ReplyingTo(a));
    }

    #[test]
    fn test_delete_does_not_cascade_to_replies() {
        let mut chat = chat_with(&["original"]);
        let a = chat.messages()[0].clone();
        chat.begin_reply(&a);
        chat.send("quoting");

        chat.delete(a.id);

        assert_eq!(chat.len(), 1);
        assert_eq!(chat.messages()[0].reply_to.as_ref().unwrap().text, "original");
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut chat = chat_with(&["a"]);
        let before = chat.clone();
        assert!(!chat.delete(MessageId(1)));
        assert_eq!(chat, before);
    }

    #[test]
    fn test_delete_with_declined() {
        let mut chat = chat_with(&["a"]);
        let a = chat.messages()[0].clone();
        chat.begin_reply(&a);
        let before = chat.clone();

        assert!(!chat.delete_with(a.id, &mut Always(false)));
        assert_eq!(chat, before);
    }

    #[test]
    fn test_delete_with_confirmed() {
        let mut chat = chat_with(&["a"]);
        let a = chat.messages()[0].clone();

        let mut prompts = Vec::new();
        let deleted = chat.delete_with(a.id, &mut |prompt: &str| {
            prompts.push(prompt.to_string());
            true
        });

        assert!(deleted);
        assert!(chat.is_empty());
        assert_eq!(prompts, vec![DELETE_PROMPT.to_string()]);
    }

    #[test]
    fn test_delete_with_missing_does_not_ask() {
        let mut chat = ChatState::new();
        let mut asked = false;
        chat.delete_with(MessageId(5), &mut |_: &str| {
            asked = true;
            true
        });
        assert!(!asked);
    }

    #[test]
    fn test_gate_confirm_and_decline() {
        let mut chat = chat_with(&["a", "b"]);
        let a = chat.messages()[0].id;
        let b = chat.messages()[1].id;

        assert!(chat.request_delete(a));
        assert_eq!(chat.pending_deletion(), Some(a));
        assert_eq!(chat.resolve_delete(false), None);
        assert_eq!(chat.len(), 2);
        assert_eq!(chat.pending_deletion(), None);

        chat.request_delete(b);
        assert_eq!(chat.resolve_delete(true), Some(b));
        assert_eq!(chat.len(), 1);
        assert_eq!(chat.resolve_delete(true), None);
    }

    #[test]
    fn test_gate_replaces_and_ignores_missing() {
        let mut chat = chat_with(&["a", "b"]);
        let a = chat.messages()[0].id;
        let b = chat.messages()[1].id;

        chat.request_delete(a);
        chat.request_delete(b);
        assert!(!chat.request_delete(MessageId(3)));
        assert_eq!(chat.pending_deletion(), Some(b));

        chat.resolve_delete(true);
        assert!(chat.message(a).is_some());
        assert!(chat.message(b).is_none());
    }

    #[test]
    fn test_direct_delete_closes_gate_for_same_message() {
        let mut chat = chat_with(&["a"]);
        let a = chat.messages()[0].id;
        chat.request_delete(a);

        chat.delete(a);
        assert_eq!(chat.pending_deletion(), None);
    }

    #[test]
    fn test_state_dump_shape() {
        let mut chat = ChatState::new();
        chat.send_at("hello", at(1));
        let id = chat.messages()[0].id;
        chat.request_delete(id);
        chat.set_draft("typing");

        let json = serde_json::to_value(&chat).unwrap();
        assert_eq!(json["conversation"]["messages"][0]["text"], "hello");
        assert_eq!(json["pending"]["kind"], "idle");
        assert_eq!(json["draft"], "typing");
        assert_eq!(json["deletion"]["pending"], serde_json::json!(id.0));
    }
}
