//! Render-ready view of the chat state
//!
//! [`render`] is a pure function from [`ChatState`] to [`ChatView`]. Both the
//! desktop screen and the CLI draw from it, so the rules for banners,
//! placeholders and the send button live in one place.

use serde::Serialize;

use crate::chat::{ChatState, PendingIntent};
use crate::types::MessageId;

/// Composer placeholder while editing.
pub const EDIT_PLACEHOLDER: &str = "Edit message";
/// Composer placeholder otherwise.
pub const MESSAGE_PLACEHOLDER: &str = "Message";

/// One row of the message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRow {
    /// 1-based position on screen
    pub position: usize,
    pub id: MessageId,
    pub text: String,
    pub timestamp: String,
    pub edited: bool,
    /// Text of the quoted message, as it read when the reply was sent
    pub quoted: Option<String>,
    /// Whether this row is the target of the pending reply or edit
    pub targeted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BannerKind {
    Reply,
    Edit,
}

/// The preview strip above the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

/// Everything needed to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatView {
    pub rows: Vec<MessageRow>,
    pub banner: Option<Banner>,
    pub placeholder: &'static str,
    pub draft: String,
    /// The send button only shows for a non-blank draft
    pub can_send: bool,
    /// Row awaiting delete confirmation
    pub confirming_delete: Option<MessageId>,
}

/// Derive the view for `state`.
pub fn render(state: &ChatState) -> ChatView {
    let pending = state.pending();

    let rows = state
        .messages()
        .iter()
        .enumerate()
        .map(|(i, m)| MessageRow {
            position: i + 1,
            id: m.id,
            text: m.text.clone(),
            timestamp: m.timestamp.clone(),
            edited: m.edited,
            quoted: m.reply_to.as_ref().map(|r| r.text.clone()),
            targeted: pending.references(m.id),
        })
        .collect();

    let banner = match pending {
        PendingIntent::Idle => None,
        PendingIntent::ReplyingTo(m) => Some(Banner {
            kind: BannerKind::Reply,
            text: format!("Replying to: {}", m.text),
        }),
        PendingIntent::Editing(_) => Some(Banner {
            kind: BannerKind::Edit,
            text: "Editing message".to_string(),
        }),
    };

    let placeholder = if pending.is_editing() {
        EDIT_PLACEHOLDER
    } else {
        MESSAGE_PLACEHOLDER
    };

    ChatView {
        rows,
        banner,
        placeholder,
        draft: state.draft().to_string(),
        can_send: !state.draft().trim().is_empty(),
        confirming_delete: state.pending_deletion(),
    }
}

impl ChatView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for message `id`, if shown.
    pub fn row(&self, id: MessageId) -> Option<&MessageRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Plain-text rendering of the screen, top to bottom.
    ///
    /// ```text
    /// [1] 14:05 hello
    ///     > hello
    /// [2] 14:06 hi back (edited)
    /// -- Replying to: hello
    /// draft: typing...
    /// ```
    pub fn to_transcript(&self) -> String {
        let mut out = String::new();

        if self.rows.is_empty() {
            out.push_str("(no messages)\n");
        }
        for row in &self.rows {
            if let Some(quoted) = &row.quoted {
                out.push_str(&format!("    > {}\n", first_line(quoted)));
            }
            out.push_str(&format!("[{}] {} {}", row.position, row.timestamp, row.text));
            if row.edited {
                out.push_str(" (edited)");
            }
            out.push('\n');
        }

        if let Some(banner) = &self.banner {
            out.push_str(&format!("-- {}\n", banner.text));
        }
        if let Some(id) = self.confirming_delete {
            if let Some(row) = self.row(id) {
                out.push_str(&format!("?? delete [{}]\n", row.position));
            }
        }
        if !self.draft.is_empty() {
            out.push_str(&format!("draft: {}\n", self.draft));
        }
        out
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn chat_with(texts: &[&str]) -> ChatState {
        let mut chat = ChatState::new();
        for (i, text) in texts.iter().enumerate() {
            let at = Local.with_ymd_and_hms(2024, 1, 13, 14, i as u32, 0).unwrap();
            chat.send_at(text, at);
        }
        chat
    }

    #[test]
    fn test_empty_view() {
        let view = render(&ChatState::new());
        assert!(view.is_empty());
        assert_eq!(view.banner, None);
        assert_eq!(view.placeholder, MESSAGE_PLACEHOLDER);
        assert!(!view.can_send);
        assert_eq!(view.to_transcript(), "(no messages)\n");
    }

    #[test]
    fn test_reply_banner() {
        let mut chat = chat_with(&["hello"]);
        let first = chat.messages()[0].clone();
        chat.begin_reply(&first);

        let view = render(&chat);
        let banner = view.banner.clone().unwrap();
        assert_eq!(banner.kind, BannerKind::Reply);
        assert_eq!(banner.text, "Replying to: hello");
        assert_eq!(view.placeholder, MESSAGE_PLACEHOLDER);
        assert!(view.rows[0].targeted);
    }

    #[test]
    fn test_edit_banner_and_placeholder() {
        let mut chat = chat_with(&["hello"]);
        let first = chat.messages()[0].clone();
        chat.begin_edit(&first);

        let view = render(&chat);
        assert_eq!(view.banner.unwrap().text, "Editing message");
        assert_eq!(view.placeholder, EDIT_PLACEHOLDER);
        assert_eq!(view.draft, "hello");
        assert!(view.can_send);
    }

    #[test]
    fn test_can_send_ignores_whitespace() {
        let mut chat = ChatState::new();
        chat.set_draft("  \t");
        assert!(!render(&chat).can_send);
        chat.set_draft(" x ");
        assert!(render(&chat).can_send);
    }

    #[test]
    fn test_transcript() {
        let mut chat = chat_with(&["hello"]);
        let first = chat.messages()[0].clone();
        chat.begin_reply(&first);
        chat.send_at("hi back", Local.with_ymd_and_hms(2024, 1, 13, 14, 1, 0).unwrap());
        let second = chat.messages()[1].clone();
        chat.begin_edit(&second);
        chat.send("hi back!");
        chat.begin_reply(&first);
        chat.set_draft("typing");

        let transcript = render(&chat).to_transcript();
        assert_eq!(
            transcript,
            "[1] 14:00 hello\n    > hello\n[2] 14:01 hi back! (edited)\n-- Replying to: hello\ndraft: typing\n"
        );
    }

    #[test]
    fn test_transcript_shows_pending_delete() {
        let mut chat = chat_with(&["a", "b"]);
        let second = chat.messages()[1].id;
        chat.request_delete(second);

        let view = render(&chat);
        assert_eq!(view.confirming_delete, Some(second));
        assert!(view.to_transcript().contains("?? delete [2]\n"));
    }
}
