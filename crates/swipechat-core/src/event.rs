//! Discrete user events and the text form they take in scripts
//!
//! Every gesture on the chat screen maps to one [`ChatEvent`]. Front-ends
//! that cannot hand over a [`Message`](crate::Message) directly (the CLI,
//! replay scripts) name messages by their 1-based position on screen.
//!
//! ## Script format
//!
//! One event per line; blank lines and lines starting with `#` are skipped:
//!
//! ```text
//! send hello there
//! reply 1
//! send quoting the first message
//! edit 2
//! draft quoting message one
//! submit
//! delete 1
//! confirm yes
//! cancel
//! ```

use std::str::FromStr;

use serde::Serialize;

use crate::chat::{ChatState, SendOutcome};
use crate::error::{ChatError, ChatResult};
use crate::types::MessageId;

/// A single user action on the chat screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "arg", rename_all = "snake_case")]
pub enum ChatEvent {
    /// Composer text changed
    Draft(String),
    /// Send this text
    Send(String),
    /// Send whatever is in the composer
    Submit,
    /// Start replying to the message at this position
    Reply(usize),
    /// Start editing the message at this position
    Edit(usize),
    /// Dismiss the reply/edit preview
    Cancel,
    /// Ask to delete the message at this position
    RequestDelete(usize),
    /// Answer the outstanding delete confirmation
    ConfirmDelete(bool),
}

/// What applying an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventOutcome {
    DraftUpdated,
    Sent(SendOutcome),
    IntentChanged,
    Cancelled,
    DeleteRequested(MessageId),
    Deleted(MessageId),
    DeleteDeclined,
    /// The event referred to something that does not exist
    Ignored,
}

impl ChatState {
    /// Apply one event. Positions that do not exist are ignored.
    pub fn apply(&mut self, event: &ChatEvent) -> EventOutcome {
        match event {
            ChatEvent::Draft(text) => {
                self.set_draft(text.as_str());
                EventOutcome::DraftUpdated
            }
            ChatEvent::Send(text) => EventOutcome::Sent(self.send(text)),
            ChatEvent::Submit => EventOutcome::Sent(self.submit()),
            ChatEvent::Reply(position) => match self.conversation().at_position(*position).cloned() {
                Some(message) => {
                    self.begin_reply(&message);
                    EventOutcome::IntentChanged
                }
                None => EventOutcome::Ignored,
            },
            ChatEvent::Edit(position) => match self.conversation().at_position(*position).cloned() {
                Some(message) => {
                    self.begin_edit(&message);
                    EventOutcome::IntentChanged
                }
                None => EventOutcome::Ignored,
            },
            ChatEvent::Cancel => {
                self.cancel_pending();
                EventOutcome::Cancelled
            }
            ChatEvent::RequestDelete(position) => {
                let target = self.conversation().at_position(*position).map(|m| m.id);
                match target {
                    Some(id) if self.request_delete(id) => EventOutcome::DeleteRequested(id),
                    _ => EventOutcome::Ignored,
                }
            }
            ChatEvent::ConfirmDelete(confirmed) => {
                if self.pending_deletion().is_none() {
                    return EventOutcome::Ignored;
                }
                match self.resolve_delete(*confirmed) {
                    Some(id) => EventOutcome::Deleted(id),
                    None => EventOutcome::DeleteDeclined,
                }
            }
        }
    }

    /// Apply a sequence of events in order.
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a ChatEvent>) {
        for event in events {
            let outcome = self.apply(event);
            tracing::trace!(?event, ?outcome, "Applied event");
        }
    }
}

impl ChatEvent {
    /// Parse one script line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// `line` is the 1-based line number used in error messages.
    pub fn parse_line(text: &str, line: usize) -> ChatResult<Option<ChatEvent>> {
        let text = text.trim_start();
        if text.trim().is_empty() || text.starts_with('#') {
            return Ok(None);
        }

        let (command, rest) = match text.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest),
            None => (text.trim_end(), ""),
        };
        let arg = rest.trim();

        let event = match command.to_ascii_lowercase().as_str() {
            // Text arguments keep their inner spacing; only the separator
            // after the command word is dropped.
            "send" => ChatEvent::Send(rest.trim_end_matches(['\r', '\n']).to_string()),
            "draft" => ChatEvent::Draft(rest.trim_end_matches(['\r', '\n']).to_string()),
            "submit" => ChatEvent::Submit,
            "reply" => ChatEvent::Reply(parse_position(command, arg, line)?),
            "edit" => ChatEvent::Edit(parse_position(command, arg, line)?),
            "delete" => ChatEvent::RequestDelete(parse_position(command, arg, line)?),
            "cancel" => ChatEvent::Cancel,
            "confirm" => ChatEvent::ConfirmDelete(parse_answer(arg, line)?),
            other => {
                return Err(ChatError::UnknownCommand {
                    line,
                    command: other.to_string(),
                })
            }
        };
        Ok(Some(event))
    }
}

impl FromStr for ChatEvent {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ChatEvent::parse_line(s, 1)? {
            Some(event) => Ok(event),
            None => Err(ChatError::UnknownCommand {
                line: 1,
                command: String::new(),
            }),
        }
    }
}

/// Parse a whole script into events.
pub fn parse_script(script: &str) -> ChatResult<Vec<ChatEvent>> {
    let mut events = Vec::new();
    for (index, text) in script.lines().enumerate() {
        if let Some(event) = ChatEvent::parse_line(text, index + 1)? {
            events.push(event);
        }
    }
    Ok(events)
}

fn parse_position(command: &str, arg: &str, line: usize) -> ChatResult<usize> {
    if arg.is_empty() {
        return Err(ChatError::MissingArgument {
            line,
            command: command.to_string(),
            expected: "a message position",
        });
    }
    let value = arg.trim_start_matches('#');
    match value.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(ChatError::InvalidPosition {
            line,
            value: arg.to_string(),
        }),
    }
}

fn parse_answer(arg: &str, line: usize) -> ChatResult<bool> {
    match arg.to_ascii_lowercase().as_str() {
        "" => Err(ChatError::MissingArgument {
            line,
            command: "confirm".to_string(),
            expected: "yes or no",
        }),
        "y" | "yes" | "true" => Ok(true),
        "n" | "no" | "false" => Ok(false),
        _ => Err(ChatError::InvalidAnswer {
            line,
            value: arg.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("send hello world".parse::<ChatEvent>().unwrap(), ChatEvent::Send("hello world".into()));
        assert_eq!("submit".parse::<ChatEvent>().unwrap(), ChatEvent::Submit);
        assert_eq!("reply 2".parse::<ChatEvent>().unwrap(), ChatEvent::Reply(2));
        assert_eq!("edit #3".parse::<ChatEvent>().unwrap(), ChatEvent::Edit(3));
        assert_eq!("delete 1".parse::<ChatEvent>().unwrap(), ChatEvent::RequestDelete(1));
        assert_eq!("cancel".parse::<ChatEvent>().unwrap(), ChatEvent::Cancel);
        assert_eq!("confirm yes".parse::<ChatEvent>().unwrap(), ChatEvent::ConfirmDelete(true));
        assert_eq!("CONFIRM n".parse::<ChatEvent>().unwrap(), ChatEvent::ConfirmDelete(false));
    }

    #[test]
    fn test_parse_send_keeps_inner_spacing() {
        assert_eq!(
            "send  two  spaces ".parse::<ChatEvent>().unwrap(),
            ChatEvent::Send(" two  spaces ".into())
        );
        assert_eq!("send".parse::<ChatEvent>().unwrap(), ChatEvent::Send(String::new()));
        assert_eq!("draft".parse::<ChatEvent>().unwrap(), ChatEvent::Draft(String::new()));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ChatEvent::parse_line("shout hi", 4),
            Err(ChatError::UnknownCommand {
                line: 4,
                command: "shout".into()
            })
        );
        assert!(matches!(
            ChatEvent::parse_line("reply", 2),
            Err(ChatError::MissingArgument { line: 2, .. })
        ));
        assert!(matches!(
            ChatEvent::parse_line("edit 0", 1),
            Err(ChatError::InvalidPosition { .. })
        ));
        assert!(matches!(
            ChatEvent::parse_line("delete x", 1),
            Err(ChatError::InvalidPosition { .. })
        ));
        assert!(matches!(
            ChatEvent::parse_line("confirm maybe", 9),
            Err(ChatError::InvalidAnswer { line: 9, .. })
        ));
    }

    #[test]
    fn test_parse_script_skips_comments() {
        let script = "# greet\nsend hi\n\n   \nreply 1\n  # indented comment\nsend re\n";
        let events = parse_script(script).unwrap();
        assert_eq!(
            events,
            vec![
                ChatEvent::Send("hi".into()),
                ChatEvent::Reply(1),
                ChatEvent::Send("re".into()),
            ]
        );
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("send a\n\nwave\n").unwrap_err();
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_apply_reply_flow() {
        let mut chat = ChatState::new();
        let events = parse_script("send hi\nreply 1\nsend re: hi\n").unwrap();
        chat.apply_all(&events);

        assert_eq!(chat.len(), 2);
        assert_eq!(chat.messages()[1].reply_to.as_ref().unwrap().text, "hi");
    }

    #[test]
    fn test_apply_out_of_range_ignored() {
        let mut chat = ChatState::new();
        assert_eq!(chat.apply(&ChatEvent::Reply(1)), EventOutcome::Ignored);
        assert_eq!(chat.apply(&ChatEvent::Edit(4)), EventOutcome::Ignored);
        assert_eq!(chat.apply(&ChatEvent::RequestDelete(1)), EventOutcome::Ignored);
        assert_eq!(chat.apply(&ChatEvent::ConfirmDelete(true)), EventOutcome::Ignored);
        assert_eq!(chat, ChatState::new());
    }

    #[test]
    fn test_apply_delete_confirmation() {
        let mut chat = ChatState::new();
        chat.apply(&ChatEvent::Send("a".into()));
        let id = chat.messages()[0].id;

        assert_eq!(chat.apply(&ChatEvent::RequestDelete(1)), EventOutcome::DeleteRequested(id));
        assert_eq!(chat.apply(&ChatEvent::ConfirmDelete(false)), EventOutcome::DeleteDeclined);
        assert_eq!(chat.len(), 1);

        chat.apply(&ChatEvent::RequestDelete(1));
        assert_eq!(chat.apply(&ChatEvent::ConfirmDelete(true)), EventOutcome::Deleted(id));
        assert!(chat.is_empty());
    }

    #[test]
    fn test_apply_draft_and_submit() {
        let mut chat = ChatState::new();
        assert_eq!(chat.apply(&ChatEvent::Draft("typed".into())), EventOutcome::DraftUpdated);
        assert_eq!(chat.draft(), "typed");

        let outcome = chat.apply(&ChatEvent::Submit);
        assert!(matches!(outcome, EventOutcome::Sent(SendOutcome::Appended(_))));
        assert_eq!(chat.draft(), "");
    }
}
