//! Delete confirmation
//!
//! Deleting a message always needs the user's go-ahead. How the question is
//! asked (an inline prompt on the screen, a native modal, a terminal line)
//! belongs to the front-end, so the state manager only sees one of:
//!
//! - a [`Confirm`] capability it can call synchronously, via
//!   [`ChatState::delete_with`](crate::ChatState::delete_with), or
//! - a [`DeleteGate`] holding the single outstanding request while an
//!   event-driven front-end waits for the answer, via
//!   [`ChatState::request_delete`](crate::ChatState::request_delete) and
//!   [`ChatState::resolve_delete`](crate::ChatState::resolve_delete).

use serde::Serialize;

use crate::types::MessageId;

/// Prompt shown before a message is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this message?";

/// Title used by modal confirmation dialogs.
pub const DELETE_TITLE: &str = "Delete Message";

/// A yes/no question asked of the user.
///
/// Returning `false` (declined or dismissed) must leave state untouched.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answers every question the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Always(pub bool);

impl Confirm for Always {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// The single outstanding delete confirmation.
///
/// A new request replaces an unanswered one; there is never more than one
/// question on screen. There is no timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeleteGate {
    pending: Option<MessageId>,
}

impl DeleteGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask about deleting `id`, replacing any unanswered request.
    ///
    /// Returns the request that was replaced, if any.
    pub fn request(&mut self, id: MessageId) -> Option<MessageId> {
        self.pending.replace(id)
    }

    /// Take the outstanding request, leaving the gate empty.
    pub fn take(&mut self) -> Option<MessageId> {
        self.pending.take()
    }

    /// Drop the outstanding request if it is for `id`.
    pub fn forget(&mut self, id: MessageId) {
        if self.pending == Some(id) {
            self.pending = None;
        }
    }

    pub fn pending(&self) -> Option<MessageId> {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}
