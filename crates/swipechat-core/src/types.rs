//! Core types for SwipeChat

use serde::Serialize;

/// Unique identifier for a message
///
/// Ids are creation times in Unix milliseconds, bumped past the previously
/// issued id when two messages are created within the same millisecond.
/// They are therefore unique and strictly increasing in creation order,
/// even across deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Issue the id for a message created at `now_millis`.
    ///
    /// `last` is the most recently issued id, if any.
    pub fn issue(last: Option<MessageId>, now_millis: i64) -> Self {
        let now = u64::try_from(now_millis).unwrap_or(0);
        match last {
            Some(MessageId(prev)) if now <= prev => MessageId(prev + 1),
            _ => MessageId(now),
        }
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg_{}", self.0)
    }
}
