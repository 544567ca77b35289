//! SwipeChat Core Library
//!
//! In-memory conversation and composer state for a single chat screen.
//!
//! ## Overview
//!
//! A [`ChatState`] owns three things:
//!
//! - the conversation: an insertion-ordered list of [`Message`]s,
//! - the pending intent: nothing, replying to a message, or editing one,
//! - the draft: the raw text currently in the composer.
//!
//! Front-ends (the Dioxus desktop screen, the terminal CLI) translate user
//! gestures into calls on [`ChatState`] and re-render from
//! [`view::render`]. Nothing is persisted and nothing goes over the network.
//!
//! ## Quick Start
//!
//! ```
//! use swipechat_core::{ChatState, PendingIntent};
//!
//! let mut chat = ChatState::new();
//! chat.send("hello");
//!
//! let first = chat.messages()[0].clone();
//! chat.begin_reply(&first);
//! chat.send("hi back");
//!
//! assert_eq!(chat.len(), 2);
//! assert_eq!(chat.messages()[1].reply_to.as_ref().unwrap().text, "hello");
//! assert_eq!(*chat.pending(), PendingIntent::Idle);
//! ```
//!
//! ## Lenient transitions
//!
//! Every transition is total. Blank drafts, stale ids and double submissions
//! are absorbed as no-ops so that no gesture can put the screen into an
//! invalid state. The only fallible API is the event script parser in
//! [`event`].

pub mod chat;
pub mod confirm;
pub mod error;
pub mod event;
pub mod swipe;
pub mod types;
pub mod view;

// Re-exports
pub use chat::{ChatState, Conversation, Message, PendingIntent, ReplySnapshot, SendOutcome};
pub use confirm::{Always, Confirm, DeleteGate, DELETE_PROMPT};
pub use error::{ChatError, ChatResult};
pub use event::{parse_script, ChatEvent, EventOutcome};
pub use swipe::{SwipeSide, SwipeTracker};
pub use types::MessageId;
pub use view::{render, Banner, BannerKind, ChatView, MessageRow};
