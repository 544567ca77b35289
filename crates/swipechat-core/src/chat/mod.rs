//! Chat conversation management
//!
//! This module holds the conversation/composer state machine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Presentation (desktop screen, CLI)                             │
//! │  - swipe rows, preview banner, composer input                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ChatState (this module)                                        │
//! │  - PendingIntent: idle / replying to / editing                  │
//! │  - draft: composer text                                         │
//! │  - DeleteGate: single outstanding delete confirmation           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Conversation                                                   │
//! │  - insertion-ordered Vec<Message>, id issuance                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Message Flow
//!
//! **Sending:**
//! 1. The composer writes the draft via `set_draft()`
//! 2. `submit()` / `send()` appends a message, or rewrites the edit target
//! 3. Pending intent and draft are cleared
//!
//! **Deleting:**
//! 1. The swipe row calls `request_delete()` (or `delete_with()` for a
//!    blocking confirmation capability)
//! 2. The user answers; `resolve_delete(true)` removes the message
//! 3. A pending intent that pointed at the removed message is cleared
//!
//! Reply references are value snapshots: editing or deleting the quoted
//! message never changes what an existing reply shows.

mod conversation;
mod intent;
mod message;
mod state;

pub use conversation::Conversation;
pub use intent::PendingIntent;
pub use message::{format_timestamp, Message, ReplySnapshot};
pub use state::{ChatState, SendOutcome};
