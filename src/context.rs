//! Chat context provider for SwipeChat.
//!
//! Provides the chat state, the swipe tracker and the launch configuration
//! to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(ChatState::new()));
//!
//! // In child components
//! let mut chat = use_chat();
//! chat.write().cancel_pending();
//! ```

use clap::ValueEnum;
use dioxus::prelude::*;
use swipechat_core::{ChatState, SwipeTracker};

/// How the user is asked before a message is deleted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfirmMode {
    /// A prompt drawn over the chat screen
    #[default]
    Inline,
    /// The operating system's modal message box
    Dialog,
}

/// Launch-time configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
    /// Window title
    pub title: String,
    /// Delete confirmation modality
    pub confirm_mode: ConfirmMode,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: "SwipeChat".to_string(),
            confirm_mode: ConfirmMode::default(),
        }
    }
}

/// Get the configuration the app was launched with.
pub fn get_config() -> ChatConfig {
    crate::get_config()
}

/// Hook to access the chat state from context.
///
/// Writing through the signal re-renders every component that read it.
pub fn use_chat() -> Signal<ChatState> {
    use_context::<Signal<ChatState>>()
}

/// Hook to access the swipe tracker from context.
pub fn use_swipe() -> Signal<SwipeTracker> {
    use_context::<Signal<SwipeTracker>>()
}

/// Hook to access the launch configuration.
pub fn use_config() -> ChatConfig {
    use_context::<ChatConfig>()
}
