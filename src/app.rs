use dioxus::prelude::*;
use swipechat_core::{ChatState, SwipeTracker};

use crate::components::ChatScreen;
use crate::context::get_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the chat state and configuration contexts, and
/// mounts the chat screen.
#[component]
pub fn App() -> Element {
    // All screen state lives here for the lifetime of the window
    let chat: Signal<ChatState> = use_signal(ChatState::new);
    let swipe: Signal<SwipeTracker> = use_signal(SwipeTracker::new);

    use_context_provider(|| chat);
    use_context_provider(|| swipe);
    use_context_provider(get_config);

    use_hook(|| tracing::info!("Chat screen mounted"));

    rsx! {
        style { {GLOBAL_STYLES} }
        ChatScreen {}
    }
}
