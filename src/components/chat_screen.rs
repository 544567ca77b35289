//! Chat Screen Component
//!
//! The whole screen: message list, reply/edit preview, composer, and the
//! inline delete prompt when that modality is configured.

use std::time::Duration;

use dioxus::prelude::*;
use swipechat_core::render;

use super::{Composer, ConfirmDialog, PreviewBanner, SwipeableMessage};
use crate::context::{use_chat, use_config, ConfirmMode};

const SCROLL_TO_END: &str = r#"
    const el = document.getElementById('message-list');
    if (el) { el.scrollTop = el.scrollHeight; }
"#;

/// Single chat screen
#[component]
pub fn ChatScreen() -> Element {
    let mut chat = use_chat();
    let config = use_config();
    let view = use_memo(move || render(&chat.read()));

    // Keep the newest message in sight whenever the list grows
    let row_count = use_memo(move || view.read().rows.len());
    use_effect(move || {
        let count = row_count();
        spawn(async move {
            // Let the DOM lay out the new row before measuring.
            tokio::time::sleep(Duration::from_millis(20)).await;
            tracing::trace!(count, "Scrolling message list to end");
            let _ = document::eval(SCROLL_TO_END).await;
        });
    });

    let current = view();
    let inline_confirm = config.confirm_mode == ConfirmMode::Inline && current.confirming_delete.is_some();

    rsx! {
        div { class: "chat-screen",
            div { id: "message-list", class: "message-list",
                if current.is_empty() {
                    div { class: "message-list-empty",
                        p { class: "empty-text", "No messages yet" }
                        p { class: "empty-hint", "Type below to start the conversation." }
                    }
                } else {
                    for row in current.rows.iter().cloned() {
                        SwipeableMessage { key: "{row.id}", row: row }
                    }
                }
            }

            if let Some(banner) = current.banner.clone() {
                PreviewBanner {
                    banner: banner,
                    on_dismiss: move |_| chat.write().cancel_pending(),
                }
            }

            Composer {
                draft: current.draft.clone(),
                placeholder: current.placeholder.to_string(),
                can_send: current.can_send,
            }

            if inline_confirm {
                ConfirmDialog {
                    on_answer: move |confirmed: bool| {
                        let deleted = chat.write().resolve_delete(confirmed);
                        tracing::debug!(?deleted, confirmed, "Inline delete prompt answered");
                    },
                }
            }
        }
    }
}
