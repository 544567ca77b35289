//! Composer Bar
//!
//! Input row at the bottom of the chat screen. Attach, camera and microphone
//! are drawn but do nothing; the send button only appears once there is
//! something to send.

use dioxus::prelude::*;
use swipechat_ui::{ComposerInput, IconButton, IconKind};

use crate::context::use_chat;
use crate::theme::colors::BLUE;

#[component]
pub fn Composer(
    /// Current draft
    draft: String,
    /// Placeholder for the current mode
    placeholder: String,
    /// Whether the draft is worth sending
    can_send: bool,
) -> Element {
    let mut chat = use_chat();

    let send = move |_: ()| {
        let outcome = chat.write().submit();
        tracing::debug!(?outcome, "Composer submitted");
    };

    rsx! {
        div { class: "composer",
            div { class: "composer-row",
                IconButton { icon: IconKind::Attach }

                ComposerInput {
                    value: draft,
                    placeholder: placeholder,
                    oninput: move |text: String| chat.write().set_draft(text),
                    onsubmit: send,
                }

                IconButton { icon: IconKind::Camera }
                IconButton { icon: IconKind::Mic }

                if can_send {
                    IconButton {
                        icon: IconKind::Send,
                        color: BLUE.to_string(),
                        onclick: send,
                        class: "send-btn".to_string(),
                    }
                }
            }
        }
    }
}
