//! Inline Delete Confirmation
//!
//! Prompt drawn over the chat screen while the chat state's delete gate is
//! open. Clicking outside or pressing Escape answers no.

use dioxus::prelude::*;
use swipechat_core::confirm::{DELETE_PROMPT, DELETE_TITLE};

#[component]
pub fn ConfirmDialog(
    /// Called once with the user's answer
    on_answer: EventHandler<bool>,
) -> Element {
    let handle_keydown = move |e: KeyboardEvent| match e.key() {
        Key::Escape => on_answer.call(false),
        Key::Enter => on_answer.call(true),
        _ => {}
    };

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            onclick: move |_| on_answer.call(false),
            onkeydown: handle_keydown,
            // Take focus so Escape/Enter reach the prompt
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },

            div {
                class: "modal confirm-modal",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "modal-title", "{DELETE_TITLE}" }
                p { class: "modal-text", "{DELETE_PROMPT}" }

                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_answer.call(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_answer.call(true),
                        "Delete"
                    }
                }
            }
        }
    }
}
