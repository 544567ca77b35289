//! Swipeable Message Row
//!
//! A message bubble that slides sideways: dragged left it uncovers the reply
//! and edit tiles, dragged right the delete tile. Taking an action slides it
//! back.

use dioxus::prelude::*;
use swipechat_core::{ChatState, Message, MessageId, MessageRow, SwipeSide, DELETE_PROMPT};
use swipechat_ui::{ActionVariant, SwipeActionButton};

use crate::confirm::{apply_answer, ask_off_thread, NativeDialog};
use crate::context::{use_chat, use_config, use_swipe, ConfirmMode};

const FOCUS_COMPOSER: &str = r#"
    const input = document.getElementById('composer-input');
    if (input) { input.focus(); }
"#;

/// CSS class for a row with the given side revealed
fn row_class(side: Option<SwipeSide>) -> &'static str {
    match side {
        Some(SwipeSide::Actions) => "swipe-row swipe-open-actions",
        Some(SwipeSide::Delete) => "swipe-row swipe-open-delete",
        None => "swipe-row",
    }
}

/// Current copy of message `id`, if it still exists
fn lookup(chat: &Signal<ChatState>, id: MessageId) -> Option<Message> {
    chat.peek().message(id).cloned()
}

fn focus_composer() {
    let _ = document::eval(FOCUS_COMPOSER);
}

/// One message with its swipe affordances
#[component]
pub fn SwipeableMessage(row: MessageRow) -> Element {
    let mut chat = use_chat();
    let mut swipe = use_swipe();
    let confirm_mode = use_config().confirm_mode;
    let id = row.id;

    let side = swipe.read().side_for(id);

    let handle_reply = move |_: ()| {
        swipe.write().close(id);
        if let Some(message) = lookup(&chat, id) {
            chat.write().begin_reply(&message);
            focus_composer();
        }
    };

    let handle_edit = move |_: ()| {
        swipe.write().close(id);
        if let Some(message) = lookup(&chat, id) {
            chat.write().begin_edit(&message);
            focus_composer();
        }
    };

    let handle_delete = move |_: ()| {
        swipe.write().close(id);
        match confirm_mode {
            ConfirmMode::Inline => {
                chat.write().request_delete(id);
            }
            ConfirmMode::Dialog => {
                if lookup(&chat, id).is_none() {
                    return;
                }
                spawn(async move {
                    let confirmed = ask_off_thread(NativeDialog, DELETE_PROMPT).await;
                    let deleted = apply_answer(&mut chat.write(), id, confirmed);
                    tracing::debug!(%id, confirmed, deleted, "Native delete dialog closed");
                });
            }
        }
    };

    rsx! {
        div {
            class: "{row_class(side)}",
            onpointerdown: move |e: PointerEvent| swipe.write().begin(id, e.client_coordinates().x),
            onpointerup: move |e: PointerEvent| {
                let opened = swipe.write().release(e.client_coordinates().x);
                tracing::trace!(%id, ?opened, "Swipe released");
            },
            onpointerleave: move |_| swipe.write().cancel_drag(),

            // Revealed by dragging right
            div { class: "swipe-leading",
                SwipeActionButton { variant: ActionVariant::Delete, onclick: handle_delete }
            }

            // Revealed by dragging left
            div { class: "swipe-trailing",
                SwipeActionButton { variant: ActionVariant::Reply, onclick: handle_reply }
                SwipeActionButton { variant: ActionVariant::Edit, onclick: handle_edit }
            }

            div { class: if row.targeted { "swipe-content message-targeted" } else { "swipe-content" },
                div { class: "message-container",
                    if let Some(quoted) = &row.quoted {
                        div { class: "reply-bubble",
                            div { class: "reply-line" }
                            p { class: "reply-text", "{quoted}" }
                        }
                    }
                    div { class: "message-bubble",
                        p { class: "message-text", "{row.text}" }
                        if row.edited {
                            span { class: "edited-text", "edited" }
                        }
                    }
                    span { class: "timestamp", "{row.timestamp}" }
                }
            }
        }
    }
}
