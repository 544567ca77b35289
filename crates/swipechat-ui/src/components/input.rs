//! Composer Input
//!
//! Single-line pill-shaped text field at the bottom of the chat screen.
//! Features:
//! - Two-way bound value (the draft lives in the caller's state)
//! - Enter submits, Shift+Enter is left to the platform
//! - Placeholder switches with the composer mode

use dioxus::prelude::*;

/// Properties for the ComposerInput component
#[derive(Clone, PartialEq, Props)]
pub struct ComposerInputProps {
    /// Current draft
    pub value: String,
    /// Handler called when the text changes
    pub oninput: EventHandler<String>,
    /// Handler called when the user submits (Enter)
    pub onsubmit: EventHandler<()>,
    /// Placeholder text
    #[props(default = "Message".to_string())]
    pub placeholder: String,
    /// Optional ID so the screen can focus the field
    #[props(default)]
    pub id: Option<String>,
}

/// Text field for composing and editing messages
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ComposerInput {
///         value: view.draft.clone(),
///         placeholder: view.placeholder.to_string(),
///         oninput: move |text| chat.write().set_draft(text),
///         onsubmit: move |_| { chat.write().submit(); },
///     }
/// }
/// ```
#[component]
pub fn ComposerInput(props: ComposerInputProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| "composer-input".to_string());

    let handle_keydown = move |e: KeyboardEvent| {
        if is_submit_key(&e.key(), e.modifiers().shift()) {
            e.prevent_default();
            tracing::trace!("Composer submitted via keyboard");
            props.onsubmit.call(());
        }
    };

    rsx! {
        input {
            id: "{id}",
            class: "composer-input",
            r#type: "text",
            autocomplete: "off",
            placeholder: "{props.placeholder}",
            value: "{props.value}",
            oninput: move |e| props.oninput.call(e.value()),
            onkeydown: handle_keydown,
        }
    }
}

/// Whether a key press submits the composer
fn is_submit_key(key: &Key, shift: bool) -> bool {
    *key == Key::Enter && !shift
}
