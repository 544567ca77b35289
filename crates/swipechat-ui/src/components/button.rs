//! Button Components
//!
//! - Icon: round, borderless composer buttons (attach, camera, mic, send)
//! - Swipe action: the coloured tiles revealed behind a swiped message
//! - Close: the cross that dismisses the reply/edit preview

use dioxus::prelude::*;

use super::icon::{Icon, IconKind};

/// Swipe action tile variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ActionVariant {
    /// Blue tile
    #[default]
    Reply,
    /// Green tile
    Edit,
    /// Red tile
    Delete,
}

impl ActionVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ActionVariant::Reply => "swipe-action swipe-action-reply",
            ActionVariant::Edit => "swipe-action swipe-action-edit",
            ActionVariant::Delete => "swipe-action swipe-action-delete",
        }
    }

    /// Icon drawn on the tile
    pub fn icon(&self) -> IconKind {
        match self {
            ActionVariant::Reply => IconKind::Reply,
            ActionVariant::Edit => IconKind::Edit,
            ActionVariant::Delete => IconKind::Trash,
        }
    }

    /// Caption under the icon
    pub fn caption(&self) -> &'static str {
        match self {
            ActionVariant::Reply => "Reply",
            ActionVariant::Edit => "Edit",
            ActionVariant::Delete => "Delete",
        }
    }

    fn icon_size(&self) -> u32 {
        match self {
            ActionVariant::Delete => 32,
            _ => 24,
        }
    }
}

/// Tile revealed behind a swiped message row
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SwipeActionButton {
///         variant: ActionVariant::Reply,
///         onclick: move |_| chat.write().begin_reply(&message),
///     }
/// }
/// ```
#[component]
pub fn SwipeActionButton(variant: ActionVariant, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "{variant.class()}",
            r#type: "button",
            onclick: move |e| {
                e.stop_propagation();
                onclick.call(());
            },
            Icon { kind: variant.icon(), size: variant.icon_size(), color: "#FFFFFF".to_string() }
            span { class: "swipe-action-text", "{variant.caption()}" }
        }
    }
}

/// Icon button for compact actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// Which icon to draw
    pub icon: IconKind,
    /// Click handler; composer buttons without one are inert
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Icon stroke colour
    #[props(default = "#7C7C7C".to_string())]
    pub color: String,
    /// Icon size in px
    #[props(default = 24)]
    pub size: u32,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.icon.label()}",
            title: "{props.icon.label()}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            Icon { kind: props.icon, size: props.size, color: props.color.clone() }
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            icon: IconKind::Close,
            onclick: onclick,
            color: "#999".to_string(),
            size: 20,
            class: "close-btn".to_string(),
        }
    }
}
