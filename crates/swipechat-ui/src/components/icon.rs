//! Line icons
//!
//! 24×24 stroke icons drawn inline as SVG so the app ships no icon font.

use dioxus::prelude::*;

/// The icons the chat screen uses
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Attach,
    Camera,
    Mic,
    Send,
    Reply,
    Edit,
    Trash,
    Close,
}

impl IconKind {
    /// Accessible label for the icon
    pub fn label(&self) -> &'static str {
        match self {
            IconKind::Attach => "Attach",
            IconKind::Camera => "Camera",
            IconKind::Mic => "Voice message",
            IconKind::Send => "Send",
            IconKind::Reply => "Reply",
            IconKind::Edit => "Edit",
            IconKind::Trash => "Delete",
            IconKind::Close => "Close",
        }
    }
}

/// Inline SVG icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { kind: IconKind::Send, color: "#2196F3".to_string() }
///     Icon { kind: IconKind::Trash, size: 32 }
/// }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default = 24)] size: u32,
    #[props(default = "currentColor".to_string())] color: String,
) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{color}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_paths(kind)}
        }
    }
}

fn icon_paths(kind: IconKind) -> Element {
    match kind {
        IconKind::Attach => rsx! {
            path { d: "m21.44 11.05-9.19 9.19a6 6 0 0 1-8.49-8.49l8.57-8.57A4 4 0 1 1 18 8.84l-8.59 8.57a2 2 0 0 1-2.83-2.83l8.49-8.48" }
        },
        IconKind::Camera => rsx! {
            path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
            circle { cx: "12", cy: "13", r: "3" }
        },
        IconKind::Mic => rsx! {
            path { d: "M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z" }
            path { d: "M19 10v2a7 7 0 0 1-14 0v-2" }
            line { x1: "12", y1: "19", x2: "12", y2: "22" }
        },
        IconKind::Send => rsx! {
            line { x1: "22", y1: "2", x2: "11", y2: "13" }
            polygon { points: "22 2 15 22 11 13 2 9 22 2" }
        },
        IconKind::Reply => rsx! {
            polyline { points: "9 17 4 12 9 7" }
            path { d: "M20 18v-2a4 4 0 0 0-4-4H4" }
        },
        IconKind::Edit => rsx! {
            path { d: "M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z" }
        },
        IconKind::Trash => rsx! {
            path { d: "M3 6h18" }
            path { d: "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" }
            path { d: "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" }
        },
        IconKind::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_labels() {
        assert_eq!(IconKind::Trash.label(), "Delete");
        assert_eq!(IconKind::Mic.label(), "Voice message");
        assert_eq!(IconKind::Send.label(), "Send");
    }
}
