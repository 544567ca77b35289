//! Reply/Edit Preview Banner
//!
//! Strip above the composer saying what the next send will do, with a cross
//! that drops the pending reply or edit.

use dioxus::prelude::*;
use swipechat_core::{Banner, BannerKind};
use swipechat_ui::CloseButton;

#[component]
pub fn PreviewBanner(
    /// What is pending
    banner: Banner,
    /// Handler for the dismiss cross
    on_dismiss: EventHandler<()>,
) -> Element {
    let kind_class = match banner.kind {
        BannerKind::Reply => "preview-container preview-reply",
        BannerKind::Edit => "preview-container preview-edit",
    };

    rsx! {
        div { class: "{kind_class}",
            div { class: "preview-content",
                p { class: "preview-text", "{banner.text}" }
            }
            CloseButton { onclick: on_dismiss }
        }
    }
}
