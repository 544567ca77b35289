//! Chat screen components

mod chat_screen;
mod composer;
mod confirm_dialog;
mod message_row;
mod preview_banner;

pub use chat_screen::ChatScreen;
pub use composer::Composer;
pub use confirm_dialog::ConfirmDialog;
pub use message_row::SwipeableMessage;
pub use preview_banner::PreviewBanner;
