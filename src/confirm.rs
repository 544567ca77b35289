//! Native delete confirmation.
//!
//! The inline modality needs no code here: the screen opens the chat
//! state's delete gate and draws [`ConfirmDialog`](crate::components::ConfirmDialog)
//! until it is answered.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use swipechat_core::confirm::DELETE_TITLE;
use swipechat_core::{ChatState, Confirm, MessageId};

const DELETE_LABEL: &str = "Delete";
const CANCEL_LABEL: &str = "Cancel";

/// Asks through the operating system's modal message box.
///
/// Blocks until the user answers; closing the box counts as no.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialog;

impl Confirm for NativeDialog {
    fn confirm(&mut self, prompt: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(DELETE_TITLE)
            .set_description(prompt)
            .set_buttons(MessageButtons::OkCancelCustom(
                DELETE_LABEL.to_string(),
                CANCEL_LABEL.to_string(),
            ))
            .show();

        let confirmed = is_confirmation(&result);
        tracing::debug!(?result, confirmed, "Native delete dialog answered");
        confirmed
    }
}

/// Ask `confirm` on a blocking worker thread.
///
/// The modal runs its own event loop; keeping it off the UI thread lets the
/// window keep repainting. A worker that panics counts as no.
pub async fn ask_off_thread<C>(mut confirm: C, prompt: &'static str) -> bool
where
    C: Confirm + Send + 'static,
{
    match tokio::task::spawn_blocking(move || confirm.confirm(prompt)).await {
        Ok(confirmed) => confirmed,
        Err(e) => {
            tracing::warn!("Delete confirmation failed: {}", e);
            false
        }
    }
}

/// Apply an answer that arrived after the prompt closed.
///
/// The message may have gone in the meantime; that is not an error.
pub fn apply_answer(chat: &mut ChatState, id: MessageId, confirmed: bool) -> bool {
    confirmed && chat.delete(id)
}

/// Some platforms report custom buttons by label, others as Ok/Cancel.
fn is_confirmation(result: &MessageDialogResult) -> bool {
    match result {
        MessageDialogResult::Ok | MessageDialogResult::Yes => true,
        MessageDialogResult::Custom(label) => label == DELETE_LABEL,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipechat_core::Always;

    #[test]
    fn test_dialog_answers() {
        assert!(is_confirmation(&MessageDialogResult::Ok));
        assert!(is_confirmation(&MessageDialogResult::Custom("Delete".to_string())));
        assert!(!is_confirmation(&MessageDialogResult::Custom("Cancel".to_string())));
        assert!(!is_confirmation(&MessageDialogResult::Cancel));
        assert!(!is_confirmation(&MessageDialogResult::No));
    }

    #[tokio::test]
    async fn test_ask_off_thread_returns_answer() {
        assert!(ask_off_thread(Always(true), "delete?").await);
        assert!(!ask_off_thread(Always(false), "delete?").await);
    }

    #[tokio::test]
    async fn test_ask_off_thread_passes_prompt() {
        let asked = |prompt: &str| prompt == swipechat_core::DELETE_PROMPT;
        assert!(ask_off_thread(asked, swipechat_core::DELETE_PROMPT).await);
    }

    #[test]
    fn test_apply_answer() {
        let mut chat = ChatState::new();
        chat.send("keep");
        chat.send("drop");
        let keep = chat.messages()[0].id;
        let drop = chat.messages()[1].id;

        assert!(!apply_answer(&mut chat, drop, false));
        assert_eq!(chat.len(), 2);

        assert!(apply_answer(&mut chat, drop, true));
        assert_eq!(chat.len(), 1);
        assert_eq!(chat.messages()[0].id, keep);
    }

    #[test]
    fn test_apply_answer_after_message_vanished() {
        let mut chat = ChatState::new();
        chat.send("gone");
        let id = chat.messages()[0].id;
        chat.send("other");

        // Deleted by another path while the dialog was open
        assert!(chat.delete(id));
        assert!(!apply_answer(&mut chat, id, true));
        assert_eq!(chat.len(), 1);
    }

    #[test]
    fn test_apply_answer_keeps_concurrent_edits() {
        let mut chat = ChatState::new();
        chat.send("target");
        let id = chat.messages()[0].id;

        // Typed while the dialog was open
        chat.set_draft("still typing");
        assert!(apply_answer(&mut chat, id, true));
        assert_eq!(chat.draft(), "still typing");
    }
}
