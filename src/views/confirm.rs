// ============================================================================
// CONFIRM MODAL - Async yes/no prompt backed by #confirmModal
// ============================================================================

use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use crate::dom::{get_element_by_id, get_html_element, set_display, set_text_content, window};
use crate::viewmodels::Confirmer;

/// Shows the page's confirmation modal and resolves with the user's answer.
/// Pages without the modal get the browser's native `confirm()`. Only one
/// prompt is open at a time; a second request while one is showing is declined.
#[derive(Default)]
pub struct ModalConfirmer {
    open: Rc<Cell<bool>>,
}

/// Held while a prompt is showing; dropping it frees the modal
struct OpenPrompt {
    flag: Rc<Cell<bool>>,
}

impl Drop for OpenPrompt {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl ModalConfirmer {
    pub fn new() -> Self {
        Self::default()
    }

    fn try_open(&self) -> Option<OpenPrompt> {
        if self.open.replace(true) {
            return None;
        }
        Some(OpenPrompt {
            flag: self.open.clone(),
        })
    }
}

fn native_confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[async_trait(?Send)]
impl Confirmer for ModalConfirmer {
    async fn confirm(&self, message: &str) -> bool {
        let Some(_prompt) = self.try_open() else {
            log::warn!("⚠️ [CONFIRM] A prompt is already open, declining");
            return false;
        };

        let (Some(text), Some(cancel_btn), Some(confirm_btn)) = (
            get_element_by_id("confirmMessage"),
            get_html_element("confirmCancel"),
            get_html_element("confirmBtn"),
        ) else {
            return native_confirm(message);
        };
        if get_element_by_id("confirmModal").is_none() {
            return native_confirm(message);
        }

        set_text_content(&text, message);
        set_display("confirmModal", "block");

        let (tx, rx) = oneshot::channel::<bool>();
        let tx = Rc::new(RefCell::new(Some(tx)));
        let answer_with = |answer: bool| {
            let tx = tx.clone();
            Closure::wrap(Box::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(answer);
                }
            }) as Box<dyn FnMut()>)
        };
        let on_cancel = answer_with(false);
        let on_confirm = answer_with(true);

        cancel_btn.set_onclick(Some(on_cancel.as_ref().unchecked_ref()));
        confirm_btn.set_onclick(Some(on_confirm.as_ref().unchecked_ref()));

        let answer = rx.await.unwrap_or(false);

        // Handlers are detached before the closures drop
        cancel_btn.set_onclick(None);
        confirm_btn.set_onclick(None);
        set_display("confirmModal", "none");
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn second_prompt_while_one_is_open_is_declined() {
        let confirmer = ModalConfirmer::new();
        let held = confirmer.try_open().unwrap();

        assert!(!block_on(confirmer.confirm("Are you sure?")));
        assert!(confirmer.try_open().is_none());

        drop(held);
        assert!(confirmer.try_open().is_some());
    }

    #[test]
    fn declined_overlap_leaves_the_open_prompt_in_place() {
        let confirmer = ModalConfirmer::new();
        let _held = confirmer.try_open().unwrap();
        block_on(confirmer.confirm("again"));
        assert!(confirmer.open.get());
    }
}
