// ============================================================================
// TOAST VIEW - Transient notifications in #notificationContainer
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{add_class, append_child, get_element_by_id, on_click, ElementBuilder};
use crate::viewmodels::{Notifier, ToastKind};

const CONTAINER_ID: &str = "notificationContainer";
const MESSAGE_CLASS: &str = "toast-message";
const CLOSE_CLASS: &str = "toast-close";
const HIDING_CLASS: &str = "hiding";

/// `toast {kind}`, the classes the page stylesheet targets
fn toast_class(kind: ToastKind) -> String {
    format!("toast {}", kind.class())
}

fn icon_for(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "fa-info-circle",
        ToastKind::Success => "fa-check-circle",
        ToastKind::Error => "fa-exclamation-circle",
    }
}

/// Adds the `hiding` class, then removes the node once the fade is over
fn dismiss(toast: &Element) {
    if toast.parent_node().is_none() {
        return;
    }
    let _ = add_class(toast, HIDING_CLASS);
    let toast = toast.clone();
    Timeout::new(CONFIG.ui_config.toast_fade_ms, move || toast.remove()).forget();
}

fn build_toast(kind: ToastKind, message: &str) -> Result<Element, JsValue> {
    let close = ElementBuilder::new("div")?
        .class(CLOSE_CLASS)
        .attr("aria-label", "Close notification")?
        .icon("fa-times")?
        .build();

    // Message goes in as text; server messages are never parsed as markup
    let toast = ElementBuilder::new("div")?
        .class(&toast_class(kind))
        .attr("role", "status")?
        .icon(icon_for(kind))?
        .child(ElementBuilder::new("div")?.class(MESSAGE_CLASS).text(message).build())?
        .child(close.clone())?
        .build();

    let target = toast.clone();
    on_click(&close, move |_| dismiss(&target))?;
    Ok(toast)
}

/// DOM-backed `Notifier`. Falls back to the console when the page has no
/// notification container.
#[derive(Default)]
pub struct ToastNotifier;

impl ToastNotifier {
    pub fn new() -> Self {
        Self
    }

    fn show(&self, kind: ToastKind, message: &str) -> Result<(), JsValue> {
        let Some(container) = get_element_by_id(CONTAINER_ID) else {
            log::info!("🔔 [TOAST] {}: {}", kind.class(), message);
            return Ok(());
        };
        let toast = build_toast(kind, message)?;
        append_child(&container, &toast)?;

        Timeout::new(CONFIG.ui_config.toast_duration_ms, move || dismiss(&toast)).forget();
        Ok(())
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        if let Err(e) = self.show(kind, message) {
            log::error!("❌ [TOAST] Could not show notification: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_classes_match_page_stylesheet() {
        assert_eq!(toast_class(ToastKind::Info), "toast info");
        assert_eq!(toast_class(ToastKind::Success), "toast success");
        assert_eq!(toast_class(ToastKind::Error), "toast error");
        assert_eq!(MESSAGE_CLASS, "toast-message");
        assert_eq!(CLOSE_CLASS, "toast-close");
        assert_eq!(HIDING_CLASS, "hiding");
    }

    #[test]
    fn icons_follow_kind() {
        assert_eq!(icon_for(ToastKind::Success), "fa-check-circle");
        assert_eq!(icon_for(ToastKind::Error), "fa-exclamation-circle");
        assert_eq!(icon_for(ToastKind::Info), "fa-info-circle");
    }
}
