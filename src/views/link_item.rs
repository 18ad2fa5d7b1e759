// ============================================================================
// LINK ITEM VIEW - One resource row: open, copy, delete
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Element;
use crate::dom::{add_class, is_activation_key, on_click, on_keydown, target_within, window, ElementBuilder};
use crate::models::BucketKey;
use crate::viewmodels::{BoardViewModel, ToastKind};
use crate::views::board::LinkItemView;

/// Opens the link in a new browsing context
fn open_link(item: &LinkItemView) {
    let Some(win) = window() else { return };
    let result = if item.external {
        win.open_with_url_and_target_and_features(&item.href, "_blank", "noopener,noreferrer")
    } else {
        win.open_with_url_and_target(&item.href, "_blank")
    };
    if let Err(e) = result {
        log::warn!("⚠️ [LINK] Could not open {}: {:?}", item.href, e);
    }
}

/// `navigator.clipboard.writeText(text)`
async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let promise = win.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}

fn copy_button(item: &LinkItemView, vm: &BoardViewModel) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("btn-copy")
        .attr("title", "Copy Link")?
        .icon("fa-copy")?
        .build();
    button.append_with_str_1(" Copy")?;

    let href = item.href.clone();
    let name = item.name.clone();
    let notifier = vm.notifier().clone();
    on_click(&button, move |event| {
        event.stop_propagation();
        let (href, name, notifier) = (href.clone(), name.clone(), notifier.clone());
        spawn_local(async move {
            match write_clipboard(&href).await {
                Ok(()) => notifier.notify(
                    ToastKind::Success,
                    &format!("Link for \"{}\" copied to clipboard!", name),
                ),
                Err(e) => {
                    log::error!("❌ [LINK] Copy failed: {:?}", e);
                    notifier.notify(ToastKind::Error, "Could not copy link.");
                }
            }
        });
    })?;
    Ok(button)
}

fn delete_button(name: &str, key: BucketKey, index: usize, vm: &BoardViewModel) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("btn-delete")
        .attr("title", &format!("Delete {}", name))?
        .icon("fa-trash")?
        .build();
    button.append_with_str_1(" Delete")?;

    let vm = vm.clone();
    on_click(&button, move |event| {
        event.stop_propagation();
        let vm = vm.clone();
        spawn_local(async move {
            // Errors are already surfaced as toasts
            let _ = vm.delete_link(key, index).await;
        });
    })?;
    Ok(button)
}

/// Renders one link node. The delete button is bound to the item's index in
/// the unfiltered bucket.
pub fn render_link_item(item: &LinkItemView, key: BucketKey, vm: &BoardViewModel) -> Result<Element, JsValue> {
    let node = ElementBuilder::new("div")?
        .class("file-item")
        .attr("role", "button")?
        .attr("tabindex", "0")?
        .attr("aria-label", &format!("Open {}", item.name))?
        .build();
    if item.optimistic {
        add_class(&node, "optimistic")?;
    }

    let icon = ElementBuilder::new("div")?.class("file-icon").icon(item.icon)?.build();
    node.append_child(&icon)?;
    let name = ElementBuilder::new("div")?
        .class("file-name")
        .attr("title", &item.name)?
        .text(&item.name)
        .build();
    node.append_child(&name)?;
    if item.optimistic {
        let spinner = ElementBuilder::new("div")?
            .class("optimistic-spinner")
            .child(ElementBuilder::new("i")?.class("fas fa-spinner fa-spin").build())?
            .build();
        node.append_child(&spinner)?;
    }

    let actions = ElementBuilder::new("div")?
        .class("file-actions")
        .child(copy_button(item, vm)?)?
        .build();
    if let Some(index) = item.delete_index {
        let delete = delete_button(&item.name, key, index, vm)?;
        actions.append_child(&delete)?;
    }
    node.append_child(&actions)?;

    let open_item = item.clone();
    on_click(&node, move |event| {
        if target_within(&event, ".btn-delete, .btn-copy") {
            return;
        }
        open_link(&open_item);
    })?;

    let key_item = item.clone();
    on_keydown(&node, move |event| {
        if target_within(&event, ".btn-delete, .btn-copy") || !is_activation_key(&event) {
            return;
        }
        event.prevent_default();
        open_link(&key_item);
    })?;

    Ok(node)
}
