// ============================================================================
// PAGE BINDINGS - Static host-page controls, registered once at startup
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollToOptions};
use crate::config::CONFIG;
use crate::dom::{
    add_class, clear_input, get_element_by_id, get_input, input_value, on_click, on_event,
    remove_class, set_display, window,
};
use crate::models::BucketKey;
use crate::viewmodels::BoardViewModel;

const LOGIN_MODAL: &str = "loginModal";

/// Wires every control the page provides. Missing elements are skipped.
pub fn bind_page(vm: &BoardViewModel) -> Result<(), JsValue> {
    bind_search(vm)?;
    bind_login(vm)?;
    bind_upload_forms(vm)?;
    bind_back_to_top()?;
    Ok(())
}

fn bind_search(vm: &BoardViewModel) -> Result<(), JsValue> {
    let Some(input) = get_input("resourceSearch") else {
        return Ok(());
    };
    let vm = vm.clone();
    let source = input.clone();
    on_event(&input, "input", move |_| vm.set_search_term(&source.value()))
}

fn bind_login(vm: &BoardViewModel) -> Result<(), JsValue> {
    if let Some(login_btn) = get_element_by_id("loginBtn") {
        on_click(&login_btn, |_| set_display(LOGIN_MODAL, "block"))?;
    }

    if let Some(modal) = get_element_by_id(LOGIN_MODAL) {
        if let Ok(Some(close)) = modal.query_selector(".close") {
            on_click(&close, |_| set_display(LOGIN_MODAL, "none"))?;
        }
        // Clicks on the backdrop itself close the modal
        if let Some(win) = window() {
            let backdrop = JsValue::from(modal);
            on_click(&win, move |event| {
                if event.target().map(JsValue::from).as_ref() == Some(&backdrop) {
                    set_display(LOGIN_MODAL, "none");
                }
            })?;
        }
    }

    if let Some(logout_btn) = get_element_by_id("logoutBtn") {
        let vm = vm.clone();
        on_click(&logout_btn, move |_| vm.logout())?;
    }

    if let Some(form) = get_element_by_id("emailLoginForm") {
        let vm = vm.clone();
        on_event(&form, "submit", move |event| {
            event.prevent_default();
            let email = input_value("loginEmail");
            let password = input_value("loginPassword");
            if vm.login(&email, &password).is_ok() {
                set_display(LOGIN_MODAL, "none");
            }
        })?;
    }
    Ok(())
}

fn bind_upload_forms(vm: &BoardViewModel) -> Result<(), JsValue> {
    for key in BucketKey::ALL {
        let Some(button) = get_element_by_id(&format!("{}UploadBtn", key.id())) else {
            continue;
        };
        let name_id = format!("{}NameInput", key.id());
        let link_id = format!("{}LinkInput", key.id());
        let vm = vm.clone();

        on_click(&button, move |event| {
            event.prevent_default();
            let name = input_value(&name_id);
            let url = input_value(&link_id);

            // Inputs are cleared together with the placeholder insertion
            if vm.state().auth.is_authorized() && !name.is_empty() && !url.is_empty() {
                clear_input(&name_id);
                clear_input(&link_id);
            }

            let vm = vm.clone();
            spawn_local(async move {
                let _ = vm.add_link(key, &name, &url).await;
            });
        })?;
    }
    Ok(())
}

fn bind_back_to_top() -> Result<(), JsValue> {
    let (Some(button), Some(win)) = (get_element_by_id("backToTop"), window()) else {
        return Ok(());
    };

    let toggled = button.clone();
    let scrolled = win.clone();
    on_event(&win, "scroll", move |_| {
        let y = scrolled.scroll_y().unwrap_or(0.0);
        let _ = if y > CONFIG.ui_config.back_to_top_threshold_px {
            add_class(&toggled, "visible")
        } else {
            remove_class(&toggled, "visible")
        };
    })?;

    on_click(&button, move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    })
}
