// ============================================================================
// HEADER VIEW - Auth chrome: login/logout buttons, user name, add forms
// ============================================================================

use crate::dom::{get_element_by_id, set_display, set_text_content};
use crate::models::BucketKey;
use crate::state::AppState;

/// Syncs the static page chrome with the session
pub fn render_auth_chrome(state: &AppState) {
    let authorized = state.auth.is_authorized();

    set_display("loginBtn", if authorized { "none" } else { "flex" });
    set_display("logoutBtn", if authorized { "flex" } else { "none" });

    if let Some(display) = get_element_by_id("userDisplay") {
        set_text_content(&display, &state.auth.display_name());
    }

    let area_display = if authorized { "block" } else { "none" };
    for key in BucketKey::ALL {
        set_display(&format!("{}UploadArea", key.id()), area_display);
    }
}
