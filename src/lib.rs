// ============================================================================
// RESOURCE BOARD - Rust + WASM client for the lab/quiz link board
// ============================================================================
// MVVM layout:
// - Views: render DOM from state (no logic)
// - ViewModels: fetch, optimistic add/delete, login
// - Services: HTTP endpoint, local cache, credential gate
// - State: Rc<RefCell> application state
// - Models: board and wire types
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Resource Board - Rust + MVVM");

    let app = App::new()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => app.start(),
        None => Ok(()),
    })
}

/// Full repaint from the current state
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ [RENDER] {:?}", e);
            }
        }
    });
}
