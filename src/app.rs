// ============================================================================
// APP - Wires state, view model and page; drives the startup flow
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use crate::dom::window;
use crate::services::{ApiClient, CredentialGate, LinkCache};
use crate::state::AppState;
use crate::viewmodels::BoardViewModel;
use crate::views::{bind_page, render_auth_chrome, render_board, render_skeletons, ModalConfirmer, ToastNotifier};

/// A deferred render, handed to whatever schedules the next frame
pub type Frame = Box<dyn FnOnce()>;

/// Coalesces render requests: at most one frame is outstanding, and requests
/// made before it runs are absorbed by it.
#[derive(Clone, Default)]
pub struct RenderBatcher {
    scheduled: Rc<Cell<bool>>,
}

impl RenderBatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled.get()
    }

    /// `schedule` returns false when the frame could not be queued; the next
    /// request then tries again.
    pub fn request<S, R>(&self, schedule: S, render: R)
    where
        S: FnOnce(Frame) -> bool,
        R: FnOnce() + 'static,
    {
        if self.scheduled.replace(true) {
            return;
        }
        let reset = self.scheduled.clone();
        let frame: Frame = Box::new(move || {
            reset.set(false);
            render();
        });
        if !schedule(frame) {
            self.scheduled.set(false);
        }
    }
}

/// Queues `frame` on `requestAnimationFrame`
fn request_animation_frame(frame: Frame) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let callback = Closure::once_into_js(move || frame());
    match win.request_animation_frame(callback.unchecked_ref()) {
        Ok(_) => true,
        Err(e) => {
            log::error!("❌ [APP] requestAnimationFrame failed: {:?}", e);
            false
        }
    }
}

/// Main application
pub struct App {
    state: AppState,
    vm: BoardViewModel,
    batcher: RenderBatcher,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let state = AppState::new();
        let vm = BoardViewModel::new(
            state.clone(),
            Rc::new(ApiClient::new()),
            LinkCache::new(),
            CredentialGate::from_config(),
            Rc::new(ToastNotifier::new()),
            Rc::new(ModalConfirmer::new()),
        );

        Ok(Self {
            state,
            vm,
            batcher: RenderBatcher::new(),
        })
    }

    /// Placeholders, page bindings, cache seed, then the canonical fetch
    pub fn start(&self) -> Result<(), JsValue> {
        render_skeletons()?;
        render_auth_chrome(&self.state);
        bind_page(&self.vm)?;

        let batcher = self.batcher.clone();
        self.state.subscribe_to_changes(move || {
            batcher.request(request_animation_frame, crate::rerender_app);
        });

        self.vm.seed_from_cache();

        let vm = self.vm.clone();
        spawn_local(async move {
            vm.refresh().await;
        });

        log::info!("✅ [APP] Started");
        Ok(())
    }

    /// Full repaint of the auth chrome and every bucket
    pub fn render(&self) -> Result<(), JsValue> {
        render_auth_chrome(&self.state);
        render_board(&self.vm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeFrames {
        queued: RefCell<Vec<Frame>>,
    }

    impl FakeFrames {
        fn schedule(&self) -> impl FnOnce(Frame) -> bool + '_ {
            move |frame| {
                self.queued.borrow_mut().push(frame);
                true
            }
        }

        fn run_all(&self) {
            let frames: Vec<Frame> = self.queued.borrow_mut().drain(..).collect();
            for frame in frames {
                frame();
            }
        }
    }

    fn counter() -> (Rc<Cell<usize>>, impl Fn() -> Box<dyn FnOnce()>) {
        let renders = Rc::new(Cell::new(0));
        let r = renders.clone();
        (renders, move || {
            let r = r.clone();
            Box::new(move || r.set(r.get() + 1)) as Box<dyn FnOnce()>
        })
    }

    #[test]
    fn repeated_requests_schedule_one_frame() {
        let batcher = RenderBatcher::new();
        let frames = FakeFrames::default();
        let (renders, render) = counter();

        for _ in 0..3 {
            batcher.request(frames.schedule(), render());
        }
        assert_eq!(frames.queued.borrow().len(), 1);
        assert!(batcher.is_scheduled());

        frames.run_all();
        assert_eq!(renders.get(), 1);
        assert!(!batcher.is_scheduled());
    }

    #[test]
    fn request_after_paint_schedules_again() {
        let batcher = RenderBatcher::new();
        let frames = FakeFrames::default();
        let (renders, render) = counter();

        batcher.request(frames.schedule(), render());
        frames.run_all();
        batcher.request(frames.schedule(), render());
        frames.run_all();

        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn failed_scheduling_does_not_block_later_requests() {
        let batcher = RenderBatcher::new();
        let (renders, render) = counter();

        batcher.request(|_| false, render());
        assert!(!batcher.is_scheduled());

        let frames = FakeFrames::default();
        batcher.request(frames.schedule(), render());
        frames.run_all();
        assert_eq!(renders.get(), 1);
    }
}
