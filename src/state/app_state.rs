// ============================================================================
// APP STATE - Everything the board client holds in memory
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::LinkBoard;
use crate::state::AuthState;

/// Shared application state. Cloning is cheap and every clone sees the same
/// cells, so handlers receive it by value or by reference interchangeably.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub links: Rc<RefCell<LinkBoard>>,
    pub search_term: Rc<RefCell<String>>,
    pub is_fetching: Rc<Cell<bool>>,
    next_temp_id: Rc<Cell<u64>>,
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

/// Held while a canonical list fetch is in flight; dropping it reopens the guard
pub struct FetchGuard {
    flag: Rc<Cell<bool>>,
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_links(LinkBoard::default())
    }

    pub fn with_links(board: LinkBoard) -> Self {
        Self {
            auth: AuthState::new(),
            links: Rc::new(RefCell::new(board)),
            search_term: Rc::new(RefCell::new(String::new())),
            is_fetching: Rc::new(Cell::new(false)),
            next_temp_id: Rc::new(Cell::new(1)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Snapshot of the current board
    pub fn links(&self) -> LinkBoard {
        self.links.borrow().clone()
    }

    /// Canonical replacement: buckets are swapped wholesale, never merged
    pub fn replace_links(&self, board: LinkBoard) {
        *self.links.borrow_mut() = board;
    }

    pub fn update_links<R>(&self, f: impl FnOnce(&mut LinkBoard) -> R) -> R {
        f(&mut self.links.borrow_mut())
    }

    pub fn get_search_term(&self) -> String {
        self.search_term.borrow().clone()
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        *self.search_term.borrow_mut() = term.into();
    }

    /// Synthetic id for an optimistic placeholder
    pub fn next_temp_id(&self) -> u64 {
        let id = self.next_temp_id.get();
        self.next_temp_id.set(id + 1);
        id
    }

    /// `None` while another fetch holds the guard
    pub fn try_begin_fetch(&self) -> Option<FetchGuard> {
        if self.is_fetching.replace(true) {
            return None;
        }
        Some(FetchGuard {
            flag: self.is_fetching.clone(),
        })
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        // Callbacks may touch the state again, so don't hold the borrow
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    /// Logout lifecycle: the board stays, the session goes
    pub fn logout(&self) {
        self.auth.logout();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
