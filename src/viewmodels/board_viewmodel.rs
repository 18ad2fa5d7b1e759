// ============================================================================
// BOARD VIEWMODEL - Fetch, optimistic add/delete, login
// ============================================================================
// Mutates AppState and notifies subscribers; views only read.
// Every failure ends up as a toast, nothing is retried.
// ============================================================================

use async_trait::async_trait;
use std::rc::Rc;
use crate::error::{BoardError, BoardResult};
use crate::models::{BucketKey, MutationAction, MutationRequest};
use crate::services::{CredentialGate, LinkCache, RemoteApi};
use crate::state::{AppState, MutationPhase, PendingMutation};
use crate::utils::email_local_part;

pub const MSG_LOAD_FAILED: &str = "Failed to load morning/afternoon links. Please try again later.";
pub const MSG_ADD_UNAUTHORIZED: &str = "You are not authorized.";
pub const MSG_DELETE_UNAUTHORIZED: &str = "Not authorized.";
pub const MSG_MISSING_FIELDS: &str = "Please enter both a name and a link.";
pub const MSG_LINK_NOT_FOUND: &str = "Link not found.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Transient user notifications
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);
}

/// Yes/no prompt shown before destructive actions
#[async_trait(?Send)]
pub trait Confirmer {
    async fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Board replaced with the canonical rows
    Replaced,
    /// Another fetch was already in flight
    Skipped,
    Failed(BoardError),
}

#[derive(Clone)]
pub struct BoardViewModel {
    state: AppState,
    api: Rc<dyn RemoteApi>,
    cache: LinkCache,
    gate: Rc<CredentialGate>,
    notifier: Rc<dyn Notifier>,
    confirmer: Rc<dyn Confirmer>,
}

impl BoardViewModel {
    pub fn new(
        state: AppState,
        api: Rc<dyn RemoteApi>,
        cache: LinkCache,
        gate: CredentialGate,
        notifier: Rc<dyn Notifier>,
        confirmer: Rc<dyn Confirmer>,
    ) -> Self {
        Self {
            state,
            api,
            cache,
            gate: Rc::new(gate),
            notifier,
            confirmer,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn notifier(&self) -> &Rc<dyn Notifier> {
        &self.notifier
    }

    fn fail<T>(&self, error: BoardError) -> BoardResult<T> {
        self.notifier.notify(ToastKind::Error, &error.to_string());
        Err(error)
    }

    /// Fast path for the first paint
    pub fn seed_from_cache(&self) {
        self.state.replace_links(self.cache.load());
        self.state.notify_subscribers();
    }

    /// Canonical fetch. Dropped, not queued, while another one is running.
    pub async fn refresh(&self) -> FetchOutcome {
        let Some(_guard) = self.state.try_begin_fetch() else {
            log::info!("⏭️ [BOARD] Fetch already in flight, skipping");
            return FetchOutcome::Skipped;
        };

        match self.api.list().await {
            Ok(data) => {
                let board = data.into_board();
                if let Err(e) = self.cache.save(&board) {
                    log::warn!("⚠️ [BOARD] Could not update cache: {}", e);
                }
                log::info!("✅ [BOARD] Board replaced: {} links", board.total_links());
                self.state.replace_links(board);
                self.state.notify_subscribers();
                FetchOutcome::Replaced
            }
            Err(e) => {
                log::error!("❌ [BOARD] Error loading sheets: {}", e);
                self.notifier.notify(ToastKind::Error, MSG_LOAD_FAILED);
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Optimistic add. `Err` means nothing was changed and no request was sent.
    pub async fn add_link(&self, key: BucketKey, name: &str, url: &str) -> BoardResult<MutationPhase> {
        if !self.state.auth.is_authorized() {
            return self.fail(BoardError::Unauthorized(MSG_ADD_UNAUTHORIZED.to_string()));
        }
        let (name, url) = (name.trim(), url.trim());
        if name.is_empty() || url.is_empty() {
            return self.fail(BoardError::Validation(MSG_MISSING_FIELDS.to_string()));
        }

        let temp_id = self.state.next_temp_id();
        let pending = self
            .state
            .update_links(|board| PendingMutation::begin_add(board, key, name, url, temp_id));
        self.state.notify_subscribers();
        self.notifier.notify(ToastKind::Info, &format!("Adding \"{}\"...", name));

        let request = MutationRequest::new(MutationAction::Add, key, pending.link(), self.state.auth.get_token());
        self.finish(pending, request, "added successfully", "Failed to save link.", "Error uploading link.")
            .await
    }

    /// Confirmed, optimistic delete of the link at `index` in the unfiltered
    /// bucket. `Ok(None)` when the user declined.
    pub async fn delete_link(&self, key: BucketKey, index: usize) -> BoardResult<Option<MutationPhase>> {
        if !self.state.auth.is_authorized() {
            return self.fail(BoardError::Unauthorized(MSG_DELETE_UNAUTHORIZED.to_string()));
        }
        let Some(target) = self.state.links.borrow().bucket(key).get(index).cloned() else {
            return self.fail(BoardError::NotFound(MSG_LINK_NOT_FOUND.to_string()));
        };

        let question = format!("Are you sure you want to delete \"{}\"?", target.name);
        if !self.confirmer.confirm(&question).await {
            log::info!("🚫 [BOARD] Delete of '{}' declined", target.name);
            return Ok(None);
        }

        // The board may have been refetched while the prompt was open
        let pending = self.state.update_links(|board| {
            let bucket = board.bucket(key);
            let at = match bucket.get(index) {
                Some(l) if l.same_resource(&target) => Some(index),
                _ => bucket.iter().position(|l| l.same_resource(&target)),
            };
            at.and_then(|i| PendingMutation::begin_delete(board, key, i))
        });
        let Some(pending) = pending else {
            return self.fail(BoardError::NotFound(MSG_LINK_NOT_FOUND.to_string()));
        };
        self.state.notify_subscribers();
        self.notifier.notify(ToastKind::Info, &format!("Deleting \"{}\"...", target.name));

        let request = MutationRequest::new(MutationAction::Delete, key, pending.link(), self.state.auth.get_token());
        self.finish(pending, request, "deleted successfully", "Failed to delete link", "Error deleting link")
            .await
            .map(Some)
    }

    /// Sends the request for an applied mutation, then settles it through a
    /// canonical refetch or rolls it back.
    async fn finish(
        &self,
        pending: PendingMutation,
        request: MutationRequest,
        done: &str,
        rejected_fallback: &str,
        fallback: &str,
    ) -> BoardResult<MutationPhase> {
        let name = pending.link().name.clone();

        match self.api.mutate(&request).await {
            Ok(()) => {
                let message = match request.action {
                    MutationAction::Add => format!("Link \"{}\" {}!", name, done),
                    MutationAction::Delete => format!("\"{}\" {}!", name, done),
                };
                self.notifier.notify(ToastKind::Success, &message);

                let refetched = self.refresh().await == FetchOutcome::Replaced;
                let phase = self.state.update_links(|board| pending.settle(board, refetched));
                if !refetched {
                    self.state.notify_subscribers();
                }
                Ok(phase)
            }
            Err(e) => {
                log::error!("❌ [BOARD] {:?} of '{}' failed: {}", request.action, name, e);
                let message = e.user_message(rejected_fallback, fallback);
                let phase = self.state.update_links(|board| pending.roll_back(board, e));
                self.state.notify_subscribers();
                self.notifier.notify(ToastKind::Error, &message);
                Ok(phase)
            }
        }
    }

    pub fn login(&self, email: &str, password: &str) -> BoardResult<()> {
        match self.gate.verify(email, password) {
            Ok(credentials) => {
                let welcome = format!(
                    "Welcome {}! You can now add links.",
                    email_local_part(&credentials.email)
                );
                log::info!("🔐 [AUTH] Signed in");
                self.state.auth.sign_in(credentials);
                self.state.notify_subscribers();
                self.notifier.notify(ToastKind::Success, &welcome);
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn logout(&self) {
        self.state.logout();
        self.state.notify_subscribers();
        self.notifier.notify(ToastKind::Success, "Successfully signed out!");
    }

    pub fn set_search_term(&self, term: &str) {
        self.state.set_search_term(term);
        self.state.notify_subscribers();
    }
}
