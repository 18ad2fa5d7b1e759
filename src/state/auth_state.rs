// ============================================================================
// AUTH STATE - Who is signed in, for the lifetime of the page
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::services::Credentials;
use crate::utils::email_local_part;

#[derive(Clone)]
pub struct AuthState {
    pub current_user: Rc<RefCell<Option<String>>>,
    pub is_authorized: Rc<RefCell<bool>>,
    pub session_token: Rc<RefCell<Option<String>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Rc::new(RefCell::new(None)),
            is_authorized: Rc::new(RefCell::new(false)),
            session_token: Rc::new(RefCell::new(None)),
        }
    }

    pub fn sign_in(&self, credentials: Credentials) {
        *self.current_user.borrow_mut() = Some(credentials.email);
        *self.session_token.borrow_mut() = Some(credentials.token);
        *self.is_authorized.borrow_mut() = true;
    }

    pub fn is_authorized(&self) -> bool {
        *self.is_authorized.borrow()
    }

    pub fn get_current_user(&self) -> Option<String> {
        self.current_user.borrow().clone()
    }

    pub fn get_token(&self) -> Option<String> {
        self.session_token.borrow().clone()
    }

    /// Local part of the signed-in email, empty when signed out
    pub fn display_name(&self) -> String {
        self.current_user
            .borrow()
            .as_deref()
            .map(|email| email_local_part(email).to_string())
            .unwrap_or_default()
    }

    /// Logout - clear everything
    pub fn logout(&self) {
        *self.current_user.borrow_mut() = None;
        *self.session_token.borrow_mut() = None;
        *self.is_authorized.borrow_mut() = false;
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
