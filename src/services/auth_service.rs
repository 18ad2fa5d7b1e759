// ============================================================================
// CREDENTIAL GATE - Client-side password + email allow-list check
// ============================================================================
// This is a UI gate, not a security boundary: the digests ship with the page.
// The endpoint receives the password as token and must do its own check.
// ============================================================================

use sha2::{Digest, Sha256};
use std::collections::HashSet;
use crate::config::CONFIG;
use crate::error::{BoardError, BoardResult};

pub const MSG_INCORRECT_PASSWORD: &str = "Incorrect password.";
pub const MSG_EMAIL_REQUIRED: &str = "Please enter your email.";
pub const MSG_NOT_AUTHORIZED: &str = "You are not authorized.";

/// Lowercase hex SHA-256 of the UTF-8 bytes
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Identity granted by a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct CredentialGate {
    password_digest: String,
    allowed_emails: HashSet<String>,
}

impl CredentialGate {
    pub fn new<I, S>(password_digest: impl Into<String>, allowed_email_digests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            password_digest: password_digest.into().to_lowercase(),
            allowed_emails: allowed_email_digests
                .into_iter()
                .map(|d| d.into().to_lowercase())
                .collect(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.password_digest.clone(), CONFIG.authorized_digests.clone())
    }

    /// Password first, then email membership. Inputs are trimmed.
    pub fn verify(&self, email: &str, password: &str) -> BoardResult<Credentials> {
        let email = email.trim();
        let password = password.trim();

        if sha256_hex(password) != self.password_digest {
            log::warn!("⚠️ [AUTH] Password digest mismatch");
            return Err(BoardError::Unauthorized(MSG_INCORRECT_PASSWORD.to_string()));
        }
        if email.is_empty() {
            return Err(BoardError::Unauthorized(MSG_EMAIL_REQUIRED.to_string()));
        }
        if !self.allowed_emails.contains(&sha256_hex(email)) {
            log::warn!("⚠️ [AUTH] Email not in allow-list");
            return Err(BoardError::Unauthorized(MSG_NOT_AUTHORIZED.to_string()));
        }

        Ok(Credentials {
            email: email.to_string(),
            token: password.to_string(),
        })
    }
}

impl Default for CredentialGate {
    fn default() -> Self {
        Self::from_config()
    }
}
