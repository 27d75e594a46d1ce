//! Contract for the remote account backend. The backend itself lives
//! outside this codebase and is consumed as a black box over HTTPS with
//! cookie credentials; here we pin down the operations, the error surface,
//! and the forced sign-out rule for unauthorized responses.

use serde::{Deserialize, Serialize};

use crate::session::{ResumePoint, SessionStore};

/// Snapshot of the signed-in user as returned by the account backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Failures surfaced by the account backend. Every failure is terminal for
/// the user action; no retries are attempted anywhere.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("session expired or unauthorized")]
    Unauthorized,
    #[error("account request rejected: {0}")]
    Rejected(String),
    #[error("account backend unreachable: {0}")]
    Transport(String),
}

/// Operations the surrounding application delegates to the account backend.
pub trait AccountService: Send + Sync {
    fn current_user(&self) -> Result<AccountProfile, AccountError>;
    fn update_username(&self, username: &str) -> Result<AccountProfile, AccountError>;
    fn change_password(&self, current: &str, replacement: &str) -> Result<(), AccountError>;
    fn upload_avatar(&self, image: &[u8], content_type: &str)
        -> Result<AccountProfile, AccountError>;
    fn logout(&self) -> Result<(), AccountError>;
}

/// Unauthorized responses force the local session flag down and route the
/// user through the auth flow with a stashed return path. Other failures
/// leave the session untouched.
pub fn force_sign_out_on_unauthorized<S: SessionStore>(
    session: &S,
    error: &AccountError,
    return_path: &str,
) -> Option<ResumePoint> {
    match error {
        AccountError::Unauthorized => {
            session.set_authenticated(false);
            let resume = ResumePoint::back_to(return_path);
            session.stash_resume(resume.clone());
            Some(resume)
        }
        AccountError::Rejected(_) | AccountError::Transport(_) => None,
    }
}
