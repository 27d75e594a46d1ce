//! Session context shared between the predictor flow and the surrounding
//! application. Authentication itself happens in an external service; this
//! module only carries the signed-in flag, change notifications, and the
//! resume point persisted across the auth detour.

use serde::{Deserialize, Serialize};

/// Work to pick back up once the user returns from the auth flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingAction {
    Personalize,
}

/// Redirect target plus the action stashed before handing off to auth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumePoint {
    pub redirect_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<PendingAction>,
}

impl ResumePoint {
    /// Stash for the personalization wizard: return to the predictor page
    /// and re-enter the wizard once signed in.
    pub fn personalize() -> Self {
        Self {
            redirect_to: "/".to_string(),
            action: Some(PendingAction::Personalize),
        }
    }

    /// Plain return-to-page stash with no follow-up action.
    pub fn back_to(path: &str) -> Self {
        Self {
            redirect_to: path.to_string(),
            action: None,
        }
    }
}

pub type SessionListener = Box<dyn Fn(bool) + Send + Sync>;

/// Explicit session context object injected wherever the signed-in state is
/// consulted. Mutations notify every subscriber so views invalidate without
/// polling a global flag.
pub trait SessionStore: Send + Sync {
    fn is_authenticated(&self) -> bool;

    /// Flip the signed-in flag and notify subscribers with the new value.
    fn set_authenticated(&self, value: bool);

    fn subscribe(&self, listener: SessionListener);

    /// Remember where to resume after the auth detour.
    fn stash_resume(&self, resume: ResumePoint);

    /// Consume the stashed resume point, if any.
    fn take_resume(&self) -> Option<ResumePoint>;
}
