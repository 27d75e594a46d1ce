use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::domain::PreferenceProfile;
use crate::session::{PendingAction, ResumePoint, SessionStore};

/// Views of the predictor page. Everything past `Basic` is personalization
/// and requires a signed-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Basic,
    Wizard,
    Loading,
    Personalized,
}

impl ViewMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Wizard => "wizard",
            Self::Loading => "loading",
            Self::Personalized => "personalized",
        }
    }

    pub const fn requires_session(self) -> bool {
        !matches!(self, Self::Basic)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlowError {
    #[error("sign in required; resuming at {}", .0.redirect_to)]
    AuthRequired(ResumePoint),
    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: ViewMode, to: ViewMode },
}

/// The Basic -> Wizard -> Loading -> Personalized walk. The session is
/// re-checked at every entry into a protected view, not just on the
/// transition edge, because it can be invalidated from outside at any
/// moment; a failed check demotes to Basic and hands off to auth with a
/// stashed resume point.
pub struct PersonalizationFlow<S> {
    session: Arc<S>,
    mode: ViewMode,
    preferences: Option<PreferenceProfile>,
}

impl<S> PersonalizationFlow<S>
where
    S: SessionStore + 'static,
{
    pub fn new(session: Arc<S>) -> Self {
        Self {
            session,
            mode: ViewMode::Basic,
            preferences: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn preferences(&self) -> Option<&PreferenceProfile> {
        self.preferences.as_ref()
    }

    fn auth_handoff(&self) -> FlowError {
        let resume = ResumePoint::personalize();
        self.session.stash_resume(resume.clone());
        FlowError::AuthRequired(resume)
    }

    fn guard(&mut self, from: ViewMode, to: ViewMode) -> Result<(), FlowError> {
        if self.mode != from {
            return Err(FlowError::InvalidTransition {
                from: self.mode,
                to,
            });
        }
        if to.requires_session() && !self.session.is_authenticated() {
            self.mode = ViewMode::Basic;
            self.preferences = None;
            return Err(self.auth_handoff());
        }
        Ok(())
    }

    /// "Personalize" pressed from the basic view.
    pub fn begin_personalization(&mut self) -> Result<ViewMode, FlowError> {
        self.guard(ViewMode::Basic, ViewMode::Wizard)?;
        self.mode = ViewMode::Wizard;
        Ok(self.mode)
    }

    /// Wizard finished: hold the profile and enter the loading interlude.
    pub fn complete_wizard(
        &mut self,
        preferences: PreferenceProfile,
    ) -> Result<ViewMode, FlowError> {
        self.guard(ViewMode::Wizard, ViewMode::Loading)?;
        self.preferences = Some(preferences);
        self.mode = ViewMode::Loading;
        Ok(self.mode)
    }

    /// The loading interlude is cosmetic; completing it lands on results.
    pub fn finish_loading(&mut self) -> Result<ViewMode, FlowError> {
        self.guard(ViewMode::Loading, ViewMode::Personalized)?;
        self.mode = ViewMode::Personalized;
        Ok(self.mode)
    }

    /// Explicit back action from any view; drops the held profile.
    pub fn return_to_basic(&mut self) -> ViewMode {
        self.mode = ViewMode::Basic;
        self.preferences = None;
        self.mode
    }

    /// Re-check the session for the current view. Called on every render
    /// of a protected view; a stale session demotes to Basic.
    pub fn enforce_session(&mut self) -> Result<(), FlowError> {
        if self.mode.requires_session() && !self.session.is_authenticated() {
            self.mode = ViewMode::Basic;
            self.preferences = None;
            return Err(self.auth_handoff());
        }
        Ok(())
    }

    /// Returning from the auth flow: a stashed personalize action re-opens
    /// the wizard, provided the session now holds.
    pub fn resume_after_login(&mut self) -> Option<ViewMode> {
        let resume = self.session.take_resume()?;
        if resume.action != Some(PendingAction::Personalize) {
            return None;
        }
        if !self.session.is_authenticated() {
            // Stash back; the user bounced off the auth flow.
            self.session.stash_resume(resume);
            return None;
        }
        if self.mode == ViewMode::Basic {
            self.mode = ViewMode::Wizard;
        }
        Some(self.mode)
    }
}
