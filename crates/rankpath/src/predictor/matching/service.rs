use std::sync::Arc;

use tracing::debug;

use super::domain::{CandidateQuery, PersonalizedReport, PreferenceProfile};
use super::MatchEngine;
use crate::predictor::catalog::CollegeEntry;
use crate::session::{ResumePoint, SessionStore};

/// Service composing the match engine with the session gate. Basic
/// shortlists are open; everything personalized requires a signed-in
/// session, checked on every call because the session can flip at any
/// time.
pub struct PredictorService<S> {
    engine: Arc<MatchEngine>,
    session: Arc<S>,
}

impl<S> PredictorService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(engine: Arc<MatchEngine>, session: Arc<S>) -> Self {
        Self { engine, session }
    }

    pub fn session(&self) -> &Arc<S> {
        &self.session
    }

    pub fn engine(&self) -> &Arc<MatchEngine> {
        &self.engine
    }

    pub fn shortlist(&self, query: &CandidateQuery) -> Vec<CollegeEntry> {
        let shortlist = self.engine.shortlist(query);
        debug!(
            category = query.category.code(),
            results = shortlist.len(),
            "basic shortlist computed"
        );
        shortlist
    }

    pub fn recommend(
        &self,
        query: &CandidateQuery,
        preferences: &PreferenceProfile,
    ) -> Result<PersonalizedReport, PredictorError> {
        if !self.session.is_authenticated() {
            let resume = ResumePoint::personalize();
            self.session.stash_resume(resume.clone());
            return Err(PredictorError::AuthRequired(resume));
        }

        let matches = self.engine.recommend(query, preferences);
        debug!(
            category = query.category.code(),
            results = matches.len(),
            "personalized matches computed"
        );
        Ok(PersonalizedReport::from_matches(matches))
    }
}

/// Error raised by the predictor service.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("sign in required before personalization")]
    AuthRequired(ResumePoint),
}
