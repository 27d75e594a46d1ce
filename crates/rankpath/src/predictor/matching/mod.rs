//! Eligibility filtering, preference scoring, and ranking over the cutoff
//! catalog, plus the wizard and view-mode flow that drive the personalized
//! path.

pub mod domain;
mod eligibility;
mod flow;
mod ranking;
mod router;
mod scoring;
mod service;
mod wizard;

#[cfg(test)]
mod tests;

pub use domain::{
    BranchInterest, CandidateQuery, ExamSelection, FeeTolerance, FocusArea, LocationPriority,
    MatchComponent, MatchFactor, PersonalizedReport, PreferenceProfile, ProbabilityBand,
    QuotaPreference, RankSheet, ScoredCollege,
};
pub use flow::{FlowError, PersonalizationFlow, ViewMode};
pub use router::{predictor_router, RecommendationRequest};
pub use service::{PredictorError, PredictorService};
pub use wizard::{
    BranchLeaning, RegionChoice, WizardAdvance, WizardAnswer, WizardDraft, WizardError,
    WizardRetreat, WizardSession, WizardStep,
};

use crate::predictor::catalog::{CollegeCatalog, CollegeEntry};

/// Stateless matcher over the read-only catalog. Every call recomputes the
/// full result synchronously; nothing is cached between queries.
pub struct MatchEngine {
    catalog: CollegeCatalog,
}

impl MatchEngine {
    pub fn new(catalog: CollegeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CollegeCatalog {
        &self.catalog
    }

    /// Basic mode: strict cutoff filter, ordered by closing rank. An
    /// incomplete or invalid form yields an empty shortlist.
    pub fn shortlist(&self, query: &CandidateQuery) -> Vec<CollegeEntry> {
        if !query.basic_form_complete() {
            return Vec::new();
        }

        let mut eligible: Vec<CollegeEntry> = self
            .catalog
            .entries()
            .iter()
            .filter(|entry| eligibility::basic_window(entry, query).is_some())
            .cloned()
            .collect();

        ranking::order_by_cutoff(&mut eligible, query.category);
        eligible
    }

    /// Personalized mode: relaxed-window filter, preference filters, then
    /// scored and ordered best-match-first.
    pub fn recommend(
        &self,
        query: &CandidateQuery,
        preferences: &PreferenceProfile,
    ) -> Vec<ScoredCollege> {
        let mut matches: Vec<ScoredCollege> = self
            .catalog
            .entries()
            .iter()
            .filter_map(|entry| {
                let window = eligibility::personalized_window(entry, query, preferences)?;
                let breakdown =
                    scoring::score_entry(entry, window.rank, window.closing, preferences);
                Some(ScoredCollege {
                    entry: entry.clone(),
                    score: breakdown.total,
                    probability: breakdown.probability,
                    components: breakdown.components,
                })
            })
            .collect();

        ranking::order_by_score(&mut matches);
        matches
    }
}
