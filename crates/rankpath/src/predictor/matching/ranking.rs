use super::domain::ScoredCollege;
use crate::predictor::catalog::{Category, CollegeEntry};

/// Basic mode: most competitive seats first. Entries with no cutoff for the
/// chosen category sort last. The sort is stable, so catalog order breaks
/// ties.
pub(crate) fn order_by_cutoff(entries: &mut [CollegeEntry], category: Category) {
    entries.sort_by_key(|entry| {
        entry
            .closing_crl(category)
            .map(u64::from)
            .unwrap_or(u64::MAX)
    });
}

/// Personalized mode: best match first. `total_cmp` keeps the ordering
/// total over floats; stability again leaves catalog order on ties.
pub(crate) fn order_by_score(matches: &mut [ScoredCollege]) {
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
}
