use super::domain::{BranchInterest, CandidateQuery, PreferenceProfile};
use crate::predictor::catalog::{BranchCategory, CollegeEntry, ExamTrack};

/// Personalized mode widens the cutoff window to surface "reach" options
/// that the probability step later labels Low.
pub(crate) const RELAXED_WINDOW_FACTOR: f64 = 1.5;

/// The rank pair an entry is judged against: the candidate's rank on the
/// entry's exam track and the entry's closing rank on the common rank list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AdmissionWindow {
    pub rank: u32,
    pub closing: u32,
}

fn track_rank(entry: &CollegeEntry, query: &CandidateQuery) -> Option<u32> {
    if !query.exams.includes(entry.exam) {
        return None;
    }
    query.ranks.crl(entry.exam)
}

/// Quota reservations only exist on the JEE Main track; other tracks have
/// no home-state distinction to filter on.
fn quota_admits(entry: &CollegeEntry, query: &CandidateQuery) -> bool {
    if entry.exam != ExamTrack::JeeMain {
        return true;
    }
    query.quota.admits(entry.quota)
}

/// Strict-cutoff eligibility for the basic results table.
pub(crate) fn basic_window(
    entry: &CollegeEntry,
    query: &CandidateQuery,
) -> Option<AdmissionWindow> {
    let rank = track_rank(entry, query)?;
    let closing = entry.closing_crl(query.category)?;

    if rank > closing {
        return None;
    }
    if !quota_admits(entry, query) {
        return None;
    }

    Some(AdmissionWindow { rank, closing })
}

/// Relaxed-window eligibility for personalized matching, with the
/// preference filters layered on top.
pub(crate) fn personalized_window(
    entry: &CollegeEntry,
    query: &CandidateQuery,
    preferences: &PreferenceProfile,
) -> Option<AdmissionWindow> {
    let rank = track_rank(entry, query)?;
    let closing = entry.closing_crl(query.category)?;

    if f64::from(rank) > f64::from(closing) * RELAXED_WINDOW_FACTOR {
        return None;
    }
    if !quota_admits(entry, query) {
        return None;
    }
    if !preferences.fee_tolerance.admits(entry.fee_tier) {
        return None;
    }
    if !preferences.institute_types.is_empty()
        && !preferences.institute_types.contains(&entry.institute_type)
    {
        return None;
    }
    if !branch_admits(&preferences.branch_interest, entry) {
        return None;
    }

    Some(AdmissionWindow { rank, closing })
}

/// Branch filter. A specific interest matches on the first word of the
/// requested branch name, so "Computer Science and Engineering" also
/// matches "Computer Engineering". An empty specific name applies no
/// filter.
pub(crate) fn branch_admits(interest: &BranchInterest, entry: &CollegeEntry) -> bool {
    match interest {
        BranchInterest::Circuital => entry.branch_category == BranchCategory::Circuital,
        BranchInterest::NonCircuital => entry.branch_category == BranchCategory::NonCircuital,
        BranchInterest::Specific(name) => {
            let lowered = name.to_lowercase();
            match lowered.split_whitespace().next() {
                Some(first_word) => entry.branch.to_lowercase().contains(first_word),
                None => true,
            }
        }
        BranchInterest::Any => true,
    }
}
