use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::predictor::catalog::{
    AdmissionQuota, BranchCategory, Category, CollegeCatalog, CollegeEntry, CutoffLedger,
    ExamTrack, FeeTier, GenderEligibility, InstituteType, Region,
};
use crate::predictor::matching::domain::{
    BranchInterest, CandidateQuery, ExamSelection, FeeTolerance, LocationPriority,
    PreferenceProfile, QuotaPreference, RankSheet,
};
use crate::predictor::matching::{MatchEngine, PredictorService};
use crate::session::{ResumePoint, SessionListener, SessionStore};

pub(super) fn crl(pairs: &[(Category, u32)]) -> BTreeMap<Category, u32> {
    pairs.iter().copied().collect()
}

/// A JEE Main seat with a GEN closing rank of 1000 and unremarkable
/// everything else; tests override the fields they exercise.
pub(super) fn main_entry(id: u32) -> CollegeEntry {
    CollegeEntry {
        id,
        institute: format!("Institute {id}"),
        city: "Surathkal".to_string(),
        state: "Karnataka".to_string(),
        region: Region::South,
        institute_type: InstituteType::Nit,
        exam: ExamTrack::JeeMain,
        branch: "Computer Science and Engineering".to_string(),
        branch_category: BranchCategory::Circuital,
        opening: CutoffLedger {
            crl: crl(&[(Category::General, 100), (Category::Obc, 150)]),
            category: crl(&[(Category::Obc, 40)]),
        },
        closing: CutoffLedger {
            crl: crl(&[(Category::General, 1000), (Category::Obc, 1800)]),
            category: crl(&[(Category::Obc, 600)]),
        },
        fee_tier: FeeTier::Low,
        average_package_lpa: 10.0,
        quota: AdmissionQuota::AllIndia,
        gender: GenderEligibility::GenderNeutral,
    }
}

pub(super) fn advanced_entry(id: u32) -> CollegeEntry {
    CollegeEntry {
        exam: ExamTrack::JeeAdvanced,
        institute_type: InstituteType::Iit,
        ..main_entry(id)
    }
}

pub(super) fn engine_with(entries: Vec<CollegeEntry>) -> MatchEngine {
    MatchEngine::new(CollegeCatalog::new(entries))
}

/// GEN query on the JEE Main track with the given CRL input.
pub(super) fn gen_main_query(rank: &str) -> CandidateQuery {
    CandidateQuery {
        exams: ExamSelection::JeeMain,
        ranks: RankSheet {
            jee_main_crl: Some(rank.to_string()),
            ..RankSheet::default()
        },
        category: Category::General,
        quota: QuotaPreference::All,
        gender: None,
    }
}

pub(super) fn gen_both_query(main_rank: &str, advanced_rank: &str) -> CandidateQuery {
    CandidateQuery {
        exams: ExamSelection::Both,
        ranks: RankSheet {
            jee_main_crl: Some(main_rank.to_string()),
            jee_advanced_crl: Some(advanced_rank.to_string()),
            ..RankSheet::default()
        },
        category: Category::General,
        quota: QuotaPreference::All,
        gender: None,
    }
}

/// Preference profile with every filter and bonus disabled.
pub(super) fn open_preferences() -> PreferenceProfile {
    PreferenceProfile {
        region: None,
        branch_interest: BranchInterest::Any,
        fee_tolerance: FeeTolerance::Any,
        institute_types: Default::default(),
        location_priority: LocationPriority::Any,
        focus_areas: Default::default(),
    }
}

#[derive(Default)]
pub(super) struct MemorySession {
    authenticated: AtomicBool,
    listeners: Mutex<Vec<SessionListener>>,
    resume: Mutex<Option<ResumePoint>>,
}

impl MemorySession {
    pub(super) fn signed_in() -> Self {
        let session = Self::default();
        session.authenticated.store(true, Ordering::Relaxed);
        session
    }
}

impl SessionStore for MemorySession {
    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Relaxed)
    }

    fn set_authenticated(&self, value: bool) {
        self.authenticated.store(value, Ordering::Relaxed);
        let listeners = self.listeners.lock().expect("session mutex poisoned");
        for listener in listeners.iter() {
            listener(value);
        }
    }

    fn subscribe(&self, listener: SessionListener) {
        self.listeners
            .lock()
            .expect("session mutex poisoned")
            .push(listener);
    }

    fn stash_resume(&self, resume: ResumePoint) {
        *self.resume.lock().expect("session mutex poisoned") = Some(resume);
    }

    fn take_resume(&self) -> Option<ResumePoint> {
        self.resume.lock().expect("session mutex poisoned").take()
    }
}

pub(super) fn service_with(
    entries: Vec<CollegeEntry>,
    authenticated: bool,
) -> (Arc<PredictorService<MemorySession>>, Arc<MemorySession>) {
    let session = if authenticated {
        Arc::new(MemorySession::signed_in())
    } else {
        Arc::new(MemorySession::default())
    };
    let engine = Arc::new(engine_with(entries));
    let service = Arc::new(PredictorService::new(engine, session.clone()));
    (service, session)
}
