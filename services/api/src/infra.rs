use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use rankpath::error::AppError;
use rankpath::predictor::catalog::{CatalogImporter, Category, CollegeCatalog};
use rankpath::predictor::matching::{ExamSelection, QuotaPreference};
use rankpath::session::{ResumePoint, SessionListener, SessionStore};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session context. In deployment the auth gateway pushes the
/// signed-in state through the session endpoint; listeners fan the change
/// out to whoever subscribed.
#[derive(Default)]
pub(crate) struct InMemorySessionStore {
    authenticated: AtomicBool,
    listeners: Mutex<Vec<SessionListener>>,
    resume: Mutex<Option<ResumePoint>>,
}

impl SessionStore for InMemorySessionStore {
    fn is_authenticated(&self) -> bool {
        self.authenticated
            .load(std::sync::atomic::Ordering::Relaxed)
    }

    fn set_authenticated(&self, value: bool) {
        self.authenticated
            .store(value, std::sync::atomic::Ordering::Relaxed);
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

/// Returns the catalog plus whether it came from a CSV export.
pub(crate) fn load_catalog(
    catalog_csv: Option<PathBuf>,
) -> Result<(CollegeCatalog, bool), AppError> {
    match catalog_csv {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path)?;
            Ok((catalog, true))
        }
        None => Ok((CollegeCatalog::seed(), false)),
    }
}

pub(crate) fn parse_exam_selection(raw: &str) -> Result<ExamSelection, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "jee-main" | "jee main" | "main" => Ok(ExamSelection::JeeMain),
        "jee-advanced" | "jee advanced" | "advanced" => Ok(ExamSelection::JeeAdvanced),
        "both" => Ok(ExamSelection::Both),
        _ => Err(format!(
            "'{raw}' is not an exam selection (expected jee-main, jee-advanced, or both)"
        )),
    }
}

pub(crate) fn parse_category(raw: &str) -> Result<Category, String> {
    Category::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not a category code (expected GEN, OBC, SC, ST, EWS)"))
}

pub(crate) fn parse_quota(raw: &str) -> Result<QuotaPreference, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(QuotaPreference::All),
        "home-state" | "home state" | "hs" => Ok(QuotaPreference::HomeState),
        "other-state" | "other state" | "os" => Ok(QuotaPreference::OtherState),
        _ => Err(format!(
            "'{raw}' is not a quota preference (expected all, home-state, or other-state)"
        )),
    }
}
