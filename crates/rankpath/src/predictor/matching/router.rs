use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CandidateQuery, PreferenceProfile};
use super::service::{PredictorError, PredictorService};
use crate::session::SessionStore;

/// Router builder exposing the predictor endpoints.
pub fn predictor_router<S>(service: Arc<PredictorService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/predictor/shortlist", post(shortlist_handler::<S>))
        .route(
            "/api/v1/predictor/recommendations",
            post(recommendations_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub query: CandidateQuery,
    pub preferences: PreferenceProfile,
}

pub(crate) async fn shortlist_handler<S>(
    State(service): State<Arc<PredictorService<S>>>,
    axum::Json(query): axum::Json<CandidateQuery>,
) -> Response
where
    S: SessionStore + 'static,
{
    let shortlist = service.shortlist(&query);
    let payload = json!({
        "count": shortlist.len(),
        "category": query.category.code(),
        "colleges": shortlist,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn recommendations_handler<S>(
    State(service): State<Arc<PredictorService<S>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.recommend(&request.query, &request.preferences) {
        Ok(report) => {
            let payload = json!({
                "total": report.total(),
                "high_chance": report.high_chance,
                "medium_chance": report.medium_chance,
                "matches": report.matches,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(PredictorError::AuthRequired(resume)) => {
            let payload = json!({
                "error": "sign in required before personalization",
                "redirect_to": resume.redirect_to,
                "action": resume.action,
            });
            (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response()
        }
    }
}
