use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use rankpath::predictor::matching::{predictor_router, PredictorService};
use rankpath::session::SessionStore;

pub(crate) fn with_predictor_routes<S>(
    service: Arc<PredictorService<S>>,
    session: Arc<S>,
) -> axum::Router
where
    S: SessionStore + 'static,
{
    predictor_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/session",
            axum::routing::get(session_status::<S>).post(session_update::<S>),
        )
        .layer(Extension(session))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// The auth gateway owns sign-in; it pushes the session flag here so the
/// predictor gate observes the same state the rest of the product sees.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionUpdateRequest {
    pub(crate) authenticated: bool,
}

pub(crate) async fn session_status<S>(
    Extension(session): Extension<Arc<S>>,
) -> Json<serde_json::Value>
where
    S: SessionStore + 'static,
{
    Json(json!({ "authenticated": session.is_authenticated() }))
}

pub(crate) async fn session_update<S>(
    Extension(session): Extension<Arc<S>>,
    Json(payload): Json<SessionUpdateRequest>,
) -> Json<serde_json::Value>
where
    S: SessionStore + 'static,
{
    session.set_authenticated(payload.authenticated);
    Json(json!({ "authenticated": session.is_authenticated() }))
}
