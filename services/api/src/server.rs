use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemorySessionStore};
use crate::routes::with_predictor_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rankpath::config::AppConfig;
use rankpath::error::AppError;
use rankpath::predictor::matching::{MatchEngine, PredictorService};
use rankpath::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let (catalog, imported) = load_catalog(args.catalog_csv.take())?;
    let catalog_size = catalog.len();
    let session = Arc::new(InMemorySessionStore::default());
    let engine = Arc::new(MatchEngine::new(catalog));
    let service = Arc::new(PredictorService::new(engine, session.clone()));

    let app = with_predictor_routes(service, session)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        catalog_size,
        imported,
        "college predictor service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
