use crate::cli::ServeArgs;
use crate::infra::{load_repository, AppState};
use crate::routes::with_plant_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use botanique::config::AppConfig;
use botanique::error::AppError;
use botanique::recommendations::{RecommendationService, SuitabilityEngine};
use botanique::telemetry;
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

    let repository = Arc::new(load_repository(
        config.recommendations.catalog_path.as_deref(),
    )?);
    let catalog_size = repository.len();
    let recommendation_service = Arc::new(RecommendationService::with_engine(
        repository,
        SuitabilityEngine::default(),
        config.recommendations.limit,
    ));

    let app = with_plant_routes(recommendation_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        catalog_size,
        limit = config.recommendations.limit,
        "plant recommendation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
