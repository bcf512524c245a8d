use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionRepository};
use crate::routes::with_profile_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use risk_profiler::config::AppConfig;
use risk_profiler::error::AppError;
use risk_profiler::telemetry;
use risk_profiler::workflows::risk_profile::RiskProfilerService;
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

    let repository = Arc::new(InMemorySessionRepository::default());
    let profiler_service = Arc::new(RiskProfilerService::new(
        repository,
        config.profiler.scoring,
        config.profiler.firm_name.clone(),
    ));

    let app = with_profile_routes(profiler_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        firm = %config.profiler.firm_name,
        experience_statement = config.profiler.scoring.experience_statement(),
        "risk profiler ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
