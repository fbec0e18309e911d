use crate::cli::ServeArgs;
use crate::infra::{load_constants, AppState, InMemoryReportRepository};
use crate::routes::with_prognosis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fertility_prognosis::config::AppConfig;
use fertility_prognosis::error::AppError;
use fertility_prognosis::prognosis::{PrognosisEngine, PrognosisService};
use fertility_prognosis::telemetry::{self, LogSink};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, LogSink::Stdout)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = PrognosisEngine::new(load_constants(&config)?);
    let repository = Arc::new(InMemoryReportRepository::default());
    let prognosis_service = Arc::new(PrognosisService::new(repository, engine));

    let app = with_prognosis_routes(prognosis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "fertility prognosis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
