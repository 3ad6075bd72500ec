use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCredentialRegistry, RecordingRegistrationSink};
use crate::routes::with_portal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ivtc_campus::config::AppConfig;
use ivtc_campus::error::AppError;
use ivtc_campus::telemetry;
use ivtc_campus::workflows::registration::{IntakePolicy, RegistrationService};
use ivtc_campus::workflows::verification::VerificationService;
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

    let registry = Arc::new(InMemoryCredentialRegistry::seeded());
    let verification = Arc::new(VerificationService::new(registry));

    let sink = Arc::new(RecordingRegistrationSink::default());
    let policy = IntakePolicy::new(config.intake.require_exam_details);
    let registration = Arc::new(RegistrationService::new(sink, policy));

    let app = with_portal_routes(verification, registration)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "campus portal backend ready");

    axum::serve(listener, app).await?;
    Ok(())
}
