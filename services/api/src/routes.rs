use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use ivtc_campus::workflows::registration::{
    registration_router, RegistrationService, RegistrationSink,
};
use ivtc_campus::workflows::verification::{
    verification_router, CredentialRegistry, VerificationService,
};

pub(crate) fn with_portal_routes<R, S>(
    verification: Arc<VerificationService<R>>,
    registration: Arc<RegistrationService<S>>,
) -> axum::Router
where
    R: CredentialRegistry + 'static,
    S: RegistrationSink + 'static,
{
    verification_router(verification)
        .merge(registration_router(registration))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryCredentialRegistry, RecordingRegistrationSink};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use ivtc_campus::workflows::registration::IntakePolicy;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn build_app(ready: bool) -> (axum::Router, Arc<AtomicBool>) {
        let readiness = Arc::new(AtomicBool::new(ready));
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState {
            readiness: readiness.clone(),
            metrics: Arc::new(handle),
        };

        let verification = Arc::new(VerificationService::new(Arc::new(
            InMemoryCredentialRegistry::seeded(),
        )));
        let registration = Arc::new(RegistrationService::new(
            Arc::new(RecordingRegistrationSink::default()),
            IntakePolicy::default(),
        ));

        let app = with_portal_routes(verification, registration).layer(Extension(state));
        (app, readiness)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let (app, _readiness) = build_app(true);
        let response = app.oneshot(get("/health")).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024).await.expect("body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_follows_the_startup_flag() {
        let (app, readiness) = build_app(false);
        let response = app
            .clone()
            .oneshot(get("/ready"))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        readiness.store(true, Ordering::Release);
        let response = app.oneshot(get("/ready")).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn workflow_routes_are_merged_into_the_app() {
        let (app, _readiness) = build_app(true);
        let response = app
            .oneshot(get("/api/v1/registrations/pathways"))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
