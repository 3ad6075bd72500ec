use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::registry::CredentialRegistry;
use super::service::{LookupOutcome, VerificationService, VerificationServiceError};

const NOT_FOUND_MESSAGE: &str = "The certificate number entered could not be found in our records. \
     Please check the ID and try again.";

/// Router builder exposing the credential verification endpoints.
pub fn verification_router<R>(service: Arc<VerificationService<R>>) -> Router
where
    R: CredentialRegistry + 'static,
{
    Router::new()
        .route("/api/v1/credentials/lookups", post(lookup_handler::<R>))
        .route(
            "/api/v1/credentials/:reference",
            get(reference_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupRequest {
    pub(crate) identifier: String,
}

pub(crate) async fn lookup_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    axum::Json(request): axum::Json<LookupRequest>,
) -> Response
where
    R: CredentialRegistry + 'static,
{
    respond(service.lookup(&request.identifier))
}

pub(crate) async fn reference_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(reference): Path<String>,
) -> Response
where
    R: CredentialRegistry + 'static,
{
    respond(service.lookup(&reference))
}

fn respond(result: Result<LookupOutcome, VerificationServiceError>) -> Response {
    match result {
        Ok(LookupOutcome::Match(view)) => (StatusCode::OK, axum::Json(view)).into_response(),
        Ok(LookupOutcome::NoMatch) => {
            let payload = json!({
                "status": "not_found",
                "message": NOT_FOUND_MESSAGE,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err @ VerificationServiceError::EmptyIdentifier) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(VerificationServiceError::Registry(err)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
