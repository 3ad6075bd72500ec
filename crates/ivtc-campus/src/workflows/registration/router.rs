use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{RegistrationDraft, RegistrationPathway};
use super::service::{RegistrationService, RegistrationServiceError};
use super::sink::RegistrationSink;

/// Router builder exposing the registration intake endpoints.
pub fn registration_router<S>(service: Arc<RegistrationService<S>>) -> Router
where
    S: RegistrationSink + 'static,
{
    Router::new()
        .route("/api/v1/registrations", post(submit_handler::<S>))
        .route("/api/v1/registrations/pathways", get(pathways_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
    axum::Json(draft): axum::Json<RegistrationDraft>,
) -> Response
where
    S: RegistrationSink + 'static,
{
    match service.submit(&draft) {
        Ok(receipt) => (StatusCode::ACCEPTED, axum::Json(receipt)).into_response(),
        Err(RegistrationServiceError::Incomplete(err)) => {
            let payload = json!({
                "error": err.to_string(),
                "missing_fields": err.field_names(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Catalog entry describing one pathway to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct PathwayView {
    pub id: RegistrationPathway,
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub programs: &'static [&'static str],
    pub supplemental_fields: Vec<&'static str>,
}

impl PathwayView {
    pub fn catalog() -> Vec<PathwayView> {
        RegistrationPathway::ALL
            .into_iter()
            .map(|pathway| PathwayView {
                id: pathway,
                title: pathway.title(),
                tags: pathway.tags(),
                description: pathway.description(),
                programs: pathway.programs(),
                supplemental_fields: pathway
                    .supplemental_fields()
                    .iter()
                    .map(|field| field.name())
                    .collect(),
            })
            .collect()
    }
}

pub(crate) async fn pathways_handler() -> axum::Json<Vec<PathwayView>> {
    axum::Json(PathwayView::catalog())
}
