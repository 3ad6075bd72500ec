//! Integration specifications for the registration intake workflow.
//!
//! Scenarios cover pathway switching, validation gating, the sink handoff
//! boundary, and the HTTP surface, all through the public facade.

mod common {
    use std::sync::{Arc, Mutex};

    use ivtc_campus::workflows::registration::{
        IntakePolicy, RegistrationDraft, RegistrationField, RegistrationPathway,
        RegistrationRecord, RegistrationService, RegistrationSink, SinkError,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemorySink {
        records: Arc<Mutex<Vec<RegistrationRecord>>>,
    }

    impl MemorySink {
        pub(super) fn records(&self) -> Vec<RegistrationRecord> {
            self.records.lock().expect("lock").clone()
        }
    }

    impl RegistrationSink for MemorySink {
        fn deliver(&self, record: RegistrationRecord) -> Result<(), SinkError> {
            self.records.lock().expect("lock").push(record);
            Ok(())
        }
    }

    pub(super) struct RejectingSink;

    impl RegistrationSink for RejectingSink {
        fn deliver(&self, _record: RegistrationRecord) -> Result<(), SinkError> {
            Err(SinkError::Unavailable("queue offline".to_string()))
        }
    }

    pub(super) fn complete_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new(RegistrationPathway::ProfessionalCourse);
        draft.set(RegistrationField::FullName, "Dulaj Nimansha");
        draft.set(RegistrationField::NationalId, "200134501234");
        draft.set(RegistrationField::DateOfBirth, "2004-06-12");
        draft.set(RegistrationField::Gender, "Male");
        draft.set(RegistrationField::Phone, "+94 71 234 5678");
        draft.set(RegistrationField::Email, "dulaj@example.lk");
        draft.set(RegistrationField::AddressLine1, "12 Temple Road");
        draft.set(RegistrationField::City, "Dehiwala");
        draft.set(RegistrationField::District, "Colombo");
        draft.set(RegistrationField::PostalCode, "10350");
        draft.set(RegistrationField::Program, "Cyber Security");
        draft
    }

    pub(super) fn build_service() -> (RegistrationService<MemorySink>, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::default());
        let service = RegistrationService::new(sink.clone(), IntakePolicy::default());
        (service, sink)
    }
}

mod drafting {
    use super::common::*;
    use ivtc_campus::workflows::registration::{RegistrationField, RegistrationPathway};

    #[test]
    fn pathway_switch_clears_program_but_preserves_other_fields() {
        let mut draft = complete_draft();
        draft.select_pathway(RegistrationPathway::ExamPrep);

        assert_eq!(draft.value_of(RegistrationField::Program), None);
        assert_eq!(
            draft.value_of(RegistrationField::Email),
            Some("dulaj@example.lk")
        );
        assert_eq!(
            draft.program_options(),
            RegistrationPathway::ExamPrep.programs()
        );
    }

    #[test]
    fn switching_back_does_not_restore_a_cleared_program() {
        let mut draft = complete_draft();
        draft.select_pathway(RegistrationPathway::Degree);
        draft.select_pathway(RegistrationPathway::ProfessionalCourse);
        assert_eq!(draft.value_of(RegistrationField::Program), None);
    }
}

mod submission {
    use super::common::*;
    use ivtc_campus::workflows::registration::{
        IntakePolicy, RegistrationField, RegistrationService, RegistrationServiceError,
    };
    use std::sync::Arc;

    #[test]
    fn accepted_draft_is_delivered_with_a_receipt() {
        let (service, sink) = build_service();
        let receipt = service
            .submit(&complete_draft())
            .expect("complete draft is accepted");

        assert!(receipt.registration_id.0.starts_with("reg-"));
        assert_eq!(receipt.pathway, "Professional Courses");
        assert_eq!(receipt.program, "Cyber Security");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].registration_id, receipt.registration_id);
        assert_eq!(records[0].registration.full_name, "Dulaj Nimansha");
    }

    #[test]
    fn incomplete_draft_never_reaches_the_sink() {
        let (service, sink) = build_service();
        let mut draft = complete_draft();
        draft.clear(RegistrationField::Phone);

        match service.submit(&draft) {
            Err(RegistrationServiceError::Incomplete(err)) => {
                assert!(err.field_names().contains(&"phone"));
            }
            other => panic!("expected incomplete draft error, got {other:?}"),
        }
        assert!(sink.records().is_empty());
    }

    #[test]
    fn sink_failure_is_reported_as_such() {
        let service = RegistrationService::new(Arc::new(RejectingSink), IntakePolicy::default());
        match service.submit(&complete_draft()) {
            Err(RegistrationServiceError::Sink(err)) => {
                assert!(err.to_string().contains("unavailable"));
            }
            other => panic!("expected sink error, got {other:?}"),
        }
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use ivtc_campus::workflows::registration::{registration_router, RegistrationField};
    use tower::ServiceExt;

    fn build_router() -> (axum::Router, Arc<MemorySink>) {
        let (service, sink) = build_service();
        (registration_router(Arc::new(service)), sink)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn post_registration_returns_receipt() {
        let (router, sink) = build_router();
        let draft = complete_draft();

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/registrations")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&draft).expect("serialize")))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let payload = json_body(response).await;
        assert!(payload.get("registration_id").is_some());
        assert_eq!(
            payload.get("program").and_then(Value::as_str),
            Some("Cyber Security")
        );
        assert_eq!(sink.records().len(), 1);
    }

    #[tokio::test]
    async fn incomplete_registration_names_the_missing_fields() {
        let (router, sink) = build_router();
        let mut draft = complete_draft();
        draft.clear(RegistrationField::Email);
        draft.clear(RegistrationField::District);

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/registrations")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&draft).expect("serialize")))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let payload = json_body(response).await;
        let missing: Vec<&str> = payload
            .get("missing_fields")
            .and_then(Value::as_array)
            .expect("missing_fields array")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(missing.contains(&"email"));
        assert!(missing.contains(&"district"));
        assert!(sink.records().is_empty());
    }

    #[tokio::test]
    async fn pathway_catalog_lists_program_options() {
        let (router, _sink) = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/registrations/pathways")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        let entries = payload.as_array().expect("catalog array");
        assert_eq!(entries.len(), 4);

        let exam_prep = entries
            .iter()
            .find(|entry| entry.get("id") == Some(&Value::String("exam_prep".to_string())))
            .expect("exam prep entry");
        assert_eq!(
            exam_prep.get("title").and_then(Value::as_str),
            Some("A/L ICT")
        );
        let supplemental: Vec<&str> = exam_prep
            .get("supplemental_fields")
            .and_then(Value::as_array)
            .expect("supplemental fields")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(supplemental, vec!["school", "exam_year"]);
    }
}
