use chrono::NaiveDate;
use ivtc_campus::workflows::registration::{
    RegistrationRecord, RegistrationSink, SinkError,
};
use ivtc_campus::workflows::verification::{
    CredentialRecord, CredentialRegistry, GradeStanding, RegistryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Registry backed by a static table, standing in for the institute
/// credential registry until the real service is wired up.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCredentialRegistry {
    records: HashMap<String, CredentialRecord>,
}

impl InMemoryCredentialRegistry {
    pub(crate) fn seeded() -> Self {
        let mut registry = Self::default();
        for record in seed_credentials() {
            registry.insert(record);
        }
        registry
    }

    pub(crate) fn insert(&mut self, record: CredentialRecord) {
        self.records
            .insert(CredentialRecord::normalize_reference(&record.reference), record);
    }
}

impl CredentialRegistry for InMemoryCredentialRegistry {
    fn find(&self, reference: &str) -> Result<Option<CredentialRecord>, RegistryError> {
        Ok(self.records.get(reference).cloned())
    }
}

pub(crate) fn seed_credentials() -> Vec<CredentialRecord> {
    vec![
        CredentialRecord {
            reference: "IVTC-2026-X89".to_string(),
            holder_name: "Dulaj Nimansha".to_string(),
            course_title: "CCNA 200-301 Enterprise Networking".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid issue date"),
            standing: GradeStanding::Distinction,
        },
        CredentialRecord {
            reference: "IVTC-2025-K41".to_string(),
            holder_name: "Ishara Weerasinghe".to_string(),
            course_title: "CompTIA Security+ SY0-701".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2025, 8, 2).expect("valid issue date"),
            standing: GradeStanding::Merit,
        },
        CredentialRecord {
            reference: "IVTC-2025-B17".to_string(),
            holder_name: "Nethmi Jayawardena".to_string(),
            course_title: "Diploma in Software Engineering".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2025, 3, 21).expect("valid issue date"),
            standing: GradeStanding::Pass,
        },
    ]
}

/// Sink that records deliveries so the demo and tests can assert the handoff
/// boundary.
#[derive(Default, Clone)]
pub(crate) struct RecordingRegistrationSink {
    deliveries: Arc<Mutex<Vec<RegistrationRecord>>>,
}

impl RegistrationSink for RecordingRegistrationSink {
    fn deliver(&self, record: RegistrationRecord) -> Result<(), SinkError> {
        let mut guard = self.deliveries.lock().expect("sink mutex poisoned");
        guard.push(record);
        Ok(())
    }
}

impl RecordingRegistrationSink {
    pub(crate) fn deliveries(&self) -> Vec<RegistrationRecord> {
        self.deliveries.lock().expect("sink mutex poisoned").clone()
    }
}
