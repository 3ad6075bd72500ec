use serde::{Deserialize, Serialize};

use super::validation::ValidatedRegistration;

/// Identifier wrapper for accepted registrations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistrationId(pub String);

/// Payload handed to the submission collaborator once validation succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub registration_id: RegistrationId,
    pub registration: ValidatedRegistration,
}

/// Outbound handoff for accepted registrations (e.g., an enrollment queue or
/// e-mail adapter). The intake service only guarantees the record is
/// structurally complete; persistence and notification live behind this trait.
pub trait RegistrationSink: Send + Sync {
    fn deliver(&self, record: RegistrationRecord) -> Result<(), SinkError>;
}

/// Error enumeration for sink failures.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("registration sink unavailable: {0}")]
    Unavailable(String),
}

/// Acknowledgment returned to the presentation layer after a successful
/// handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReceipt {
    pub registration_id: RegistrationId,
    pub pathway: &'static str,
    pub program: String,
}
