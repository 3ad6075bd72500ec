//! Student registration intake.
//!
//! A single mutable draft collects identity, contact, and address fields; the
//! selected pathway decides which supplemental fields apply and which program
//! choices are valid. Validation gates the handoff to the external submission
//! collaborator, so no structurally incomplete registration ever leaves the
//! service.

pub mod domain;
pub mod router;
pub mod service;
pub mod sink;
pub mod validation;

pub use domain::{
    RegistrationDraft, RegistrationField, RegistrationPathway, DISTRICTS, EXAM_YEARS,
    GENDER_OPTIONS,
};
pub use router::{registration_router, PathwayView};
pub use service::{RegistrationService, RegistrationServiceError};
pub use sink::{RegistrationId, RegistrationReceipt, RegistrationRecord, RegistrationSink, SinkError};
pub use validation::{IncompleteDraft, IntakePolicy, ValidatedRegistration};
