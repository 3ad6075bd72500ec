use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::RegistrationDraft;
use super::sink::{
    RegistrationId, RegistrationReceipt, RegistrationRecord, RegistrationSink, SinkError,
};
use super::validation::{IncompleteDraft, IntakePolicy};

static REGISTRATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_registration_id() -> RegistrationId {
    let id = REGISTRATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RegistrationId(format!("reg-{id:06}"))
}

/// Service composing the intake policy and the submission collaborator.
pub struct RegistrationService<S> {
    policy: IntakePolicy,
    sink: Arc<S>,
}

impl<S> RegistrationService<S>
where
    S: RegistrationSink + 'static,
{
    pub fn new(sink: Arc<S>, policy: IntakePolicy) -> Self {
        Self { policy, sink }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Validate a draft and hand the completed registration to the sink.
    /// Validation failure never reaches the sink, so no partial submission is
    /// possible.
    pub fn submit(
        &self,
        draft: &RegistrationDraft,
    ) -> Result<RegistrationReceipt, RegistrationServiceError> {
        let registration = self.policy.validate(draft)?;
        let registration_id = next_registration_id();
        let receipt = RegistrationReceipt {
            registration_id: registration_id.clone(),
            pathway: registration.pathway.title(),
            program: registration.program.clone(),
        };

        self.sink.deliver(RegistrationRecord {
            registration_id,
            registration,
        })?;

        tracing::info!(
            registration_id = %receipt.registration_id.0,
            pathway = receipt.pathway,
            program = %receipt.program,
            "registration accepted"
        );

        Ok(receipt)
    }
}

/// Error raised by the registration service.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationServiceError {
    #[error(transparent)]
    Incomplete(#[from] IncompleteDraft),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
