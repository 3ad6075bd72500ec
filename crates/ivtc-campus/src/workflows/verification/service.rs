use std::sync::Arc;

use super::domain::{CredentialRecord, CredentialView};
use super::registry::{CredentialRegistry, RegistryError};

/// Stateless lookup facade used by the HTTP layer. The interactive session
/// state machine lives in [`super::session`]; each HTTP request is a complete
/// submit-and-settle cycle on its own.
pub struct VerificationService<R> {
    registry: Arc<R>,
}

impl<R> VerificationService<R>
where
    R: CredentialRegistry + 'static,
{
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Resolve a raw identifier to a credential view, or report that no record
    /// matches. Empty identifiers are rejected before the registry is asked.
    pub fn lookup(&self, raw_identifier: &str) -> Result<LookupOutcome, VerificationServiceError> {
        let reference = CredentialRecord::normalize_reference(raw_identifier);
        if reference.is_empty() {
            return Err(VerificationServiceError::EmptyIdentifier);
        }

        match self.registry.find(&reference)? {
            Some(record) => {
                tracing::info!(%reference, "credential resolved");
                Ok(LookupOutcome::Match(record.view()))
            }
            None => {
                tracing::info!(%reference, "credential not found");
                Ok(LookupOutcome::NoMatch)
            }
        }
    }
}

/// Result of a single lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Match(CredentialView),
    NoMatch,
}

/// Error raised by the verification service.
#[derive(Debug, thiserror::Error)]
pub enum VerificationServiceError {
    #[error("certificate identifier must not be empty")]
    EmptyIdentifier,
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
