use super::domain::CredentialRecord;

/// Lookup collaborator backed by the institute credential registry.
///
/// The portal only ever asks for exact matches on a normalized reference. A
/// production deployment points this at the registry service; tests and the
/// demo CLI use seeded in-memory implementations.
pub trait CredentialRegistry: Send + Sync {
    fn find(&self, reference: &str) -> Result<Option<CredentialRecord>, RegistryError>;
}

/// Transport-level failure talking to the registry. Deliberately separate from
/// the not-found case: an unreachable registry is not evidence a credential
/// does not exist.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("credential registry unreachable: {0}")]
    Unreachable(String),
}
