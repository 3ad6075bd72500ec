use super::domain::CredentialRecord;
use super::registry::CredentialRegistry;

/// View state for the interactive verify flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupQueryState {
    #[default]
    Idle,
    Pending,
    Resolved(CredentialRecord),
    NotFound,
    /// Registry transport failure, surfaced separately from a genuine miss.
    Unavailable(String),
}

impl LookupQueryState {
    pub const fn label(&self) -> &'static str {
        match self {
            LookupQueryState::Idle => "idle",
            LookupQueryState::Pending => "pending",
            LookupQueryState::Resolved(_) => "resolved",
            LookupQueryState::NotFound => "not_found",
            LookupQueryState::Unavailable(_) => "unavailable",
        }
    }
}

/// One visitor's lookup session. Owns its state exclusively; every transition
/// happens on a discrete user event or the completion of the single in-flight
/// lookup.
#[derive(Debug, Default)]
pub struct VerificationSession {
    state: LookupQueryState,
}

impl VerificationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LookupQueryState {
        &self.state
    }

    /// Submit a certificate reference for verification.
    ///
    /// Blank input causes no transition, and a submit is ignored while a prior
    /// query is still pending. Otherwise the session passes through `Pending`
    /// and settles on exactly one of `Resolved`, `NotFound`, or `Unavailable`.
    ///
    /// Lookups currently settle before this method returns, so callers never
    /// observe `Pending` from outside. The pending guard is not dead code: it
    /// keeps the single-in-flight contract intact for a registry client that
    /// suspends mid-query, and must survive any move to an async registry.
    pub fn submit_query<R>(&mut self, raw: &str, registry: &R) -> &LookupQueryState
    where
        R: CredentialRegistry,
    {
        if matches!(self.state, LookupQueryState::Pending) {
            return &self.state;
        }

        let reference = CredentialRecord::normalize_reference(raw);
        if reference.is_empty() {
            return &self.state;
        }

        self.state = LookupQueryState::Pending;
        self.state = match registry.find(&reference) {
            Ok(Some(record)) => LookupQueryState::Resolved(record),
            Ok(None) => LookupQueryState::NotFound,
            Err(err) => {
                tracing::warn!(%reference, error = %err, "credential lookup unavailable");
                LookupQueryState::Unavailable(err.to_string())
            }
        };
        &self.state
    }

    /// Explicit "try again" action returning the flow to its starting state.
    pub fn reset(&mut self) {
        self.state = LookupQueryState::Idle;
    }
}
