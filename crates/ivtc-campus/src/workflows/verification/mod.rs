//! Certificate verification lookup flow.
//!
//! Takes a free-text certificate reference, resolves it against the institute
//! credential registry, and tracks the idle/pending/resolved/not-found view
//! states the verify page renders. Registry outages are kept distinct from a
//! genuine miss so a transport failure is never reported as "no record".

pub mod domain;
pub mod registry;
pub mod router;
pub mod service;
pub mod session;

pub use domain::{CredentialRecord, CredentialView, GradeStanding, VERIFICATION_BASE_URL};
pub use registry::{CredentialRegistry, RegistryError};
pub use router::verification_router;
pub use service::{LookupOutcome, VerificationService, VerificationServiceError};
pub use session::{LookupQueryState, VerificationSession};
