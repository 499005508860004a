//! Trustscan engine: verification transport and effect execution.
mod decode;
mod engine;
mod token;
mod types;
mod verify;

pub use decode::decode_verification;
pub use engine::{EngineEvents, EngineHandle};
pub use token::{extract_security_token, CSRF_FIELD_NAME};
pub use types::{EngineError, EngineEvent};
pub use verify::{ReqwestVerifier, Verifier, VerifierSettings};
