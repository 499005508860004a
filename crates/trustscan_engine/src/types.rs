use thiserror::Error;
use trustscan_core::{SecurityToken, VerificationResult, VerifyError};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SecurityTokenLoaded(Option<SecurityToken>),
    VerificationFinished(Result<VerificationResult, VerifyError>),
}

/// Failures constructing the engine; per-request failures are [`VerifyError`]s.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}
