use thiserror::Error;

/// Every way a verification attempt can end without a rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The hosting page did not provide an anti-forgery token.
    #[error("security error: CSRF token missing, please refresh the page")]
    MissingSecurityToken,
    /// Network failure or a non-success HTTP status.
    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
    /// The response body could not be decoded into a verification result.
    #[error("malformed verification response: {message}")]
    MalformedResponse { message: String },
}

impl VerifyError {
    pub fn http_status(status: u16, status_text: impl AsRef<str>) -> Self {
        Self::Transport {
            status: Some(status),
            message: format!("network response was not ok: {}", status_text.as_ref()),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Fatal errors block submission entirely instead of failing one attempt.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingSecurityToken)
    }
}
