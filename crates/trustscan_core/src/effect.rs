use crate::{SecurityToken, VerificationRequest, VerifyError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadSecurityToken,
    Verify {
        request: VerificationRequest,
        token: SecurityToken,
    },
    Notify(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Fatal,
    Error,
}

/// Blocking user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

impl Notice {
    pub fn for_error(err: &VerifyError) -> Self {
        if err.is_fatal() {
            Self {
                severity: NoticeSeverity::Fatal,
                message: err.to_string(),
            }
        } else {
            Self {
                severity: NoticeSeverity::Error,
                message: format!("Verification failed: {err}"),
            }
        }
    }
}
