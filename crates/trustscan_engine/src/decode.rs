use trustscan_core::{VerificationResult, VerifyError};
use trustscan_logging::scan_warn;

/// Decode a success-status body; anything that is not a well-formed result fails closed.
pub fn decode_verification(body: &[u8]) -> Result<VerificationResult, VerifyError> {
    serde_json::from_slice(body).map_err(|err| {
        scan_warn!(
            "Rejecting verification response body_len={}: {}",
            body.len(),
            err
        );
        VerifyError::malformed(err.to_string())
    })
}
