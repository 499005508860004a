use crate::{SecurityToken, VerificationResult, VerifyError};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Dashboard is up; fetch a security token unless one is already present.
    Started,
    /// User edited the URL input.
    InputChanged(String),
    /// Outcome of reading the anti-forgery token from the hosting page.
    SecurityTokenLoaded(Option<SecurityToken>),
    /// User submitted the current URL input for verification.
    SubmitClicked,
    /// Engine completion for the in-flight verification.
    VerificationFinished(Result<VerificationResult, VerifyError>),
}
