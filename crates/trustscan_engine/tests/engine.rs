use std::sync::Arc;
use std::time::Duration;

use trustscan_core::{SecurityToken, VerificationRequest, VerificationResult, VerifyError};
use trustscan_engine::{EngineEvent, EngineHandle, Verifier};

const WAIT: Duration = Duration::from_secs(5);

enum Behaviour {
    Succeed,
    Fail,
    Panic,
}

struct FakeVerifier {
    behaviour: Behaviour,
}

#[async_trait::async_trait]
impl Verifier for FakeVerifier {
    async fn load_security_token(&self) -> Result<Option<SecurityToken>, VerifyError> {
        match self.behaviour {
            Behaviour::Succeed => Ok(SecurityToken::new("fake-token")),
            Behaviour::Fail | Behaviour::Panic => Err(VerifyError::http_status(403, "Forbidden")),
        }
    }

    async fn verify(
        &self,
        request: &VerificationRequest,
        _token: &SecurityToken,
    ) -> Result<VerificationResult, VerifyError> {
        match self.behaviour {
            Behaviour::Succeed => Ok(VerificationResult {
                url: request.url.clone(),
                trust_score: 88.0,
                is_safe: true,
                breakdown: None,
                risk_score: None,
                message: None,
            }),
            Behaviour::Fail => Err(VerifyError::http_status(502, "Bad Gateway")),
            Behaviour::Panic => panic!("verifier blew up"),
        }
    }
}

fn spawn(behaviour: Behaviour) -> (EngineHandle, trustscan_engine::EngineEvents) {
    trustscan_logging::initialize_for_tests();
    EngineHandle::with_verifier(Arc::new(FakeVerifier { behaviour }))
}

fn submit(engine: &EngineHandle) {
    engine.verify(
        VerificationRequest {
            url: "a.com".to_string(),
        },
        SecurityToken::new("fake-token").expect("token"),
    );
}

#[test]
fn verify_reports_success() {
    let (engine, events) = spawn(Behaviour::Succeed);
    submit(&engine);

    match events.recv_timeout(WAIT) {
        Some(EngineEvent::VerificationFinished(Ok(result))) => {
            assert_eq!(result.url, "a.com");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn verify_reports_failure() {
    let (engine, events) = spawn(Behaviour::Fail);
    submit(&engine);

    assert_eq!(
        events.recv_timeout(WAIT),
        Some(EngineEvent::VerificationFinished(Err(
            VerifyError::http_status(502, "Bad Gateway")
        )))
    );
}

#[test]
fn panicking_verifier_still_reports_completion() {
    let (engine, events) = spawn(Behaviour::Panic);
    submit(&engine);

    match events.recv_timeout(WAIT) {
        Some(EngineEvent::VerificationFinished(Err(VerifyError::Transport { status, .. }))) => {
            assert_eq!(status, None);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(events.recv_timeout(Duration::from_millis(100)).is_none());
}

#[test]
fn token_load_failure_reports_none() {
    let (engine, events) = spawn(Behaviour::Fail);
    engine.load_security_token();

    assert_eq!(
        events.recv_timeout(WAIT),
        Some(EngineEvent::SecurityTokenLoaded(None))
    );
}

#[test]
fn token_load_success_reports_token() {
    let (engine, events) = spawn(Behaviour::Succeed);
    engine.load_security_token();

    assert_eq!(
        events.recv_timeout(WAIT),
        Some(EngineEvent::SecurityTokenLoaded(SecurityToken::new(
            "fake-token"
        )))
    );
}
