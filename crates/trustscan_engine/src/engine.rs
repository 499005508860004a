use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use trustscan_core::{SecurityToken, VerificationRequest, VerificationResult, VerifyError};
use trustscan_logging::{scan_error, scan_info, scan_warn};

use crate::{EngineError, EngineEvent, ReqwestVerifier, Verifier, VerifierSettings};

enum EngineCommand {
    LoadSecurityToken,
    Verify {
        request: VerificationRequest,
        token: SecurityToken,
    },
}

/// Command side of the background engine.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Event side of the background engine.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: VerifierSettings) -> Result<(Self, EngineEvents), EngineError> {
        let verifier = ReqwestVerifier::new(settings)?;
        Ok(Self::with_verifier(Arc::new(verifier)))
    }

    /// Spawn the engine thread and its tokio runtime around `verifier`.
    pub fn with_verifier(verifier: Arc<dyn Verifier>) -> (Self, EngineEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    scan_error!("Failed to start engine runtime: {}", err);
                    reject_commands(cmd_rx, event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let verifier = verifier.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(verifier.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, EngineEvents { event_rx })
    }

    pub fn load_security_token(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadSecurityToken);
    }

    pub fn verify(&self, request: VerificationRequest, token: SecurityToken) {
        let _ = self.cmd_tx.send(EngineCommand::Verify { request, token });
    }
}

impl EngineEvents {
    /// Blocks until the next event; `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    verifier: &dyn Verifier,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadSecurityToken => {
            let token = match verifier.load_security_token().await {
                Ok(Some(token)) => {
                    scan_info!("Security token loaded from dashboard page");
                    Some(token)
                }
                Ok(None) => {
                    scan_warn!("Dashboard page carries no security token");
                    None
                }
                Err(err) => {
                    scan_warn!("Failed to load security token: {}", err);
                    None
                }
            };
            let _ = event_tx.send(EngineEvent::SecurityTokenLoaded(token));
        }
        EngineCommand::Verify { request, token } => {
            let guard = CompletionGuard::new(event_tx);
            let result = verifier.verify(&request, &token).await;
            guard.complete(result);
        }
    }
}

fn reject_commands(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    while let Ok(command) = cmd_rx.recv() {
        let event = match command {
            EngineCommand::LoadSecurityToken => EngineEvent::SecurityTokenLoaded(None),
            EngineCommand::Verify { .. } => EngineEvent::VerificationFinished(Err(
                VerifyError::network(format!("engine unavailable: {reason}")),
            )),
        };
        let _ = event_tx.send(event);
    }
}

/// Guarantees exactly one `VerificationFinished` per verify command, even when
/// the task unwinds or is dropped by the runtime before completing.
struct CompletionGuard {
    event_tx: Option<mpsc::Sender<EngineEvent>>,
}

impl CompletionGuard {
    fn new(event_tx: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            event_tx: Some(event_tx),
        }
    }

    fn complete(mut self, result: Result<VerificationResult, VerifyError>) {
        if let Some(tx) = self.event_tx.take() {
            let _ = tx.send(EngineEvent::VerificationFinished(result));
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.event_tx.take() {
            scan_warn!("Verification ended without a result");
            let _ = tx.send(EngineEvent::VerificationFinished(Err(VerifyError::network(
                "verification aborted before completion",
            ))));
        }
    }
}
