use std::sync::mpsc;
use std::thread;

use trustscan_core::{Effect, Msg};
use trustscan_engine::{EngineEvent, EngineEvents, EngineHandle};
use trustscan_logging::{scan_info, scan_warn};

use super::app::LoopEvent;
use super::ui::{render::render_notice, Dashboard};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, events: EngineEvents, loop_tx: mpsc::Sender<LoopEvent>) -> Self {
        spawn_event_loop(events, loop_tx);
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, dashboard: &mut dyn Dashboard) {
        for effect in effects {
            match effect {
                Effect::LoadSecurityToken => {
                    scan_info!("Loading security token from dashboard page");
                    self.engine.load_security_token();
                }
                Effect::Verify { request, token } => {
                    scan_info!("Verify url_len={} url={}", request.url.len(), request.url);
                    self.engine.verify(request, token);
                }
                Effect::Notify(notice) => {
                    scan_warn!("Notice {:?}: {}", notice.severity, notice.message);
                    dashboard.apply(render_notice(&notice));
                }
            }
        }
    }
}

fn spawn_event_loop(events: EngineEvents, loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            let msg = match event {
                EngineEvent::SecurityTokenLoaded(token) => Msg::SecurityTokenLoaded(token),
                EngineEvent::VerificationFinished(result) => Msg::VerificationFinished(result),
            };
            if loop_tx.send(LoopEvent::Dispatch(msg)).is_err() {
                break;
            }
        }
    });
}
