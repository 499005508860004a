use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use trustscan_core::{update, DashboardState, Effect, Msg, SecurityToken, SubmitPhase};
use trustscan_engine::EngineHandle;
use trustscan_logging::{scan_debug, scan_info, scan_warn};

use super::effects::EffectRunner;
use super::ui::{self, apply_all, render::render, Dashboard, TerminalDashboard};
use super::{config, logging};

pub(crate) enum LoopEvent {
    Dispatch(Msg),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = config::config_path();
    let config = config::load_config(&config_path)?;
    logging::initialize(config.log_destination);
    scan_info!(
        "Starting trustscan against {} (config {:?})",
        config.base_url,
        config_path
    );

    let dashboard = TerminalDashboard::new(std::io::stdout());
    ui::validate(&dashboard)?;

    let (engine, events) = EngineHandle::new(config.verifier_settings())?;
    let (loop_tx, loop_rx) = mpsc::channel();
    let effects = EffectRunner::new(engine, events, loop_tx.clone());
    spawn_input_reader(loop_tx);

    let mut controller = Controller::new(dashboard, effects);
    controller.render_all();
    if let Some(token) = config.csrf_token.as_deref() {
        controller.dispatch(Msg::SecurityTokenLoaded(SecurityToken::new(token)));
    }
    controller.dispatch(Msg::Started);

    run_loop(&mut controller, &loop_rx);

    scan_info!("Shutting down");
    Ok(())
}

/// Dispatches until quit is requested and the last submission has finished.
fn run_loop<D: Dashboard>(controller: &mut Controller<D>, loop_rx: &mpsc::Receiver<LoopEvent>) {
    let mut quitting = false;
    while let Ok(event) = loop_rx.recv() {
        match event {
            LoopEvent::Dispatch(msg) => controller.dispatch(msg),
            LoopEvent::Quit => {
                quitting = true;
                if !controller.is_idle() {
                    scan_info!("Quit requested; waiting for the pending verification");
                }
            }
        }
        if quitting && controller.is_idle() {
            break;
        }
    }
}

/// Each stdin line is the raw URL input followed by a submit.
fn spawn_input_reader(loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    scan_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if matches!(line.trim(), ":q" | "quit") {
                break;
            }
            for event in [
                LoopEvent::Dispatch(Msg::InputChanged(line)),
                LoopEvent::Dispatch(Msg::SubmitClicked),
            ] {
                if loop_tx.send(event).is_err() {
                    return;
                }
            }
        }
        let _ = loop_tx.send(LoopEvent::Quit);
    });
}

struct Controller<D: Dashboard> {
    state: DashboardState,
    dashboard: D,
    effects: EffectRunner,
}

impl<D: Dashboard> Controller<D> {
    fn new(dashboard: D, effects: EffectRunner) -> Self {
        Self {
            state: DashboardState::new(),
            dashboard,
            effects,
        }
    }

    fn render_all(&mut self) {
        let view = self.state.view();
        apply_all(&mut self.dashboard, render(&view));
    }

    fn is_idle(&self) -> bool {
        self.state.phase() == SubmitPhase::Idle
    }

    /// Notices are shown before the new state is drawn, and requests are sent
    /// after it, so the loading state is on screen before any request leaves
    /// and a failure notice precedes the idle restore.
    fn dispatch(&mut self, msg: Msg) {
        if matches!(msg, Msg::SubmitClicked) && self.state.phase() == SubmitPhase::Pending {
            scan_debug!("Ignoring submit while a verification is pending");
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        let (notices, effects): (Vec<_>, Vec<_>) = effects
            .into_iter()
            .partition(|effect| matches!(effect, Effect::Notify(_)));
        self.effects.run(notices, &mut self.dashboard);
        if was_dirty {
            self.render_all();
        }
        self.effects.run(effects, &mut self.dashboard);
    }
}
