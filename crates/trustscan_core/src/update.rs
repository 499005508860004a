use crate::{DashboardState, Effect, Msg, Notice, SubmitPhase, TokenState, VerifyError};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DashboardState, msg: Msg) -> (DashboardState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => match state.token_state() {
            TokenState::Missing => {
                state.begin_token_load();
                vec![Effect::LoadSecurityToken]
            }
            TokenState::Loading | TokenState::Present(_) => Vec::new(),
        },
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SecurityTokenLoaded(token) => {
            let held = state.set_security_token(token);
            match (held, state.security_token().cloned()) {
                (Some(request), Some(token)) => vec![Effect::Verify { request, token }],
                (Some(_), None) => {
                    state.finish_submission();
                    vec![missing_token_notice()]
                }
                (None, _) => Vec::new(),
            }
        }
        Msg::SubmitClicked => {
            // The disabled submit control is the only re-entrancy guard.
            if state.phase() == SubmitPhase::Pending {
                return (state, Vec::new());
            }
            match state.token_state().clone() {
                TokenState::Missing => return (state, vec![missing_token_notice()]),
                TokenState::Loading => {
                    let request = state.begin_submission();
                    state.hold_for_token(request);
                    Vec::new()
                }
                TokenState::Present(token) => {
                    let request = state.begin_submission();
                    vec![Effect::Verify { request, token }]
                }
            }
        }
        Msg::VerificationFinished(outcome) => {
            if state.phase() != SubmitPhase::Pending || state.is_awaiting_token() {
                return (state, Vec::new());
            }
            let effects = match outcome {
                Ok(result) => {
                    state.apply_result(&result);
                    Vec::new()
                }
                Err(err) => vec![Effect::Notify(Notice::for_error(&err))],
            };
            // Idle is restored on every completion branch.
            state.finish_submission();
            effects
        }
    };

    (state, effects)
}

fn missing_token_notice() -> Effect {
    Effect::Notify(Notice::for_error(&VerifyError::MissingSecurityToken))
}
