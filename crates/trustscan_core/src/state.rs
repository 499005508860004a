use std::collections::BTreeMap;

use crate::view_model::{
    DashboardView, HistoryRowView, HistoryView, MetricView, ResultPanelView, SubmitControlView,
};
use crate::{
    HistoryEntry, HistoryList, Metric, SecurityToken, Tier, VerificationRequest,
    VerificationResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
}

/// Where the anti-forgery token stands; a submit only fails once loading has finished empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenState {
    #[default]
    Missing,
    Loading,
    Present(SecurityToken),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyStatus {
    Trusted,
    PotentialScam,
}

impl SafetyStatus {
    pub fn from_is_safe(is_safe: bool) -> Self {
        if is_safe {
            Self::Trusted
        } else {
            Self::PotentialScam
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Trusted => "Trusted Platform",
            Self::PotentialScam => "Potential Scam",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricReading {
    pub text: String,
    pub tier: Tier,
}

/// Result fields keep their last written values while hidden.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ResultPanel {
    visible: bool,
    url: Option<String>,
    trust_score: Option<String>,
    metrics: BTreeMap<Metric, MetricReading>,
    status: Option<SafetyStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    input: String,
    token: TokenState,
    phase: SubmitPhase,
    /// Request accepted while the token was still loading.
    awaiting_token: Option<VerificationRequest>,
    result: ResultPanel,
    history: HistoryList,
    dirty: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn token_state(&self) -> &TokenState {
        &self.token
    }

    pub fn security_token(&self) -> Option<&SecurityToken> {
        match &self.token {
            TokenState::Present(token) => Some(token),
            TokenState::Missing | TokenState::Loading => None,
        }
    }

    /// True while a submitted request waits for the token load to finish.
    pub fn is_awaiting_token(&self) -> bool {
        self.awaiting_token.is_some()
    }

    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    pub fn view(&self) -> DashboardView {
        let pending = self.phase == SubmitPhase::Pending;
        DashboardView {
            input: self.input.clone(),
            submit: SubmitControlView {
                enabled: !pending,
                label_visible: !pending,
                loader_visible: pending,
            },
            result: ResultPanelView {
                visible: self.result.visible,
                url: self.result.url.clone(),
                trust_score: self.result.trust_score.clone(),
                metrics: self
                    .result
                    .metrics
                    .iter()
                    .map(|(metric, reading)| MetricView {
                        metric: *metric,
                        text: reading.text.clone(),
                        tier: reading.tier,
                    })
                    .collect(),
                status: self.result.status,
            },
            history: HistoryView {
                placeholder: self.history.has_placeholder(),
                rows: self
                    .history
                    .entries()
                    .map(|entry| HistoryRowView {
                        url: entry.url.clone(),
                        is_safe: entry.is_safe,
                    })
                    .collect(),
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_token_load(&mut self) {
        self.token = TokenState::Loading;
    }

    /// Records the load outcome and hands back any request held for it.
    pub(crate) fn set_security_token(
        &mut self,
        token: Option<SecurityToken>,
    ) -> Option<VerificationRequest> {
        self.token = match token {
            Some(token) => TokenState::Present(token),
            None => TokenState::Missing,
        };
        self.awaiting_token.take()
    }

    pub(crate) fn hold_for_token(&mut self, request: VerificationRequest) {
        self.awaiting_token = Some(request);
    }

    /// Enters the loading state and builds the request from the raw input.
    pub(crate) fn begin_submission(&mut self) -> VerificationRequest {
        self.phase = SubmitPhase::Pending;
        self.result.visible = false;
        self.dirty = true;
        VerificationRequest {
            url: self.input.clone(),
        }
    }

    pub(crate) fn apply_result(&mut self, result: &VerificationResult) {
        let panel = &mut self.result;
        panel.visible = true;
        panel.url = Some(result.url.clone());
        panel.trust_score = Some(result.trust_score.to_string());
        if let Some(breakdown) = &result.breakdown {
            for metric in Metric::ALL {
                let score = breakdown.score(metric);
                panel.metrics.insert(
                    metric,
                    MetricReading {
                        text: format!("{score}%"),
                        tier: metric.classify(score),
                    },
                );
            }
        }
        panel.status = Some(SafetyStatus::from_is_safe(result.is_safe));

        self.history.prepend(HistoryEntry {
            url: result.url.clone(),
            is_safe: result.is_safe,
        });
        self.dirty = true;
    }

    pub(crate) fn finish_submission(&mut self) {
        self.phase = SubmitPhase::Idle;
        self.dirty = true;
    }
}
