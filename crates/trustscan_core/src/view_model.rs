use crate::{Metric, SafetyStatus, Tier};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardView {
    pub input: String,
    pub submit: SubmitControlView,
    pub result: ResultPanelView,
    pub history: HistoryView,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControlView {
    pub enabled: bool,
    pub label_visible: bool,
    pub loader_visible: bool,
}

impl Default for SubmitControlView {
    fn default() -> Self {
        Self {
            enabled: true,
            label_visible: true,
            loader_visible: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPanelView {
    pub visible: bool,
    pub url: Option<String>,
    pub trust_score: Option<String>,
    /// Ordered as [`Metric::ALL`]; empty until a breakdown has been rendered.
    pub metrics: Vec<MetricView>,
    pub status: Option<SafetyStatus>,
}

impl ResultPanelView {
    pub fn metric(&self, metric: Metric) -> Option<&MetricView> {
        self.metrics.iter().find(|view| view.metric == metric)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricView {
    pub metric: Metric,
    pub text: String,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryView {
    pub placeholder: bool,
    pub rows: Vec<HistoryRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub url: String,
    pub is_safe: bool,
}

impl HistoryRowView {
    pub fn badge(&self) -> &'static str {
        if self.is_safe {
            "Trusted"
        } else {
            "Suspicious"
        }
    }
}
