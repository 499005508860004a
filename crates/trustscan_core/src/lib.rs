//! Trustscan core: pure dashboard state machine and view-model helpers.
mod effect;
mod error;
mod history;
mod msg;
mod result;
mod state;
mod tier;
mod update;
mod view_model;

pub use effect::{Effect, Notice, NoticeSeverity};
pub use error::VerifyError;
pub use history::{HistoryEntry, HistoryList, EMPTY_HISTORY_TEXT};
pub use msg::Msg;
pub use result::{Breakdown, SecurityToken, VerificationRequest, VerificationResult};
pub use state::{DashboardState, MetricReading, SafetyStatus, SubmitPhase, TokenState};
pub use tier::{Metric, Polarity, Tier};
pub use update::update;
pub use view_model::{
    DashboardView, HistoryRowView, HistoryView, MetricView, ResultPanelView, SubmitControlView,
};
