use trustscan_core::Metric;

use super::ControlId;

pub const FORM: ControlId = ControlId::new(1001, "verifyForm");
pub const URL_INPUT: ControlId = ControlId::new(1002, "urlInput");
pub const SUBMIT_BUTTON: ControlId = ControlId::new(1003, "scanBtn");
pub const BUTTON_LABEL: ControlId = ControlId::new(1004, "btnText");
pub const LOADER: ControlId = ControlId::new(1005, "loader");
pub const RESULT_BOX: ControlId = ControlId::new(2001, "resultBox");
pub const RESULT_URL: ControlId = ControlId::new(2002, "resultUrl");
pub const TRUST_SCORE: ControlId = ControlId::new(2003, "trustScore");
pub const LEGITIMACY_SCORE: ControlId = ControlId::new(2101, "legitimacyScore");
pub const BRAND_SCORE: ControlId = ControlId::new(2102, "brandScore");
pub const SCAM_SCORE: ControlId = ControlId::new(2103, "scamScore");
pub const REVIEW_SCORE: ControlId = ControlId::new(2104, "reviewScore");
pub const SAFETY_STATUS: ControlId = ControlId::new(2201, "safetyStatus");
pub const HISTORY_LIST: ControlId = ControlId::new(3001, "historyList");

/// Controls without which the verification feature cannot run.
pub const REQUIRED: [ControlId; 4] = [FORM, URL_INPUT, SUBMIT_BUTTON, HISTORY_LIST];

pub const ALL: [ControlId; 14] = [
    FORM,
    URL_INPUT,
    SUBMIT_BUTTON,
    BUTTON_LABEL,
    LOADER,
    RESULT_BOX,
    RESULT_URL,
    TRUST_SCORE,
    LEGITIMACY_SCORE,
    BRAND_SCORE,
    SCAM_SCORE,
    REVIEW_SCORE,
    SAFETY_STATUS,
    HISTORY_LIST,
];

pub fn metric_control(metric: Metric) -> ControlId {
    match metric {
        Metric::Legitimacy => LEGITIMACY_SCORE,
        Metric::Brand => BRAND_SCORE,
        Metric::Scam => SCAM_SCORE,
        Metric::Reviews => REVIEW_SCORE,
    }
}
