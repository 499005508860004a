use serde::{Deserialize, Serialize};

use crate::Metric;

/// Body of one `POST /verify/` submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationRequest {
    pub url: String,
}

/// Decoded server answer for a verification request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub url: String,
    pub trust_score: f64,
    pub is_safe: bool,
    #[serde(default)]
    pub breakdown: Option<Breakdown>,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub legitimacy: f64,
    pub brand: f64,
    pub scam: f64,
    pub reviews: f64,
}

impl Breakdown {
    pub fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Legitimacy => self.legitimacy,
            Metric::Brand => self.brand,
            Metric::Scam => self.scam,
            Metric::Reviews => self.reviews,
        }
    }
}

/// Anti-forgery token sent alongside every verification request.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SecurityToken(String);

impl SecurityToken {
    /// Returns `None` for blank values so an empty form field counts as missing.
    /// Non-blank values are kept exactly as the page rendered them.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecurityToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecurityToken(..)")
    }
}
