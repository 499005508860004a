use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use trustscan_engine::VerifierSettings;

use super::logging::LogDestination;

const CONFIG_FILENAME: &str = "trustscan.ron";
const CONFIG_ENV: &str = "TRUSTSCAN_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub base_url: String,
    pub dashboard_path: String,
    /// Skips reading the token from the dashboard page when set.
    pub csrf_token: Option<String>,
    pub session_cookie: Option<String>,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = VerifierSettings::default();
        Self {
            base_url: settings.base_url,
            dashboard_path: settings.dashboard_path,
            csrf_token: None,
            session_cookie: None,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub(crate) fn verifier_settings(&self) -> VerifierSettings {
        VerifierSettings {
            base_url: self.base_url.clone(),
            dashboard_path: self.dashboard_path.clone(),
            session_cookie: self.session_cookie.clone(),
            ..VerifierSettings::default()
        }
    }
}

pub(crate) fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".").join(CONFIG_FILENAME))
}

/// A missing file yields defaults; an unreadable or invalid one is an error.
pub(crate) fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {:?}", path));
        }
    };

    ron::from_str(&content).with_context(|| format!("failed to parse config {:?}", path))
}
