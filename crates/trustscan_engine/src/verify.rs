use std::sync::Arc;

use reqwest::cookie::Jar;
use trustscan_core::{SecurityToken, VerificationRequest, VerificationResult, VerifyError};
use trustscan_logging::{scan_debug, scan_info};
use url::Url;

use crate::{decode_verification, extract_security_token, EngineError};

#[derive(Debug, Clone)]
pub struct VerifierSettings {
    pub base_url: String,
    pub verify_path: String,
    pub dashboard_path: String,
    pub csrf_header: String,
    /// Raw `name=value` cookie pre-seeded for authenticated endpoints.
    pub session_cookie: Option<String>,
}

impl Default for VerifierSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            verify_path: "/verify/".to_string(),
            dashboard_path: "/dashboard/".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            session_cookie: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Verifier: Send + Sync {
    /// Read the anti-forgery token from the hosting page.
    async fn load_security_token(&self) -> Result<Option<SecurityToken>, VerifyError>;

    /// Perform exactly one verification attempt.
    async fn verify(
        &self,
        request: &VerificationRequest,
        token: &SecurityToken,
    ) -> Result<VerificationResult, VerifyError>;
}

/// Verifier speaking the `POST /verify/` form contract over one cookie-keeping client.
#[derive(Debug, Clone)]
pub struct ReqwestVerifier {
    settings: VerifierSettings,
    client: reqwest::Client,
    verify_url: Url,
    dashboard_url: Url,
}

impl ReqwestVerifier {
    pub fn new(settings: VerifierSettings) -> Result<Self, EngineError> {
        let base = Url::parse(&settings.base_url)?;
        let verify_url = base.join(&settings.verify_path)?;
        let dashboard_url = base.join(&settings.dashboard_path)?;

        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &settings.session_cookie {
            jar.add_cookie_str(cookie, &base);
        }
        // No timeout: a hung request keeps the dashboard loading.
        let client = reqwest::Client::builder().cookie_provider(jar).build()?;

        Ok(Self {
            settings,
            client,
            verify_url,
            dashboard_url,
        })
    }
}

#[async_trait::async_trait]
impl Verifier for ReqwestVerifier {
    async fn load_security_token(&self) -> Result<Option<SecurityToken>, VerifyError> {
        let response = self
            .client
            .get(self.dashboard_url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        let html = response.text().await.map_err(map_reqwest_error)?;
        Ok(extract_security_token(&html))
    }

    async fn verify(
        &self,
        request: &VerificationRequest,
        token: &SecurityToken,
    ) -> Result<VerificationResult, VerifyError> {
        scan_info!(
            "Submitting verification to {} url_len={}",
            self.verify_url,
            request.url.len()
        );
        let response = self
            .client
            .post(self.verify_url.clone())
            .header(self.settings.csrf_header.as_str(), token.as_str())
            .form(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        scan_debug!("Verification response status={}", status);
        if !status.is_success() {
            return Err(status_error(status));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode_verification(&body)
    }
}

fn status_error(status: reqwest::StatusCode) -> VerifyError {
    let status_text = status.canonical_reason().unwrap_or(status.as_str());
    VerifyError::http_status(status.as_u16(), status_text)
}

fn map_reqwest_error(err: reqwest::Error) -> VerifyError {
    VerifyError::network(err.to_string())
}
