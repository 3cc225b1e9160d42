//! HTTP client for the upstream platform's profile-update endpoint.

use reqwest::{Client, StatusCode, header};
use serde_json::Value;
use thiserror::Error;

use crate::names::SessionCredential;

/// Origin of the upstream platform's web client.
pub const UPSTREAM_ORIGIN: &str = "https://www.tiktok.com";

/// Path of the internal profile-update endpoint.
const PROFILE_UPDATE_PATH: &str = "/api/user/update/";

/// Referer claimed on outbound calls, the upstream's own settings page.
const SETTINGS_REFERER: &str = "https://www.tiktok.com/settings";

/// Browser identity claimed on outbound calls. The endpoint only answers
/// requests that look like they come from the platform's own web client.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Upstream status code that signals an accepted request.
const STATUS_CODE_OK: i64 = 0;

/// Configuration for reaching the upstream platform.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the upstream, e.g. `"https://www.tiktok.com"`.
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: UPSTREAM_ORIGIN.to_string(),
        }
    }
}

/// HTTP client for the upstream profile-update endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    config: UpstreamConfig,
    http: Client,
}

impl UpstreamClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Submit a display-name change for the account behind `session`.
    ///
    /// Sends exactly one POST and decodes the JSON reply. Interpreting the
    /// reply is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error when the call fails at the transport layer or the
    /// response body is not valid JSON.
    pub async fn update_profile(
        &self,
        session: &SessionCredential,
        nick_name: &str,
    ) -> Result<ProfileUpdateReply, UpstreamError> {
        let url = format!("{}{PROFILE_UPDATE_PATH}", self.config.base_url);

        let body = serde_json::json!({ "nickName": nick_name });

        let response = self
            .http
            .post(&url)
            .header(header::COOKIE, format!("sessionid={}", session.as_str()))
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(header::REFERER, SETTINGS_REFERER)
            .header(header::ORIGIN, UPSTREAM_ORIGIN)
            .json(&body)
            .send()
            .await?;

        let http_status = response.status();
        let body: Value = response.json().await?;

        Ok(ProfileUpdateReply { http_status, body })
    }
}

/// Decoded reply from the profile-update endpoint.
#[derive(Debug, Clone)]
pub struct ProfileUpdateReply {
    /// HTTP status of the reply.
    pub http_status: StatusCode,

    /// Decoded JSON body.
    pub body: Value,
}

impl ProfileUpdateReply {
    /// The upstream's application-level status code, when present.
    #[must_use]
    pub fn status_code(&self) -> Option<i64> {
        self.body.get("status_code").and_then(Value::as_i64)
    }

    /// The upstream's human-readable status message, when present.
    #[must_use]
    pub fn status_msg(&self) -> Option<&str> {
        self.body.get("status_msg").and_then(Value::as_str)
    }

    /// Whether the upstream accepted the request. Zero is the upstream's
    /// undocumented convention for success; the field is owned entirely by
    /// the third party and may change without notice.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.http_status.is_success() && self.status_code() == Some(STATUS_CODE_OK)
    }
}

/// Errors that can occur when calling the upstream platform.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// An HTTP transport or body-decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
