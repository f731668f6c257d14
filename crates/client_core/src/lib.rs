//! Client-side service layer for the SMS gateway REST surface.
//!
//! The UI never talks HTTP directly; it holds an [`SmsGateway`] capability
//! and the backend worker drives the async calls. Settings follow the
//! remote store's contract: `settings()` is a synchronous cached accessor
//! that always yields a value object (possibly the empty default), while
//! `refresh_settings` replaces the cache wholesale from the server.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{SmsMessage, SmsSettings},
    error::{ApiError, ErrorCode},
};
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid gateway url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server error ({status}): {error}")]
    Server { status: u16, error: ApiError },
}

impl GatewayError {
    /// Diagnostic text surfaced alongside the error notification. Server
    /// failures include the forwarded stack detail when one was returned.
    pub fn detail(&self) -> String {
        match self {
            GatewayError::Server { status, error } => match &error.trace {
                Some(trace) => format!("{status}: {}\n{trace}", error.message),
                None => format!("{status}: {}", error.message),
            },
            other => other.to_string(),
        }
    }
}

/// Remote operations the SMS views depend on. Path parameters are empty for
/// both endpoints; the request body is the serialized form record.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// POST the message record to `/send` as-is. No client-side validation.
    async fn send_sms(&self, sms: &SmsMessage) -> Result<(), GatewayError>;

    /// Last settings value loaded, or the empty default for a fresh handle.
    /// Infallible: load failure is not modeled at this layer.
    fn settings(&self) -> SmsSettings;

    /// GET `/settings`, replace the cached copy wholesale, return it.
    async fn refresh_settings(&self) -> Result<SmsSettings, GatewayError>;

    /// POST the settings record to `/settings`. Callers re-read through
    /// `settings()`/`refresh_settings` after success; no partial merge.
    async fn save_settings(&self, settings: &SmsSettings) -> Result<(), GatewayError>;
}

pub struct HttpSmsGateway {
    http: Client,
    base_url: Url,
    settings_cache: Mutex<SmsSettings>,
}

impl HttpSmsGateway {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, GatewayError> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(base_url.as_ref())?,
            settings_cache: Mutex::new(SmsSettings::default()),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        Ok(self.base_url.join(path)?)
    }

    /// Decode a non-2xx response into the structured gateway error body,
    /// falling back to the raw text when the body is not that shape.
    async fn decode_failure(response: reqwest::Response) -> GatewayError {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => {
                let error = serde_json::from_str::<ApiError>(&body).unwrap_or_else(|_| {
                    let message = if body.trim().is_empty() {
                        "gateway returned an empty error body".to_string()
                    } else {
                        body
                    };
                    ApiError::new(ErrorCode::Internal, message)
                });
                GatewayError::Server { status, error }
            }
            Err(err) => GatewayError::Transport(err),
        }
    }
}

#[async_trait]
impl SmsGateway for HttpSmsGateway {
    async fn send_sms(&self, sms: &SmsMessage) -> Result<(), GatewayError> {
        debug!(recipients = sms.recipients.len(), "posting outgoing sms");
        let response = self
            .http
            .post(self.endpoint("send")?)
            .json(sms)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::decode_failure(response).await);
        }
        Ok(())
    }

    fn settings(&self) -> SmsSettings {
        self.settings_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    async fn refresh_settings(&self) -> Result<SmsSettings, GatewayError> {
        let response = self.http.get(self.endpoint("settings")?).send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_failure(response).await);
        }
        let settings: SmsSettings = response.json().await?;
        let mut cache = self
            .settings_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *cache = settings.clone();
        Ok(settings)
    }

    async fn save_settings(&self, settings: &SmsSettings) -> Result<(), GatewayError> {
        debug!("posting sms settings");
        let response = self
            .http
            .post(self.endpoint("settings")?)
            .json(settings)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::decode_failure(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
