//! HTTP client for the inquiry API

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::OnceLock;

use crate::inquiry::form::InquiryForm;

static API_BASE: OnceLock<String> = OnceLock::new();

/// Shown when the server rejects a submission without a usable message.
pub const SERVER_ERROR_FALLBACK: &str = "Something went wrong. Please try again.";

/// Shown when no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Override the API base URL. Call this at startup, before any submission.
pub fn init_api_base(url: String) {
    API_BASE.set(url).ok();
}

/// Resolve the API base URL: an explicit override wins, otherwise local
/// hosts talk to the dev server and everything else uses the same-origin
/// relative path.
pub fn api_base() -> String {
    if let Some(base) = API_BASE.get() {
        return base.clone();
    }

    #[cfg(feature = "web")]
    if let Some(hostname) = web_sys::window().and_then(|w| w.location().hostname().ok()) {
        if hostname == "localhost" || hostname == "127.0.0.1" {
            return "http://localhost:5000/api".to_string();
        }
    }

    "/api".to_string()
}

/// Error type for inquiry submissions
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is already user-presentable.
    #[error("server rejected inquiry (status {status}): {message}")]
    Server { status: u16, message: String },

    /// No response received.
    #[error("network error: {0}")]
    Transport(String),
}

impl ApiError {
    /// The message to surface to the user for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Server { message, .. } => message,
            ApiError::Transport(_) => NETWORK_ERROR_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// The inquiry API capability. The production implementation is
/// [`InquiryClient`]; tests inject a recording fake.
#[async_trait(?Send)]
pub trait InquiryApi {
    /// Submit one inquiry. `Ok(())` for any 2xx response.
    async fn submit_inquiry(&self, form: &InquiryForm) -> Result<(), ApiError>;
}

/// Error response body; only the `message` field matters.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull a user-presentable message out of an error response body.
fn server_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string())
}

/// Client for the inquiry API
#[derive(Debug, Clone)]
pub struct InquiryClient {
    client: reqwest::Client,
    base: String,
}

impl InquiryClient {
    /// Create a client against an explicit base URL.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// Create a client against the resolved base URL (see [`api_base`]).
    pub fn from_location() -> Self {
        Self::new(api_base())
    }
}

#[async_trait(?Send)]
impl InquiryApi for InquiryClient {
    async fn submit_inquiry(&self, form: &InquiryForm) -> Result<(), ApiError> {
        let url = format!("{}/inquiries", self.base);

        // No timeout and no retry: one shot, the user re-triggers manually.
        let response = self.client.post(&url).json(form).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, "inquiry accepted");
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message: server_message(&body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_the_body_message() {
        assert_eq!(
            server_message(br#"{"message":"Duplicate entry"}"#),
            "Duplicate entry"
        );
    }

    #[test]
    fn server_message_falls_back_when_absent_or_unparseable() {
        assert_eq!(server_message(br#"{}"#), SERVER_ERROR_FALLBACK);
        assert_eq!(server_message(br#"{"message":null}"#), SERVER_ERROR_FALLBACK);
        assert_eq!(server_message(b"<html>502</html>"), SERVER_ERROR_FALLBACK);
        assert_eq!(server_message(b""), SERVER_ERROR_FALLBACK);
    }

    #[test]
    fn transport_errors_map_to_the_generic_message() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn server_errors_carry_their_message_through() {
        let err = ApiError::Server {
            status: 409,
            message: "Duplicate entry".to_string(),
        };
        assert_eq!(err.user_message(), "Duplicate entry");
    }
}
