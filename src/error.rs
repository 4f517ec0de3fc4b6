use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text shown when a failure carries no usable message.
pub const GENERIC_ERROR: &str = "Something went wrong!";

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AuthError {
    #[error("identity service rejected the request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("identity service is not configured")]
    NotConfigured,
    #[error("unknown identity provider `{0}`")]
    UnknownProvider(String),
}

impl AuthError {
    /// Message suitable for a toast. Only provider-supplied text is shown
    /// verbatim; everything else falls back to [`GENERIC_ERROR`].
    pub fn toast_message(&self) -> String {
        match self {
            AuthError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

impl From<leptos::ServerFnError> for AuthError {
    fn from(err: leptos::ServerFnError) -> Self {
        AuthError::Transport(err.to_string())
    }
}

/// Pulls a human readable message out of an error response body.
///
/// JSON bodies are searched for a `message` or `error` string field, any
/// other non-empty body is used as plain text.
pub fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .filter_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .map(str::trim)
            .find(|msg| !msg.is_empty())
            .map(ToString::to_string),
        Ok(serde_json::Value::String(msg)) if !msg.trim().is_empty() => {
            Some(msg.trim().to_string())
        }
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}
