use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "DECODE_ERROR")
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self::with_code(msg, format!("HTTP_{}", status))
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }

    /// Builds an error from a non-success response body. The backend answers with
    /// `{ "message": .. }`, ASP.NET problem details (`title`, `errors`), a bare
    /// JSON string, or plain text depending on the failing layer.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let fallback = || format!("Request failed with status {}", status);
        let trimmed = body.trim();
        let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
            let message = if trimmed.is_empty() || trimmed.len() > 300 || trimmed.starts_with('<') {
                fallback()
            } else {
                trimmed.to_string()
            };
            return Self::http(status, message);
        };
        match value {
            Value::String(message) if !message.trim().is_empty() => Self::http(status, message),
            Value::Object(ref map) => {
                let message = ["message", "error", "title"]
                    .iter()
                    .filter_map(|key| map.get(*key).and_then(Value::as_str))
                    .find(|text| !text.trim().is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(fallback);
                let error = Self::http(status, message);
                match map.get("errors") {
                    Some(details) if !details.is_null() => error.with_details(details.clone()),
                    _ => error,
                }
            }
            _ => Self::http(status, fallback()),
        }
    }
}
