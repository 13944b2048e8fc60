// ============================================================================
// ERRORS - API failures and how the UI reacts to them
// ============================================================================

use thiserror::Error;

/// Failure of a call to the remote API or to a browser facility.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never got a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    /// The access token could not be decoded.
    #[error("invalid access token: {0}")]
    Token(String),
    #[error("browser error: {0}")]
    Browser(String),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),
}

/// How the dashboard reacts to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Session is gone: navigate to the entry route.
    Authentication,
    /// No server response: swallow, keep state.
    Network,
}

impl ApiError {
    pub fn has_response(&self) -> bool {
        matches!(self, ApiError::Http { .. } | ApiError::Parse(_) | ApiError::Token(_))
    }

    /// Classification of a failure while refreshing the access token.
    pub fn token_refresh_kind(&self) -> FailureKind {
        if self.has_response() {
            FailureKind::Authentication
        } else {
            FailureKind::Network
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ApiError::Browser(format!("{:?}", value))
    }
}

impl From<rust_xlsxwriter::XlsxError> for ApiError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        ApiError::Spreadsheet(error.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Parse(error.to_string())
    }
}
