//! Client Errors
//!
//! Every fallible path in the crate ends in one of these.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (network failure, bad URL)
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with anything but 200
    #[error("{url} answered with status {status}")]
    Application { status: u16, url: String },

    /// The server answered but declined the action
    #[error("server refused to {0}")]
    Refused(String),

    /// The body was not the JSON the caller expected
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// An element the page template should provide is missing or malformed
    #[error("dom: {0}")]
    Dom(String),

    #[error("csrf cookie `{0}` is not set")]
    MissingCsrfToken(String),
}

impl ClientError {
    pub fn transport(err: JsValue) -> Self {
        Self::Transport(describe(&err))
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }

    /// Errors raised by the server rather than by the page or the network
    pub fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Best-effort text for a thrown JS value
pub fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
