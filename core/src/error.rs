//! Error types for the skip catalog client.
//!
//! # Design
//! Every failure the workflow can hit ends up in one `SkipError`. Transport
//! problems keep the raw status and body so `user_message` can pick the most
//! specific wording; the empty-catalog policy gets its own variant; anything
//! else is an `Application` error carrying a plain message.

use serde_json::Value;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Resource not found. Please check your request and try again.";
pub const UNAUTHORIZED_MESSAGE: &str = "You are not authorized to access this resource.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const EMPTY_RESULT_MESSAGE: &str = "No skip options available for this location.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred. Please try again.";

/// A failed round-trip: non-2xx status, no response, timeout or setup error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct TransportError {
    /// Present only when the server answered.
    pub status: Option<u16>,
    /// Response body, as JSON when it parsed and as a JSON string otherwise.
    pub body: Option<Value>,
    pub message: String,
}

impl TransportError {
    /// The `message` field of a structured error body, if any.
    pub fn body_message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|body| body.get("message"))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }
}

/// Errors surfaced by the fetcher and stored by the controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("{}", EMPTY_RESULT_MESSAGE)]
    EmptyResult,

    #[error("{0}")]
    Application(String),
}

impl SkipError {
    /// Render the error as the single message shown on the error view.
    pub fn user_message(&self) -> String {
        if let SkipError::Transport(err) = self {
            match err.status {
                Some(404) => return NOT_FOUND_MESSAGE.to_string(),
                Some(401 | 403) => return UNAUTHORIZED_MESSAGE.to_string(),
                Some(status) if status >= 500 => return SERVER_ERROR_MESSAGE.to_string(),
                _ => {}
            }
            if let Some(message) = err.body_message() {
                return message.to_string();
            }
        }
        let raw = self.to_string();
        if raw.is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            raw
        }
    }
}
