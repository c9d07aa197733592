//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe requests, responses and transport failures as plain
//! data. The core crate builds `HttpRequest` values and interprets the
//! outcome the host reports back; it never opens a socket itself. The host
//! executes the request within `HttpRequest::timeout` and reports either an
//! `HttpResponse` (any status) or a `TransportFailure`.

use std::fmt;
use std::time::Duration;

/// A single query-string value. `Absent` entries are dropped when the URL is
/// built, so optional parameters can be passed through unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Absent,
}

impl QueryValue {
    pub(crate) fn render(&self) -> Option<String> {
        match self {
            QueryValue::Str(s) => Some(s.clone()),
            QueryValue::Int(n) => Some(n.to_string()),
            QueryValue::Bool(b) => Some(b.to_string()),
            QueryValue::Absent => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Int(n)
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Absent, Into::into)
    }
}

/// A GET request described as plain data.
///
/// `url` is absolute and already carries the encoded query string.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

/// An HTTP response described as plain data, whatever its status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Why the host could not produce an `HttpResponse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// The request went out but nothing came back (refused, reset, DNS).
    NoResponse,
    /// No response within the request's timeout.
    TimedOut,
    /// The request could not be constructed or sent at all.
    Setup,
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureClass::NoResponse => write!(f, "no response"),
            FailureClass::TimedOut => write!(f, "timed out"),
            FailureClass::Setup => write!(f, "request setup"),
        }
    }
}

/// Transport-level failure reported by the host in place of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub class: FailureClass,
    pub message: String,
}

impl TransportFailure {
    pub fn new(class: FailureClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }
}

/// What the host hands back after executing an `HttpRequest`.
pub type HttpOutcome = Result<HttpResponse, TransportFailure>;
