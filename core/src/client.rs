//! Stateless request builder and response interpreter for the skip service.
//!
//! # Design
//! `SkipClient` holds only the base URL and the timeout. A GET is split into
//! `build_get`, which produces an `HttpRequest`, and `parse_json`, which
//! consumes whatever the host observed. Every failure class is logged here
//! exactly once and normalized into a `TransportError`; nothing is retried.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{SkipError, TransportError};
use crate::http::{FailureClass, HttpOutcome, HttpRequest, QueryValue};

#[derive(Debug, Clone)]
pub struct SkipClient {
    base_url: String,
    timeout: Duration,
}

impl SkipClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET for `path` relative to the base URL. `Absent` query
    /// values are left out of the query string.
    pub fn build_get(&self, path: &str, query: &[(&str, QueryValue)]) -> Result<HttpRequest, TransportError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| {
            error!(url = %raw, error = %e, "API error: request could not be built");
            TransportError {
                status: None,
                body: None,
                message: format!("invalid request URL {raw}: {e}"),
            }
        })?;

        let pairs: Vec<(&str, String)> = query
            .iter()
            .filter_map(|(key, value)| value.render().map(|v| (*key, v)))
            .collect();
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in &pairs {
                serializer.append_pair(key, value);
            }
        }

        debug!(url = %url, "built GET request");
        Ok(HttpRequest {
            url: url.into(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            timeout: self.timeout,
        })
    }

    /// Interpret the outcome of a GET as a JSON `T`.
    ///
    /// A 2xx with an empty body decodes as JSON `null`, so callers asking for
    /// an `Option<_>` see "no payload" rather than a decode error.
    pub fn parse_json<T: DeserializeOwned>(&self, outcome: HttpOutcome) -> Result<T, SkipError> {
        let response = match outcome {
            Ok(response) => response,
            Err(failure) => {
                match failure.class {
                    FailureClass::Setup => {
                        error!(message = %failure.message, "API error: request setup failed")
                    }
                    class => {
                        error!(class = %class, message = %failure.message, "API error: no response received")
                    }
                }
                return Err(TransportError {
                    status: None,
                    body: None,
                    message: failure.message,
                }
                .into());
            }
        };

        if !(200..300).contains(&response.status) {
            let body = error_body(&response.body);
            error!(status = response.status, body = ?body, "API error");
            return Err(TransportError {
                status: Some(response.status),
                body,
                message: format!("Request failed with status code {}", response.status),
            }
            .into());
        }

        let text = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(text).map_err(|e| SkipError::Application(format!("unexpected response body: {e}")))
    }
}

fn error_body(raw: &str) -> Option<Value> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::REQUEST_TIMEOUT;
    use crate::http::{HttpResponse, TransportFailure};

    fn client() -> SkipClient {
        SkipClient::new(ClientConfig::with_base_url("http://localhost:3000"))
    }

    fn response(status: u16, body: &str) -> HttpOutcome {
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    fn transport_error(err: SkipError) -> TransportError {
        match err {
            SkipError::Transport(inner) => inner,
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn build_get_applies_base_url_headers_and_timeout() {
        let req = client().build_get("/skips/by-location", &[]).unwrap();
        assert_eq!(req.url, "http://localhost:3000/skips/by-location");
        assert_eq!(req.timeout, REQUEST_TIMEOUT);
        assert!(req
            .headers
            .contains(&("Accept".to_string(), "application/json".to_string())));
        assert!(req
            .headers
            .contains(&("Content-Type".to_string(), "application/json".to_string())));
    }

    #[test]
    fn build_get_omits_absent_values_and_encodes() {
        let req = client()
            .build_get(
                "skips/by-location",
                &[
                    ("postcode", "NR32 1AB".into()),
                    ("area", QueryValue::Absent),
                    ("limit", 5i64.into()),
                    ("heavy", true.into()),
                ],
            )
            .unwrap();
        assert_eq!(
            req.url,
            "http://localhost:3000/skips/by-location?postcode=NR32+1AB&limit=5&heavy=true"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = SkipClient::new(ClientConfig::with_base_url("http://localhost:3000/api/"));
        let req = client.build_get("/skips", &[]).unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/skips");
    }

    #[test]
    fn invalid_base_url_is_a_setup_error() {
        let client = SkipClient::new(ClientConfig::with_base_url("not a url"));
        let err = client.build_get("/skips", &[]).unwrap_err();
        assert_eq!(err.status, None);
        assert!(err.message.contains("invalid request URL"));
    }

    #[test]
    fn parse_json_success() {
        let value: Vec<u32> = client().parse_json(response(200, "[1,2,3]")).unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn empty_success_body_decodes_as_null() {
        let value: Option<Vec<u32>> = client().parse_json(response(200, "")).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn bad_json_is_an_application_error() {
        let err = client().parse_json::<Vec<u32>>(response(200, "not json")).unwrap_err();
        assert!(matches!(err, SkipError::Application(_)));
    }

    #[test]
    fn non_2xx_keeps_status_and_json_body() {
        let err = client()
            .parse_json::<Vec<u32>>(response(400, r#"{"message":"postcode is required"}"#))
            .unwrap_err();
        let err = transport_error(err);
        assert_eq!(err.status, Some(400));
        assert_eq!(err.body, Some(json!({"message": "postcode is required"})));
        assert_eq!(err.message, "Request failed with status code 400");
    }

    #[test]
    fn non_json_error_body_is_kept_as_string() {
        let err = transport_error(client().parse_json::<Vec<u32>>(response(502, "Bad Gateway")).unwrap_err());
        assert_eq!(err.body, Some(Value::String("Bad Gateway".to_string())));
    }

    #[test]
    fn empty_error_body_is_absent() {
        let err = transport_error(client().parse_json::<Vec<u32>>(response(404, "")).unwrap_err());
        assert_eq!(err.status, Some(404));
        assert!(err.body.is_none());
    }

    #[test]
    fn transport_failure_has_no_status() {
        let outcome = Err(TransportFailure::new(FailureClass::TimedOut, "request timed out after 10s"));
        let err = transport_error(client().parse_json::<Vec<u32>>(outcome).unwrap_err());
        assert_eq!(err.status, None);
        assert_eq!(err.body, None);
        assert_eq!(err.message, "request timed out after 10s");
    }
}
