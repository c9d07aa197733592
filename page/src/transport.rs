//! Executes core requests over the network with ureq.

use std::io::ErrorKind;

use skip_core::{FailureClass, HttpOutcome, HttpRequest, HttpResponse, TransportFailure};
use tracing::debug;

/// Run `req` and report what happened. Every status comes back as a
/// response; only transport problems become a `TransportFailure`.
pub fn execute(req: &HttpRequest) -> HttpOutcome {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(req.timeout))
        .build()
        .new_agent();

    let mut builder = agent.get(&req.url);
    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }

    debug!(url = %req.url, "sending request");
    let mut response = builder.call().map_err(classify)?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = response.body_mut().read_to_string().map_err(classify)?;

    Ok(HttpResponse { status, headers, body })
}

fn classify(err: ureq::Error) -> TransportFailure {
    let class = match &err {
        ureq::Error::Timeout(_) => FailureClass::TimedOut,
        ureq::Error::Io(e) if e.kind() == ErrorKind::TimedOut => FailureClass::TimedOut,
        ureq::Error::BadUri(_) | ureq::Error::Http(_) => FailureClass::Setup,
        _ => FailureClass::NoResponse,
    };
    let message = match class {
        FailureClass::TimedOut => format!("Request timed out: {err}"),
        FailureClass::NoResponse => format!("Network error: {err}"),
        FailureClass::Setup => format!("Request could not be sent: {err}"),
    };
    TransportFailure::new(class, message)
}
