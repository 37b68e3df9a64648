//! Adapter between the crate's request/option types and ureq.
//!
//! Nothing outside this module names a ureq type. Status codes are never
//! turned into errors (`http_status_as_error(false)`); only faults below HTTP
//! become `TransportError`.

use std::io;

use ureq::Agent;

use crate::error::{FaultKind, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::options::ResolvedOptions;

/// Redirect hops allowed when `FollowLocation` is on.
pub const MAX_REDIRECTS: u32 = 10;

/// Build an agent configured from `options`.
pub fn build_agent(options: &ResolvedOptions) -> Agent {
    let max_redirects = if options.follow_redirects { MAX_REDIRECTS } else { 0 };
    Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(options.timeout))
        .timeout_connect(Some(options.connect_timeout))
        .max_redirects(max_redirects)
        .user_agent(options.user_agent.as_str())
        .build()
        .new_agent()
}

/// Execute `request` on `agent` and capture the whole response.
pub fn send(agent: &Agent, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
    let mut builder = agent.get(request.url.as_str());
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder.call()?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    // no size cap: a fully received body is never an error
    let bytes = response.body_mut().with_config().limit(u64::MAX).read_to_vec()?;
    let body = decode_body(bytes);

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

/// UTF-8 decode, replacing invalid sequences with U+FFFD.
pub fn decode_body(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(body) => body,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Canonical reason phrase for `status`, empty when unknown.
pub fn reason_phrase(status: u16) -> &'static str {
    ureq::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}

fn io_fault(kind: io::ErrorKind) -> FaultKind {
    match kind {
        io::ErrorKind::ConnectionRefused | io::ErrorKind::NotConnected => FaultKind::Connect,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => FaultKind::Timeout,
        _ => FaultKind::Io,
    }
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        let message = err.to_string();
        let kind = match &err {
            ureq::Error::BadUri(_) | ureq::Error::Http(_) => {
                return TransportError::Init(message);
            }
            ureq::Error::HostNotFound => FaultKind::Resolve,
            ureq::Error::ConnectionFailed => FaultKind::Connect,
            ureq::Error::Timeout(_) => FaultKind::Timeout,
            ureq::Error::TooManyRedirects => FaultKind::Redirect,
            ureq::Error::Io(e) => io_fault(e.kind()),
            _ => FaultKind::Other,
        };
        TransportError::Network { kind, message }
    }
}
