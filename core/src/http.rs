//! HTTP request and response described as plain data.
//!
//! # Design
//! `RequestBuilder` produces an `HttpRequest` without touching the network.
//! The executors hand it to the transport adapter; a host that wants to do its
//! own IO can take the same value and send it with any client. All fields are
//! owned so values can be moved across threads freely.

/// HTTP method for a request. The upstream API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// A fully assembled outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// A response as captured by the transport.
///
/// Only the legacy executor looks at `status` and `headers`; the primary path
/// returns `body` alone.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Status line, header lines, blank line, then the body, CRLF separated.
    pub fn to_raw(&self, version: &str, reason: &str) -> String {
        let mut raw = format!("{version} {} {reason}\r\n", self.status);
        for (name, value) in &self.headers {
            raw.push_str(name);
            raw.push_str(": ");
            raw.push_str(value);
            raw.push_str("\r\n");
        }
        raw.push_str("\r\n");
        raw.push_str(&self.body);
        raw
    }
}
