//! Stateless request builder for the Zalando API.
//!
//! # Design
//! `RequestBuilder` holds only a base URL. `build` turns an operation and a
//! configuration into an `HttpRequest` without any IO, so URL assembly, header
//! selection and query encoding are testable on their own and shared by both
//! executors.

use tracing::debug;

use crate::headers::build_headers;
use crate::http::{HttpMethod, HttpRequest};
use crate::query;
use crate::types::{Configuration, Operation};

pub const DEFAULT_BASE_URL: &str = "https://api.zalando.com/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    base_url: String,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl RequestBuilder {
    /// `base_url` is used as a prefix verbatim; endpoints are appended with no
    /// separator, so it should normally end in `/`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for `endpoint` with `query` attached. No `?` when `query` is empty.
    pub fn url(&self, endpoint: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}{endpoint}?{query}", self.base_url)
        }
    }

    pub fn build(&self, operation: &dyn Operation, configuration: &Configuration) -> HttpRequest {
        let headers = build_headers(configuration);
        debug!(stage = "headers_built", count = headers.len());

        let query = query::encode(operation.filter());
        debug!(stage = "query_built", query = %query);

        let url = self.url(operation.endpoint(), &query);
        debug!(stage = "url_assembled", url = %url);

        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers,
        }
    }
}
