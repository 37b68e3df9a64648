//! Request dispatch.
//!
//! # Design
//! `Executor` is the capability callers depend on. `RequestExecutor` is the
//! primary implementation: it keeps one ureq agent built from the resolved
//! options and rebuilds it whenever options or configuration change.
//! `LegacyExecutor` is the older path that opens a fresh connection per call
//! and returns the response head together with the body; it is kept for
//! callers that still parse that format and should not be used for new code.
//!
//! Both go through `RequestBuilder`, so headers, query and URL are identical
//! on either path. A non-2xx status is logged and otherwise ignored.

use std::time::Instant;

use tracing::{debug, info, instrument, warn};
use ureq::Agent;

use crate::client::RequestBuilder;
use crate::error::TransportError;
use crate::http::HttpRequest;
use crate::options::{OptionKey, OptionValue, ResolvedOptions, TransportOptions};
use crate::transport;
use crate::types::{Configuration, Operation};

/// Dispatch an operation and return the raw response body.
///
/// The body is returned whatever its status or size. It is decoded as UTF-8;
/// invalid byte sequences become U+FFFD rather than failing the call.
pub trait Executor {
    fn perform(&self, operation: &dyn Operation) -> Result<String, TransportError>;
}

fn log_request(request: &HttpRequest, options: &ResolvedOptions) {
    if options.verbose {
        info!(url = %request.url, headers = ?request.headers, user_agent = %options.user_agent, "sending request");
    } else {
        debug!(url = %request.url, "sending request");
    }
}

fn log_status(status: u16, started: Instant) {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if (200..300).contains(&status) {
        debug!(stage = "completed", status, elapsed_ms);
    } else {
        warn!(stage = "completed", status, elapsed_ms, "non-success status, returning body as is");
    }
}

/// Primary executor. Cheap to share across threads by reference.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    builder: RequestBuilder,
    configuration: Configuration,
    options: TransportOptions,
    resolved: ResolvedOptions,
    agent: Agent,
}

impl RequestExecutor {
    /// Executor for the public API with default transport options.
    pub fn new(configuration: Configuration) -> Self {
        Self::from_parts(RequestBuilder::default(), configuration, TransportOptions::default())
    }

    fn from_parts(
        builder: RequestBuilder,
        configuration: Configuration,
        options: TransportOptions,
    ) -> Self {
        let resolved = options.resolve(&configuration);
        let agent = transport::build_agent(&resolved);
        Self {
            builder,
            configuration,
            options,
            resolved,
            agent,
        }
    }

    fn rebuild(&mut self) {
        self.resolved = self.options.resolve(&self.configuration);
        self.agent = transport::build_agent(&self.resolved);
    }

    /// Send requests to `base_url` instead of the public API.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.builder = RequestBuilder::new(base_url);
        self
    }

    pub fn with_options(
        mut self,
        overrides: impl IntoIterator<Item = (OptionKey, OptionValue)>,
    ) -> Self {
        self.set_options(overrides);
        self
    }

    pub fn set_options(&mut self, overrides: impl IntoIterator<Item = (OptionKey, OptionValue)>) {
        self.options.set_options(overrides);
        self.rebuild();
    }

    pub fn set_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
        self.rebuild();
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn options(&self) -> &TransportOptions {
        &self.options
    }

    /// Options as they will be applied to the next request.
    pub fn resolved_options(&self) -> &ResolvedOptions {
        &self.resolved
    }

    /// The request `perform` would send for `operation`.
    pub fn build_request(&self, operation: &dyn Operation) -> HttpRequest {
        self.builder.build(operation, &self.configuration)
    }
}

impl Executor for RequestExecutor {
    #[instrument(skip_all, fields(endpoint = operation.endpoint()))]
    fn perform(&self, operation: &dyn Operation) -> Result<String, TransportError> {
        let request = self.build_request(operation);
        log_request(&request, &self.resolved);

        let started = Instant::now();
        debug!(stage = "dispatched");
        let response = transport::send(&self.agent, &request).map_err(|err| {
            warn!(stage = "failed", error = %err);
            err
        })?;

        log_status(response.status, started);
        Ok(response.body)
    }
}

/// Older dispatch path that returns the raw response head mixed with the body.
///
/// Deprecated: prefer `RequestExecutor`. The output starts with the status
/// line and header lines, then a blank line, then the body, CRLF separated.
/// Each call opens its own connection and closes it afterwards.
#[derive(Debug, Clone)]
pub struct LegacyExecutor {
    builder: RequestBuilder,
    configuration: Configuration,
    options: TransportOptions,
}

impl LegacyExecutor {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            builder: RequestBuilder::default(),
            configuration,
            options: TransportOptions::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.builder = RequestBuilder::new(base_url);
        self
    }

    pub fn with_options(
        mut self,
        overrides: impl IntoIterator<Item = (OptionKey, OptionValue)>,
    ) -> Self {
        self.options.set_options(overrides);
        self
    }
}

impl Executor for LegacyExecutor {
    #[instrument(skip_all, fields(endpoint = operation.endpoint(), legacy = true))]
    fn perform(&self, operation: &dyn Operation) -> Result<String, TransportError> {
        let request = self.builder.build(operation, &self.configuration);
        let resolved = self.options.resolve(&self.configuration);
        log_request(&request, &resolved);

        // agent is dropped at the end of the call, closing the connection
        let agent = transport::build_agent(&resolved);
        let started = Instant::now();
        debug!(stage = "dispatched");
        let response = transport::send(&agent, &request).map_err(|err| {
            warn!(stage = "failed", error = %err);
            err
        })?;

        log_status(response.status, started);
        Ok(response.to_raw("HTTP/1.1", transport::reason_phrase(response.status)))
    }
}
