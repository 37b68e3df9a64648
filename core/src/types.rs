//! Inputs to a request: the operation being called and the client configuration.
//!
//! # Design
//! `Operation` is a trait because the catalog of concrete API calls (articles,
//! categories, brands, ...) lives outside this crate; the core only needs an
//! endpoint and an ordered filter list. `GenericOperation` covers callers that
//! just want to name an endpoint and a handful of filters.
//!
//! `Configuration` is plain data with serde support so a host can load it from
//! whatever file format it already uses.

use serde::{Deserialize, Serialize};

/// A single query-string filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
    /// Rendered comma-joined, which the encoder then splits back into one
    /// pair per element.
    List(Vec<String>),
}

impl FilterValue {
    /// String form of the value before percent-encoding.
    pub fn render(&self) -> String {
        match self {
            FilterValue::Text(s) => s.clone(),
            FilterValue::Flag(true) => "true".to_string(),
            FilterValue::Flag(false) => "false".to_string(),
            FilterValue::List(items) => items.join(","),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Flag(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        FilterValue::List(value)
    }
}

impl From<&[&str]> for FilterValue {
    fn from(value: &[&str]) -> Self {
        FilterValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// One API call as seen by the executor.
pub trait Operation {
    /// Path relative to the API root, e.g. `"articles"`.
    fn endpoint(&self) -> &str;

    /// Query filters in the order they should appear on the wire.
    fn filter(&self) -> &[(String, FilterValue)];
}

/// An operation assembled at runtime from an endpoint and filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericOperation {
    endpoint: String,
    filter: Vec<(String, FilterValue)>,
}

impl GenericOperation {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            filter: Vec::new(),
        }
    }

    /// Append a filter. Repeating a key appends another pair rather than
    /// replacing the first one.
    pub fn filter(mut self, key: &str, value: impl Into<FilterValue>) -> Self {
        self.filter.push((key.to_string(), value.into()));
        self
    }
}

impl Operation for GenericOperation {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn filter(&self) -> &[(String, FilterValue)] {
        &self.filter
    }
}

/// Per-client settings. Timeouts are in whole seconds; `None` falls back to
/// the executor's transport options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub timeout: Option<u64>,
    pub connection_timeout: Option<u64>,
    pub client_name: Option<String>,
    pub locale: Option<String>,
    /// Log outgoing request headers at info level.
    pub debug: bool,
}

impl Configuration {
    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    pub fn connection_timeout(&self) -> Option<u64> {
        self.connection_timeout
    }

    pub fn client_name(&self) -> Option<&str> {
        self.client_name.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}
