//! Request builder and executor for the Zalando shop API.
//!
//! # Overview
//! Turns an `Operation` (endpoint plus filters) and a `Configuration` into a
//! GET request, sends it, and returns the response body untouched. The body
//! is returned for every HTTP status; only transport faults are errors.
//!
//! # Design
//! - `RequestBuilder` is pure: it produces an `HttpRequest` value and never
//!   does IO.
//! - `TransportOptions` merges defaults, overrides and configuration under a
//!   fixed precedence, keyed by the crate's own `OptionKey`.
//! - `transport` is the only module that knows the HTTP library.
//! - `RequestExecutor` and `LegacyExecutor` both implement `Executor`.

pub mod client;
pub mod error;
pub mod executor;
pub mod headers;
pub mod http;
pub mod options;
pub mod query;
pub mod transport;
pub mod types;

pub use client::{RequestBuilder, DEFAULT_BASE_URL};
pub use error::{FaultKind, TransportError};
pub use executor::{Executor, LegacyExecutor, RequestExecutor};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use options::{OptionKey, OptionValue, ResolvedOptions, TransportOptions};
pub use types::{Configuration, FilterValue, GenericOperation, Operation};
