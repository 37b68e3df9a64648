//! Error types for request dispatch.
//!
//! # Design
//! Only transport faults are errors here. A 4xx/5xx answer from the API is a
//! successful round-trip whose body the caller interprets; the upstream uses
//! 400 for "nothing found", so treating it as a failure would hide data.
//!
//! `code()` returns curl-compatible error numbers so log lines and callers
//! that switch on the number keep working regardless of the HTTP library.

use std::fmt;

use thiserror::Error;

/// Broad class of a network-level fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// The host name could not be resolved.
    Resolve,
    /// The TCP connection could not be established.
    Connect,
    /// The connect or total timeout elapsed.
    Timeout,
    Tls,
    /// The connection broke while sending or receiving.
    Io,
    /// Redirect limit reached or redirect target unusable.
    Redirect,
    Other,
}

impl FaultKind {
    pub fn code(self) -> u32 {
        match self {
            FaultKind::Resolve => 6,
            FaultKind::Connect => 7,
            FaultKind::Timeout => 28,
            FaultKind::Tls => 35,
            FaultKind::Io => 56,
            FaultKind::Redirect => 47,
            FaultKind::Other => 0,
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultKind::Resolve => "resolve",
            FaultKind::Connect => "connect",
            FaultKind::Timeout => "timeout",
            FaultKind::Tls => "tls",
            FaultKind::Io => "io",
            FaultKind::Redirect => "redirect",
            FaultKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Errors returned by `Executor::perform`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request or the client could not be constructed; nothing was sent.
    #[error("Cannot initialize transport: {0}")]
    Init(String),

    /// The round-trip failed at the network layer.
    #[error("An error occurred while sending request. Error number: {code}; Error message: {message}", code = .kind.code())]
    Network { kind: FaultKind, message: String },
}

impl TransportError {
    pub fn network(kind: FaultKind, message: impl Into<String>) -> Self {
        TransportError::Network {
            kind,
            message: message.into(),
        }
    }

    /// Curl-compatible error number. `Init` maps to 2 (`CURLE_FAILED_INIT`).
    pub fn code(&self) -> u32 {
        match self {
            TransportError::Init(_) => 2,
            TransportError::Network { kind, .. } => kind.code(),
        }
    }

    pub fn kind(&self) -> Option<FaultKind> {
        match self {
            TransportError::Init(_) => None,
            TransportError::Network { kind, .. } => Some(*kind),
        }
    }
}
