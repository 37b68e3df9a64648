//! Transport options and their precedence rules.
//!
//! # Design
//! Options are keyed by `OptionKey`, an enum owned by this crate, so the merge
//! logic never depends on a particular HTTP library. `transport.rs` translates
//! a `ResolvedOptions` into library settings.
//!
//! Precedence, lowest first:
//! 1. built-in defaults
//! 2. overrides passed at construction or through `set_options`
//! 3. configuration timeouts, applied by `resolve` at dispatch time
//!
//! `ReturnTransfer` is forced on after every merge; the response body is
//! always captured and handed back to the caller.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::types::Configuration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    ConnectionTimeout,
    Timeout,
    FollowLocation,
    UserAgent,
    /// Capture the body instead of streaming it elsewhere. Always `true`.
    ReturnTransfer,
    Verbose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Seconds(u64),
    Flag(bool),
    Text(String),
}

/// Default user agent for a library version, e.g. `ZalandoPHP [0.1.0]`.
pub fn user_agent(version: &str) -> String {
    format!("ZalandoPHP [{version}]")
}

/// Merged option set held by an executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    options: BTreeMap<OptionKey, OptionValue>,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"), [])
    }
}

impl TransportOptions {
    /// Defaults for `version`, then `overrides` on top.
    pub fn new(version: &str, overrides: impl IntoIterator<Item = (OptionKey, OptionValue)>) -> Self {
        let mut options = BTreeMap::new();
        options.insert(OptionKey::UserAgent, OptionValue::Text(user_agent(version)));
        options.insert(
            OptionKey::ConnectionTimeout,
            OptionValue::Seconds(DEFAULT_CONNECTION_TIMEOUT_SECS),
        );
        options.insert(OptionKey::Timeout, OptionValue::Seconds(DEFAULT_TIMEOUT_SECS));
        options.insert(OptionKey::FollowLocation, OptionValue::Flag(true));

        let mut merged = Self { options };
        merged.set_options(overrides);
        merged
    }

    /// Merge more overrides into the set. Keys present in `overrides` replace
    /// existing values; `ReturnTransfer` is re-forced afterwards.
    pub fn set_options(&mut self, overrides: impl IntoIterator<Item = (OptionKey, OptionValue)>) {
        self.options.extend(overrides);
        self.options
            .insert(OptionKey::ReturnTransfer, OptionValue::Flag(true));
    }

    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.options.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OptionKey, &OptionValue)> {
        self.options.iter()
    }

    fn seconds(&self, key: OptionKey) -> Option<u64> {
        match self.options.get(&key) {
            Some(OptionValue::Seconds(s)) => Some(*s),
            _ => None,
        }
    }

    fn flag(&self, key: OptionKey) -> Option<bool> {
        match self.options.get(&key) {
            Some(OptionValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    fn text(&self, key: OptionKey) -> Option<&str> {
        match self.options.get(&key) {
            Some(OptionValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Flatten the set for one request, letting configuration timeouts win.
    ///
    /// A key holding the wrong kind of value counts as absent.
    pub fn resolve(&self, configuration: &Configuration) -> ResolvedOptions {
        let timeout = configuration
            .timeout()
            .or_else(|| self.seconds(OptionKey::Timeout))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let connect_timeout = configuration
            .connection_timeout()
            .or_else(|| self.seconds(OptionKey::ConnectionTimeout))
            .unwrap_or(DEFAULT_CONNECTION_TIMEOUT_SECS);

        ResolvedOptions {
            timeout: Duration::from_secs(timeout),
            connect_timeout: Duration::from_secs(connect_timeout),
            user_agent: self
                .text(OptionKey::UserAgent)
                .map(str::to_string)
                .unwrap_or_else(|| user_agent(env!("CARGO_PKG_VERSION"))),
            follow_redirects: self.flag(OptionKey::FollowLocation).unwrap_or(true),
            verbose: configuration.debug || self.flag(OptionKey::Verbose).unwrap_or(false),
        }
    }
}

/// Final settings for one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    pub follow_redirects: bool,
    pub verbose: bool,
}
