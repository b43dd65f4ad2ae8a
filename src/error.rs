//! Error types for configuration and scalar value parsing.
//!
//! This module contains the two error types that do not involve any network
//! traffic:
//!
//! - [`ConfigError`]: invalid client configuration (endpoint URL, user agent,
//!   missing credentials)
//! - [`ParseError`]: a string-encoded scalar from the Zabbix API (version,
//!   boolean, duration, timestamp) could not be decoded
//!
//! Errors raised while talking to the server live in
//! [`clients`](crate::clients) and are unified by
//! [`RpcError`](crate::clients::RpcError).
//!
//! # Example
//!
//! ```rust
//! use zabbix_api::{Endpoint, ConfigError};
//!
//! let result = Endpoint::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON-RPC endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Expected an absolute http(s) URL (e.g., 'https://zabbix.example.com/api_jsonrpc.php').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The user agent prefix cannot be sent as an HTTP header value.
    #[error("Invalid user agent prefix '{prefix}'. It must only contain visible ASCII characters and spaces.")]
    InvalidUserAgentPrefix {
        /// The rejected prefix.
        prefix: String,
    },

    /// No cached session was usable and no credentials were supplied.
    #[error("No usable cached session and no credentials were provided. Call `credentials()` before `connect()`.")]
    MissingCredentials,
}

/// Errors raised when decoding a string-encoded scalar value.
///
/// The Zabbix API encodes most scalars as strings (`"1"` for true, `"1h"`
/// for a duration, `"1683642493"` for a timestamp). Every decoder in
/// [`types`](crate::types) reports failures through this enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A version string was empty or had a non-numeric component.
    #[error("Invalid version '{input}'. Expected dot-separated numbers (e.g., '6.4.0').")]
    InvalidVersion {
        /// The rejected input.
        input: String,
    },

    /// A boolean was not one of `"0"`, `"1"`, `"false"`, `"true"`.
    #[error("Invalid boolean '{input}'. Expected one of '0', '1', 'false' or 'true'.")]
    InvalidBoolean {
        /// The rejected input.
        input: String,
    },

    /// A duration was not a number with an optional `s`, `m`, `h`, `d` or `w` suffix.
    #[error("Invalid duration '{input}'. Expected a number of seconds with an optional s/m/h/d/w suffix.")]
    InvalidDuration {
        /// The rejected input.
        input: String,
    },

    /// A timestamp was not a decimal number of seconds since the Unix epoch.
    #[error("Invalid Unix timestamp '{input}'.")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
    },
}
