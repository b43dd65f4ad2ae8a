//! Error types for Zabbix JSON-RPC calls.
//!
//! This module contains one error type per failure class, plus the unified
//! [`RpcError`] every session and resource operation returns.
//!
//! # Error Handling
//!
//! - [`TransportError`]: the HTTP exchange itself failed (connect, body read,
//!   non-2xx status without a JSON-RPC error body)
//! - [`DecodeError`]: the body was not valid JSON or did not have the
//!   expected shape
//! - [`ApiError`]: the server answered with a JSON-RPC error object
//! - [`NotFoundError`]: the query succeeded but matched nothing
//! - [`ParseError`]: a string-encoded scalar could not be decoded
//!
//! Failures during version discovery and login are wrapped in
//! [`RpcError::VersionDiscovery`] and [`RpcError::Login`]; the original
//! error stays reachable through [`std::error::Error::source`] and
//! [`RpcError::root_cause`].
//!
//! # Example
//!
//! ```rust,ignore
//! use zabbix_api::RpcError;
//! use zabbix_api::resources::HostGetParams;
//!
//! match session.get_hosts(&HostGetParams::default()).await {
//!     Ok(hosts) => println!("{} hosts", hosts.len()),
//!     Err(RpcError::NotFound(_)) => println!("no hosts"),
//!     Err(RpcError::Api(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(e) => println!("call failed: {e}"),
//! }
//! ```

use crate::error::{ConfigError, ParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when the HTTP exchange with the server fails.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or request-sending failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be read.
    #[error("Error reading response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The server answered with a non-2xx status and no JSON-RPC error body.
    #[error("Unexpected HTTP status {code} from JSON-RPC endpoint: {body}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The response body, lossily decoded as UTF-8.
        body: String,
    },
}

/// Error returned when a response body cannot be decoded.
///
/// # Example
///
/// ```rust
/// use zabbix_api::clients::DecodeError;
///
/// let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
/// let error = DecodeError::new("JSON response body", source);
/// assert!(error.to_string().starts_with("Error decoding JSON response body"));
/// ```
#[derive(Debug, Error)]
#[error("Error decoding {context}: {source}")]
pub struct DecodeError {
    /// What was being decoded.
    pub context: &'static str,
    /// The underlying serde error.
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    /// Creates a decode error for the given context.
    #[must_use]
    pub const fn new(context: &'static str, source: serde_json::Error) -> Self {
        Self { context, source }
    }
}

/// A JSON-RPC error object returned by the Zabbix server.
///
/// # Example
///
/// ```rust
/// use zabbix_api::clients::ApiError;
///
/// let error = ApiError {
///     code: -32602,
///     message: "Invalid params.".to_string(),
///     data: "Not authorized.".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid params. (-32602): Not authorized.");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} ({code}): {data}")]
pub struct ApiError {
    /// The JSON-RPC error code.
    pub code: i64,
    /// Short error description.
    #[serde(default)]
    pub message: String,
    /// Detailed error description.
    #[serde(default)]
    pub data: String,
}

/// The query succeeded but matched no records.
///
/// Every resource wrapper returns this same value instead of an empty
/// collection. It carries no data; compare by variant.
///
/// # Example
///
/// ```rust
/// use zabbix_api::clients::NotFoundError;
///
/// assert_eq!(
///     NotFoundError.to_string(),
///     "No results were found matching the given search parameters"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, Error, PartialEq, Eq)]
#[error("No results were found matching the given search parameters")]
pub struct NotFoundError;

/// Unified error type for all Zabbix API operations.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The HTTP exchange failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The server returned a JSON-RPC error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The query matched no records.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A string-encoded scalar in the response was malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The client configuration was invalid or incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request parameters could not be serialized.
    #[error("Failed to encode request parameters: {0}")]
    Encode(#[source] serde_json::Error),

    /// The server version could not be determined.
    #[error("Failed to retrieve Zabbix API version: {source}")]
    VersionDiscovery {
        /// The underlying failure.
        #[source]
        source: Box<RpcError>,
    },

    /// The `user.login` call failed.
    #[error("Error logging in to Zabbix API: {source}")]
    Login {
        /// The underlying failure.
        #[source]
        source: Box<RpcError>,
    },
}

impl RpcError {
    pub(crate) fn version_discovery(source: Self) -> Self {
        Self::VersionDiscovery {
            source: Box::new(source),
        }
    }

    pub(crate) fn login(source: Self) -> Self {
        Self::Login {
            source: Box::new(source),
        }
    }

    /// Returns the innermost error, skipping context wrappers.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::VersionDiscovery { source } | Self::Login { source } => source.root_cause(),
            other => other,
        }
    }

    /// Returns `true` if the query succeeded but matched nothing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns the server's JSON-RPC error, looking through context wrappers.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self.root_cause() {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}
