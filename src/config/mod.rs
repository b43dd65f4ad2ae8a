//! Configuration types for the Zabbix API client.
//!
//! This module provides the configuration a [`Session`](crate::Session) is
//! built from.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: transport settings shared by one or more sessions
//! - [`ClientConfigBuilder`]: a builder for constructing [`ClientConfig`] instances
//! - [`Endpoint`]: a validated JSON-RPC endpoint URL
//! - [`Password`]: a password with masked debug output
//!
//! There is no process-wide state: the HTTP client and the payload logging
//! switch are carried by the configuration and injected into each session.
//!
//! # Example
//!
//! ```rust
//! use zabbix_api::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .user_agent_prefix("inventory-sync/2.1")
//!     .log_payloads(true)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.log_payloads());
//! ```

mod newtypes;

pub use newtypes::{Endpoint, Password};

use crate::error::ConfigError;

/// Transport configuration for Zabbix API sessions.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`. Cloning is cheap; an
/// injected [`reqwest::Client`] is reference counted, so every session built
/// from clones of one configuration shares a single connection pool.
///
/// # Example
///
/// ```rust
/// use zabbix_api::ClientConfig;
///
/// let shared = reqwest::Client::new();
/// let config = ClientConfig::builder()
///     .http_client(shared)
///     .build()
///     .unwrap();
///
/// assert!(config.http_client().is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    user_agent_prefix: Option<String>,
    http_client: Option<reqwest::Client>,
    log_payloads: bool,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the injected HTTP client, if any.
    #[must_use]
    pub const fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }

    /// Returns whether request and response bodies are logged.
    ///
    /// When enabled, every call emits its JSON bodies through `tracing` at
    /// `DEBUG` level. Bodies of calls to legacy servers contain the session
    /// token.
    #[must_use]
    pub const fn log_payloads(&self) -> bool {
        self.log_payloads
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - `user_agent_prefix`: `None`
/// - `http_client`: `None` (each session builds its own client)
/// - `log_payloads`: `false`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    user_agent_prefix: Option<String>,
    http_client: Option<reqwest::Client>,
    log_payloads: bool,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prefix for the `User-Agent` header, e.g. `"my-app/1.0"`.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Injects the HTTP client used for all requests.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Enables or disables logging of request and response bodies.
    #[must_use]
    pub const fn log_payloads(mut self, enabled: bool) -> Self {
        self.log_payloads = enabled;
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUserAgentPrefix`] if the prefix contains
    /// characters that are not allowed in an HTTP header value.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        if let Some(prefix) = &self.user_agent_prefix {
            if !prefix.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
                return Err(ConfigError::InvalidUserAgentPrefix {
                    prefix: prefix.clone(),
                });
            }
        }

        Ok(ClientConfig {
            user_agent_prefix: self.user_agent_prefix,
            http_client: self.http_client,
            log_payloads: self.log_payloads,
        })
    }
}
