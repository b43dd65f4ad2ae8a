//! HTTP transport for Zabbix JSON-RPC communication.
//!
//! This module provides the [`HttpTransport`] type that POSTs encoded
//! JSON-RPC envelopes to the API endpoint.

use std::collections::HashMap;

use crate::clients::errors::TransportError;
use crate::config::ClientConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Content type of every JSON-RPC request body.
pub const CONTENT_TYPE_JSON_RPC: &str = "application/json-rpc";

/// The raw result of one HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// The complete response body.
    pub body: Vec<u8>,
}

/// HTTP transport for the Zabbix API.
///
/// The transport owns the default headers (`User-Agent`, `Accept`) and the
/// [`reqwest::Client`]. It knows nothing about JSON-RPC semantics: it sends
/// bytes with the JSON-RPC content type and returns the status and body.
///
/// # Thread Safety
///
/// `HttpTransport` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    default_headers: HashMap<String, String>,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport from an optional configuration.
    ///
    /// Uses the configured HTTP client if one was injected, otherwise builds
    /// a new one.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use zabbix_api::clients::HttpTransport;
    ///
    /// let transport = HttpTransport::new(None);
    /// assert!(transport.default_headers()["User-Agent"].starts_with("Zabbix API Library"));
    /// ```
    #[must_use]
    pub fn new(config: Option<&ClientConfig>) -> Self {
        let user_agent_prefix = config
            .and_then(ClientConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Zabbix API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = config.and_then(ClientConfig::http_client).map_or_else(
            || {
                reqwest::Client::builder()
                    .use_rustls_tls()
                    .build()
                    .expect("Failed to create HTTP client")
            },
            Clone::clone,
        );

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// POSTs a JSON-RPC body to `url`.
    ///
    /// When `bearer` is a non-empty token, it is sent as
    /// `Authorization: Bearer <token>`.
    ///
    /// Any status code is returned as a [`RawResponse`]; interpreting it is
    /// left to the caller.
    ///
    /// # Errors
    ///
    /// - [`TransportError::Network`] if the request cannot be sent
    /// - [`TransportError::Body`] if the response body cannot be read
    pub async fn post(
        &self,
        url: &reqwest::Url,
        body: Vec<u8>,
        bearer: Option<&str>,
    ) -> Result<RawResponse, TransportError> {
        let mut req_builder = self.client.post(url.clone());

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.header("Content-Type", CONTENT_TYPE_JSON_RPC);

        if let Some(token) = bearer.filter(|t| !t.is_empty()) {
            req_builder = req_builder.header("Authorization", format!("Bearer {token}"));
        }

        let res = req_builder.body(body).send().await?;
        let status = res.status().as_u16();
        let body = res.bytes().await.map_err(TransportError::Body)?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
