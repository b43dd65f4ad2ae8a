//! JSON-RPC response envelopes.
//!
//! This module provides the [`RpcResponse`] type decoded from every Zabbix
//! API reply, and the classification of undecodable replies into transport
//! or decode errors.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::errors::{ApiError, DecodeError, RpcError, TransportError};

/// A decoded JSON-RPC response.
///
/// A response holds either a `result` payload or an [`ApiError`]. Check
/// [`api_error`](Self::api_error) first, then [`bind`](Self::bind) the result
/// into the expected type. `bind` refuses to run on an error response.
///
/// # Example
///
/// ```rust
/// use zabbix_api::clients::RpcResponse;
///
/// let response = RpcResponse::from_http(200, br#"{"jsonrpc":"2.0","result":"7.0.0","id":1}"#).unwrap();
/// assert!(response.api_error().is_none());
///
/// let version: String = response.bind().unwrap();
/// assert_eq!(version, "7.0.0");
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct RpcResponse {
    /// The HTTP status code of the exchange.
    #[serde(skip)]
    pub status_code: u16,
    /// The protocol version echoed by the server.
    #[serde(default)]
    pub jsonrpc: String,
    /// The request identifier echoed by the server.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<ApiError>,
}

impl RpcResponse {
    /// Decodes a response from an HTTP status code and body.
    ///
    /// # Errors
    ///
    /// - [`TransportError::Status`] if the status is not 2xx and the body
    ///   does not carry a JSON-RPC error object
    /// - [`DecodeError`] if a 2xx body is not a JSON-RPC envelope
    pub fn from_http(status_code: u16, body: &[u8]) -> Result<Self, RpcError> {
        let success = (200..300).contains(&status_code);
        let status_error = || TransportError::Status {
            code: status_code,
            body: String::from_utf8_lossy(body).into_owned(),
        };

        match serde_json::from_slice::<Self>(body) {
            Ok(mut response) => {
                if !success && response.error.is_none() {
                    return Err(status_error().into());
                }
                response.status_code = status_code;
                Ok(response)
            }
            Err(_) if !success => Err(status_error().into()),
            Err(e) => Err(DecodeError::new("JSON response body", e).into()),
        }
    }

    /// Returns the server's error object, if the call failed.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Returns the raw result payload, if present.
    #[must_use]
    pub const fn result(&self) -> Option<&serde_json::Value> {
        self.result.as_ref()
    }

    /// Deserializes the result payload into `T`.
    ///
    /// A missing result binds as JSON `null`.
    ///
    /// # Errors
    ///
    /// - [`RpcError::Api`] if this is an error response
    /// - [`RpcError::Decode`] if the result does not match `T`
    pub fn bind<T: DeserializeOwned>(&self) -> Result<T, RpcError> {
        if let Some(error) = &self.error {
            return Err(error.clone().into());
        }

        let decoded = match &self.result {
            Some(value) => T::deserialize(value),
            None => T::deserialize(&serde_json::Value::Null),
        };
        decoded.map_err(|e| DecodeError::new("result payload", e).into())
    }
}
