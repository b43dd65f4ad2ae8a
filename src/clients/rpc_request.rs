//! JSON-RPC request envelopes.
//!
//! This module provides the [`RpcRequest`] type sent to the Zabbix API.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::clients::errors::RpcError;

/// The JSON-RPC protocol version written into every request.
pub const JSONRPC_VERSION: &str = "2.0";

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

fn next_request_id() -> u64 {
    NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed)
}

/// A JSON-RPC 2.0 request to the Zabbix API.
///
/// Every request receives a process-wide unique, increasing `id`. The `auth`
/// field is only serialized when set; [`Session`](crate::Session) sets it
/// for servers older than 6.4, which do not read the `Authorization` header.
///
/// Requests are built fresh for each call and consumed when sent.
///
/// # Example
///
/// ```rust
/// use zabbix_api::clients::RpcRequest;
/// use serde_json::json;
///
/// let request = RpcRequest::new("host.get", &json!({"output": ["hostid"]})).unwrap();
/// let body = serde_json::to_value(&request).unwrap();
///
/// assert_eq!(body["jsonrpc"], "2.0");
/// assert_eq!(body["method"], "host.get");
/// assert!(body.get("auth").is_none());
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct RpcRequest {
    jsonrpc: &'static str,
    /// The remote method, e.g. `host.get`.
    pub method: String,
    /// The method parameters.
    pub params: serde_json::Value,
    /// Correlation identifier, unique within the process.
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth: Option<String>,
}

impl RpcRequest {
    /// Creates a request with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::Encode`] if `params` cannot be represented as JSON.
    pub fn new<P>(method: impl Into<String>, params: &P) -> Result<Self, RpcError>
    where
        P: Serialize + ?Sized,
    {
        let params = serde_json::to_value(params).map_err(RpcError::Encode)?;
        Ok(Self::with_value(method, params))
    }

    /// Creates a request for a method that takes no parameters.
    ///
    /// The parameters are sent as an empty array.
    #[must_use]
    pub fn without_params(method: impl Into<String>) -> Self {
        Self::with_value(method, serde_json::Value::Array(Vec::new()))
    }

    fn with_value(method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.into(),
            params,
            id: next_request_id(),
            auth: None,
        }
    }

    /// Returns the token embedded in the request body, if any.
    #[must_use]
    pub fn auth(&self) -> Option<&str> {
        self.auth.as_deref()
    }

    /// Embeds a token in the request body. Empty tokens are not embedded.
    pub fn set_auth(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.auth = if token.is_empty() { None } else { Some(token) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let request = RpcRequest::new("user.login", &json!({"username": "Admin"})).unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["method"], "user.login");
        assert_eq!(body["params"]["username"], "Admin");
        assert_eq!(body["id"], request.id);
        assert!(body.get("auth").is_none());
    }

    #[test]
    fn test_ids_increase() {
        let first = RpcRequest::without_params("apiinfo.version");
        let second = RpcRequest::without_params("apiinfo.version");
        assert!(second.id > first.id);
    }

    #[test]
    fn test_without_params_sends_empty_array() {
        let request = RpcRequest::without_params("apiinfo.version");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["params"], json!([]));
    }

    #[test]
    fn test_auth_field_is_emitted_when_set() {
        let mut request = RpcRequest::without_params("host.get");
        request.set_auth("0424bd59b807674191e7d77572075f33");

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["auth"], "0424bd59b807674191e7d77572075f33");
        assert_eq!(request.auth(), Some("0424bd59b807674191e7d77572075f33"));
    }

    #[test]
    fn test_empty_auth_is_omitted() {
        let mut request = RpcRequest::without_params("host.get");
        request.set_auth("");

        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("auth").is_none());
    }

    #[test]
    fn test_unencodable_params_fail() {
        use std::collections::HashMap;

        // JSON object keys must be strings
        let mut params = HashMap::new();
        params.insert(vec![1u8], "value");

        let result = RpcRequest::new("host.get", &params);
        assert!(matches!(result, Err(RpcError::Encode(_))));
    }
}
