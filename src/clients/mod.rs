//! JSON-RPC client layer for the Zabbix API.
//!
//! This module provides the envelope types and the HTTP transport a
//! [`Session`](crate::Session) uses to talk to the server.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RpcRequest`]: an outgoing JSON-RPC 2.0 request
//! - [`RpcResponse`]: a decoded JSON-RPC 2.0 response
//! - [`HttpTransport`]: the async HTTP layer
//! - [`RpcError`]: the unified error returned by every call
//!
//! # Example
//!
//! ```rust,ignore
//! use zabbix_api::clients::RpcRequest;
//! use zabbix_api::{AuthMode, Endpoint, Session};
//!
//! let session = Session::new(Endpoint::new("http://localhost/api_jsonrpc.php")?, None);
//!
//! let request = RpcRequest::without_params("apiinfo.version");
//! let response = session.execute(request, AuthMode::Anonymous).await?;
//! let version: String = response.bind()?;
//! ```

mod errors;
mod http_client;
mod rpc_request;
mod rpc_response;

pub use errors::{ApiError, DecodeError, NotFoundError, RpcError, TransportError};
pub use http_client::{HttpTransport, RawResponse, CONTENT_TYPE_JSON_RPC, SDK_VERSION};
pub use rpc_request::{RpcRequest, JSONRPC_VERSION};
pub use rpc_response::RpcResponse;
