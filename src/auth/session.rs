//! Session management for Zabbix API authentication.
//!
//! This module provides the [`Session`] type, which owns the endpoint, the
//! authentication token and the discovered server version, and adapts every
//! call to the protocol differences between Zabbix releases.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::builder::SessionBuilder;
use crate::clients::{HttpTransport, RpcError, RpcRequest, RpcResponse};
use crate::config::{ClientConfig, Endpoint};
use crate::types::Version;

/// Whether a call carries the session's credentials.
///
/// Only `apiinfo.version` and `user.login` are called anonymously.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
    /// Attach the session token.
    #[default]
    Required,
    /// Send the call without any credentials.
    Anonymous,
}

/// First version that names the login parameter `username` instead of `user`.
fn username_param_since() -> Version {
    Version::from([6, 0, 0])
}

/// First version that no longer reads the token from the request body.
fn header_only_auth_since() -> Version {
    Version::from([6, 4, 0])
}

/// A persisted session: endpoint, token and the known server version.
///
/// Serializes with the keys `url`, `token` and `apiVersion`, and is the
/// value stored by a [`SessionCache`](crate::auth::SessionCache).
///
/// # Example
///
/// ```rust
/// use zabbix_api::auth::SessionRecord;
///
/// let record: SessionRecord = serde_json::from_str(
///     r#"{"url":"http://localhost/api_jsonrpc.php","token":"abc","apiVersion":"7.0.0"}"#,
/// ).unwrap();
///
/// assert_eq!(record.token, "abc");
/// assert_eq!(record.api_version.unwrap().to_string(), "7.0.0");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The JSON-RPC endpoint the token was issued by.
    pub url: Endpoint,
    /// The authentication token.
    pub token: String,
    /// The server version, if it had been discovered.
    #[serde(rename = "apiVersion", default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<Version>,
}

impl fmt::Debug for SessionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRecord")
            .field("url", &self.url)
            .field("token", &"*****")
            .field("api_version", &self.api_version)
            .finish()
    }
}

#[derive(Clone, Debug, Default)]
struct SessionState {
    token: String,
    api_version: Option<Version>,
}

/// An authenticated connection to a Zabbix API endpoint.
///
/// A session starts unauthenticated. [`login`](Self::login) stores a token;
/// [`get_version`](Self::get_version) discovers and caches the server
/// version on first use. Every authenticated call then adapts to that
/// version:
///
/// - below 6.0 the login name is sent as `user`, from 6.0 as `username`
/// - below 6.4 the token is embedded in the request body `auth` field
/// - once a token is set it is sent as `Authorization: Bearer <token>`;
///   before login no `Authorization` header is sent
///
/// Each call is exactly one HTTP round trip. Nothing is retried.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`. The token and version sit behind a lock that
/// is never held across an await, so a session can be shared through an
/// `Arc` by many tasks. Concurrent first calls may each query the version;
/// they all store the same value.
///
/// # Example
///
/// ```rust,ignore
/// use zabbix_api::resources::HostGetParams;
/// use zabbix_api::{Endpoint, Session};
///
/// let endpoint = Endpoint::new("http://localhost/api_jsonrpc.php")?;
/// let session = Session::connect(endpoint, None, "Admin", "zabbix").await?;
///
/// let hosts = session.get_hosts(&HostGetParams::default()).await?;
/// ```
pub struct Session {
    endpoint: Endpoint,
    transport: HttpTransport,
    log_payloads: bool,
    state: RwLock<SessionState>,
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

impl Session {
    /// Creates an unauthenticated session.
    ///
    /// No request is sent until the first call.
    #[must_use]
    pub fn new(endpoint: Endpoint, config: Option<&ClientConfig>) -> Self {
        Self {
            endpoint,
            transport: HttpTransport::new(config),
            log_payloads: config.is_some_and(ClientConfig::log_payloads),
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Creates a session and logs in.
    ///
    /// # Errors
    ///
    /// Returns the error of [`login`](Self::login).
    pub async fn connect(
        endpoint: Endpoint,
        config: Option<&ClientConfig>,
        username: &str,
        password: &str,
    ) -> Result<Self, RpcError> {
        let session = Self::new(endpoint, config);
        session.login(username, password).await?;
        Ok(session)
    }

    /// Restores a session from a persisted record without contacting the
    /// server.
    #[must_use]
    pub fn from_record(record: SessionRecord, config: Option<&ClientConfig>) -> Self {
        let session = Self::new(record.url, config);
        *session.state_mut() = SessionState {
            token: record.token,
            api_version: record.api_version,
        };
        session
    }

    /// Returns a builder that restores a cached session or logs in.
    #[must_use]
    pub fn builder(endpoint: Endpoint) -> SessionBuilder {
        SessionBuilder::new(endpoint)
    }

    /// Returns the JSON-RPC endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the current authentication token. Empty before login.
    #[must_use]
    pub fn auth_token(&self) -> String {
        self.state().token.clone()
    }

    /// Returns the cached server version without querying the server.
    #[must_use]
    pub fn api_version(&self) -> Option<Version> {
        self.state().api_version.clone()
    }

    /// Returns a snapshot of this session for persistence.
    #[must_use]
    pub fn record(&self) -> SessionRecord {
        let state = self.state();
        SessionRecord {
            url: self.endpoint.clone(),
            token: state.token.clone(),
            api_version: state.api_version.clone(),
        }
    }

    /// Returns the server version, querying `apiinfo.version` on first use.
    ///
    /// A successful result is cached for the life of the session; failures
    /// are not.
    ///
    /// # Errors
    ///
    /// Returns any transport, decode or API error of the call, or
    /// [`RpcError::Parse`] if the server reports a malformed version.
    pub async fn get_version(&self) -> Result<Version, RpcError> {
        if let Some(version) = self.api_version() {
            return Ok(version);
        }

        let request = RpcRequest::without_params("apiinfo.version");
        let response = self.send(&request, None).await?;
        let raw: String = response.bind()?;
        let version: Version = raw.parse()?;

        tracing::debug!(endpoint = %self.endpoint, version = %version, "Discovered Zabbix API version");
        self.state_mut().api_version = Some(version.clone());
        Ok(version)
    }

    /// Logs in and stores the returned token.
    ///
    /// Discovers the server version first to pick the login parameter name.
    /// A repeated login replaces the token.
    ///
    /// # Errors
    ///
    /// - [`RpcError::VersionDiscovery`] if the version cannot be determined
    /// - [`RpcError::Login`] if `user.login` fails or returns no token
    pub async fn login(&self, username: &str, password: &str) -> Result<(), RpcError> {
        let version = self
            .get_version()
            .await
            .map_err(RpcError::version_discovery)?;

        let user_key = if version < username_param_since() {
            "user"
        } else {
            "username"
        };
        let mut params = serde_json::Map::new();
        params.insert(user_key.to_string(), username.into());
        params.insert("password".to_string(), password.into());

        let token = async {
            let request = RpcRequest::new("user.login", &params)?;
            let response = self.execute(request, AuthMode::Anonymous).await?;
            response.bind::<String>()
        }
        .await
        .map_err(RpcError::login)?;

        tracing::debug!(endpoint = %self.endpoint, user = username, "Logged in to Zabbix API");
        self.state_mut().token = token;
        Ok(())
    }

    /// Sends a request and returns the decoded response.
    ///
    /// With [`AuthMode::Required`] the version is discovered first, then the
    /// token is attached as the version requires. With
    /// [`AuthMode::Anonymous`] no credentials are sent.
    ///
    /// # Errors
    ///
    /// - [`RpcError::VersionDiscovery`] if the version cannot be determined
    /// - [`RpcError::Transport`] or [`RpcError::Decode`] if the exchange fails
    /// - [`RpcError::Api`] if the server returns an error object
    pub async fn execute(
        &self,
        mut request: RpcRequest,
        auth: AuthMode,
    ) -> Result<RpcResponse, RpcError> {
        let token = match auth {
            AuthMode::Anonymous => None,
            AuthMode::Required => {
                let version = self
                    .get_version()
                    .await
                    .map_err(RpcError::version_discovery)?;
                let token = self.auth_token();
                if version < header_only_auth_since() {
                    request.set_auth(token.clone());
                }
                Some(token)
            }
        };

        let response = self.send(&request, token.as_deref()).await?;
        if let Some(error) = response.api_error() {
            return Err(error.clone().into());
        }
        Ok(response)
    }

    /// Calls an authenticated method and binds its result.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`execute`](Self::execute), or
    /// [`RpcError::Decode`] if the result does not match `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde_json::{json, Value};
    ///
    /// let groups: Vec<Value> = session
    ///     .get("hostgroup.get", &json!({"output": ["groupid", "name"]}))
    ///     .await?;
    /// ```
    pub async fn get<P, T>(&self, method: &str, params: &P) -> Result<T, RpcError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = RpcRequest::new(method, params)?;
        let response = self.execute(request, AuthMode::Required).await?;
        response.bind()
    }

    async fn send(
        &self,
        request: &RpcRequest,
        bearer: Option<&str>,
    ) -> Result<RpcResponse, RpcError> {
        let body = serde_json::to_vec(request).map_err(RpcError::Encode)?;

        tracing::debug!(method = %request.method, id = request.id, "Calling Zabbix API");
        if self.log_payloads {
            tracing::debug!(
                method = %request.method,
                id = request.id,
                body = %String::from_utf8_lossy(&body),
                "Request payload"
            );
        }

        let raw = self
            .transport
            .post(self.endpoint.url(), body, bearer)
            .await?;

        tracing::debug!(method = %request.method, id = request.id, status = raw.status, "Received response");
        if self.log_payloads {
            tracing::debug!(
                method = %request.method,
                id = request.id,
                body = %String::from_utf8_lossy(&raw.body),
                "Response payload"
            );
        }

        RpcResponse::from_http(raw.status, &raw.body)
    }

    fn state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Session")
            .field("endpoint", &self.endpoint)
            .field(
                "auth_token",
                &if state.token.is_empty() { "" } else { "*****" },
            )
            .field("api_version", &state.api_version)
            .field("log_payloads", &self.log_payloads)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::new("http://localhost/api_jsonrpc.php").unwrap()
    }

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::new(endpoint(), None);
        assert!(session.auth_token().is_empty());
        assert!(session.api_version().is_none());
        assert_eq!(session.endpoint().as_ref(), "http://localhost/api_jsonrpc.php");
    }

    #[test]
    fn test_from_record_restores_state() {
        let record = SessionRecord {
            url: endpoint(),
            token: "0424bd59b807674191e7d77572075f33".to_string(),
            api_version: Some(Version::from([5, 4, 12])),
        };

        let session = Session::from_record(record.clone(), None);
        assert_eq!(session.auth_token(), record.token);
        assert_eq!(session.api_version(), Some(Version::from([5, 4, 12])));
        assert_eq!(session.record(), record);
    }

    #[test]
    fn test_record_json_keys() {
        let record = SessionRecord {
            url: endpoint(),
            token: "abc".to_string(),
            api_version: Some(Version::from([6, 4, 0])),
        };
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["url"], "http://localhost/api_jsonrpc.php");
        assert_eq!(json["token"], "abc");
        assert_eq!(json["apiVersion"], "6.4.0");
    }

    #[test]
    fn test_record_without_version() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"url":"http://localhost/api_jsonrpc.php","token":"abc"}"#)
                .unwrap();
        assert!(record.api_version.is_none());
    }

    #[test]
    fn test_debug_masks_token() {
        let record = SessionRecord {
            url: endpoint(),
            token: "super-secret-token".to_string(),
            api_version: None,
        };
        assert!(!format!("{record:?}").contains("super-secret-token"));

        let session = Session::from_record(record, None);
        let debug = format!("{session:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_version_thresholds() {
        assert!(Version::from([5, 4]) < username_param_since());
        assert!(Version::from([6, 0]) >= username_param_since());
        assert!(Version::from([6, 2, 9]) < header_only_auth_since());
        assert!(Version::from([6, 4]) >= header_only_auth_since());
    }

    #[test]
    fn test_auth_mode_default_is_required() {
        assert_eq!(AuthMode::default(), AuthMode::Required);
    }

    #[test]
    fn test_session_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }
}
