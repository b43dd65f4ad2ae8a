//! Connection builder.
//!
//! [`SessionBuilder`] restores a session from a [`SessionCache`] when a
//! usable one exists and logs in otherwise.

use std::fmt;
use std::sync::Arc;

use crate::auth::{Session, SessionCache};
use crate::clients::RpcError;
use crate::config::{ClientConfig, Endpoint, Password};
use crate::error::ConfigError;

/// Builder for connected [`Session`]s.
///
/// Created by [`Session::builder`].
///
/// # Example
///
/// ```rust,ignore
/// use zabbix_api::auth::SessionFileCache;
/// use zabbix_api::{Endpoint, Password, Session};
///
/// let session = Session::builder(Endpoint::new("http://localhost/api_jsonrpc.php")?)
///     .cache(SessionFileCache::new())
///     .credentials("Admin", Password::new("zabbix"))
///     .connect()
///     .await?;
/// ```
pub struct SessionBuilder {
    endpoint: Endpoint,
    config: Option<ClientConfig>,
    cache: Option<Arc<dyn SessionCache>>,
    credentials: Option<(String, Password)>,
}

impl SessionBuilder {
    pub(crate) const fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            config: None,
            cache: None,
            credentials: None,
        }
    }

    /// Sets the transport configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the cache sessions are restored from and saved to.
    #[must_use]
    pub fn cache(mut self, cache: impl SessionCache + 'static) -> Self {
        self.cache = Some(Arc::new(cache));
        self
    }

    /// Sets a shared cache.
    #[must_use]
    pub fn shared_cache(mut self, cache: Arc<dyn SessionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Sets the login credentials.
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: Password) -> Self {
        self.credentials = Some((username.into(), password));
        self
    }

    /// Returns a connected session.
    ///
    /// A fresh cached session for the same endpoint is restored without any
    /// network traffic. Otherwise the builder logs in and saves the new
    /// session to the cache. A failed save is logged and ignored.
    ///
    /// # Errors
    ///
    /// - [`RpcError::Config`] with [`ConfigError::MissingCredentials`] if a
    ///   login is needed and no credentials were set
    /// - any error of [`Session::login`]
    pub async fn connect(self) -> Result<Session, RpcError> {
        let config = self.config.as_ref();

        if let Some(cache) = &self.cache {
            if cache.has_session() {
                match cache.load() {
                    Ok(record) if record.url == self.endpoint => {
                        tracing::debug!(endpoint = %self.endpoint, "Restored Zabbix session from cache");
                        return Ok(Session::from_record(record, config));
                    }
                    Ok(record) => {
                        tracing::debug!(
                            cached = %record.url,
                            endpoint = %self.endpoint,
                            "Ignoring cached session for a different endpoint"
                        );
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to load cached Zabbix session");
                    }
                }
            }
        }

        let (username, password) = self
            .credentials
            .as_ref()
            .ok_or(ConfigError::MissingCredentials)?;

        let session = Session::new(self.endpoint.clone(), config);
        session.login(username, password.as_ref()).await?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.save(&session.record()) {
                tracing::warn!(error = %e, "Failed to save Zabbix session to cache");
            }
        }

        Ok(session)
    }
}

impl fmt::Debug for SessionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionBuilder")
            .field("endpoint", &self.endpoint)
            .field("config", &self.config)
            .field("cache", &self.cache.is_some())
            .field("username", &self.credentials.as_ref().map(|(u, _)| u))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::new("http://localhost/api_jsonrpc.php").unwrap()
    }

    #[tokio::test]
    async fn test_connect_without_cache_or_credentials_fails() {
        let result = Session::builder(endpoint()).connect().await;
        assert!(matches!(
            result,
            Err(RpcError::Config(ConfigError::MissingCredentials))
        ));
    }

    #[test]
    fn test_debug_hides_password() {
        let builder = Session::builder(endpoint()).credentials("Admin", Password::new("zabbix"));
        let debug = format!("{builder:?}");

        assert!(debug.contains("Admin"));
        assert!(!debug.contains("zabbix\""));
    }
}
