//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Zabbix JSON-RPC endpoint URL.
///
/// The URL must be absolute and use the `http` or `https` scheme. It is
/// normally the frontend URL ending in `/api_jsonrpc.php`. Surrounding
/// whitespace is trimmed.
///
/// # Serialization
///
/// `Endpoint` serializes to and deserializes from the URL string:
///
/// ```rust
/// use zabbix_api::Endpoint;
///
/// let endpoint = Endpoint::new("http://localhost/api_jsonrpc.php").unwrap();
/// let json = serde_json::to_string(&endpoint).unwrap();
/// assert_eq!(json, r#""http://localhost/api_jsonrpc.php""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    raw: String,
    url: Url,
}

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL cannot be parsed,
    /// is not `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidEndpoint { url: raw.clone() };

        let url = Url::parse(&raw).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid());
        }

        Ok(Self { raw, url })
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A Zabbix user password.
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`, so credentials held by a
/// [`SessionBuilder`](crate::auth::SessionBuilder) never reach logs.
///
/// # Example
///
/// ```rust
/// use zabbix_api::Password;
///
/// let password = Password::new("zabbix");
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// assert_eq!(password.as_ref(), "zabbix");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a password. Empty passwords are allowed; the server decides.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}
