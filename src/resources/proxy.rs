//! Proxy resource implementation.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{GetParameters, Related, SelectQuery};
use crate::resources::{Host, Resource};
use crate::types::UnixTimestamp;

/// A Zabbix proxy collecting data on behalf of the server.
///
/// Field names follow 7.0; the pre-7.0 names are accepted as aliases.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/proxy/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proxy {
    #[serde(rename = "proxyid")]
    pub proxy_id: String,
    /// `host` before 7.0.
    #[serde(alias = "host")]
    pub name: String,
    pub description: String,
    /// 0 active, 1 passive. Before 7.0 `status`: 5 active, 6 passive.
    #[serde(alias = "status", with = "crate::types::numeric")]
    pub operating_mode: i64,
    #[serde(rename = "lastaccess")]
    pub last_access: UnixTimestamp,
    pub address: String,
    pub port: String,
    pub version: String,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub hosts: Related<Host>,
}

impl Resource for Proxy {
    type Params = ProxyGetParams;

    const NAME: &'static str = "Proxy";
    const METHOD: &'static str = "proxy.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProxyGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "proxyids", skip_serializing_if = "Vec::is_empty")]
    pub proxy_ids: Vec<String>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,
    /// Only before 7.0.
    #[serde(rename = "selectInterface", skip_serializing_if = "Option::is_none")]
    pub select_interface: Option<SelectQuery>,
}

impl Session {
    /// Queries proxies. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no proxy matches.
    pub async fn get_proxies(&self, params: &ProxyGetParams) -> Result<Vec<Proxy>, RpcError> {
        Proxy::get(self, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_current_proxy() {
        let proxy: Proxy = serde_json::from_value(json!({
            "proxyid": "10451",
            "name": "Proxy 1",
            "operating_mode": "0",
            "lastaccess": "1683642493",
            "version": "70000"
        }))
        .unwrap();

        assert_eq!(proxy.name, "Proxy 1");
        assert_eq!(proxy.operating_mode, 0);
    }

    #[test]
    fn test_deserialize_legacy_proxy() {
        let proxy: Proxy = serde_json::from_value(json!({
            "proxyid": "10452",
            "host": "Legacy proxy",
            "status": "5",
            "lastaccess": "0"
        }))
        .unwrap();

        assert_eq!(proxy.proxy_id, "10452");
        assert_eq!(proxy.name, "Legacy proxy");
        assert_eq!(proxy.operating_mode, 5);
        assert!(proxy.last_access.is_epoch());
    }
}
