//! Host interface resource implementation.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{GetParameters, Related, SelectQuery};
use crate::resources::{Host, Item, Resource};
use crate::types::ApiBool;

/// The kind of agent or protocol an interface is polled with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InterfaceType {
    #[default]
    Agent,
    Snmp,
    Ipmi,
    Jmx,
    /// A type code this library does not know.
    Other(i64),
}

impl From<i64> for InterfaceType {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Agent,
            2 => Self::Snmp,
            3 => Self::Ipmi,
            4 => Self::Jmx,
            other => Self::Other(other),
        }
    }
}

/// A network interface of a host.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/hostinterface/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInterface {
    #[serde(rename = "interfaceid")]
    pub interface_id: String,
    #[serde(rename = "hostid")]
    pub host_id: String,
    pub dns: String,
    pub ip: String,
    pub port: String,
    /// Whether this is the default interface of its type on the host.
    pub main: ApiBool,
    /// Connect by IP address instead of DNS name.
    #[serde(rename = "useip")]
    pub use_ip: ApiBool,
    #[serde(rename = "type", with = "crate::types::numeric")]
    pub kind: i64,
    /// 0 unknown, 1 available, 2 unavailable.
    #[serde(with = "crate::types::numeric")]
    pub available: i64,
    pub error: String,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub hosts: Related<Host>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub items: Related<Item>,
}

impl HostInterface {
    /// Returns the decoded interface type.
    #[must_use]
    pub fn interface_type(&self) -> InterfaceType {
        InterfaceType::from(self.kind)
    }
}

impl Resource for HostInterface {
    type Params = HostInterfaceGetParams;

    const NAME: &'static str = "HostInterface";
    const METHOD: &'static str = "hostinterface.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HostInterfaceGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(rename = "interfaceids", skip_serializing_if = "Vec::is_empty")]
    pub interface_ids: Vec<String>,
    #[serde(rename = "itemids", skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,
    #[serde(rename = "triggerids", skip_serializing_if = "Vec::is_empty")]
    pub trigger_ids: Vec<String>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,
    #[serde(rename = "selectItems", skip_serializing_if = "Option::is_none")]
    pub select_items: Option<SelectQuery>,
}

impl Session {
    /// Queries host interfaces. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no interface matches.
    pub async fn get_host_interfaces(
        &self,
        params: &HostInterfaceGetParams,
    ) -> Result<Vec<HostInterface>, RpcError> {
        HostInterface::get(self, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_interface() {
        let interface: HostInterface = serde_json::from_value(json!({
            "interfaceid": "1",
            "hostid": "10084",
            "main": "1",
            "type": "1",
            "useip": "1",
            "ip": "127.0.0.1",
            "dns": "",
            "port": "10050",
            "available": "1",
            "error": ""
        }))
        .unwrap();

        assert_eq!(interface.interface_id, "1");
        assert!(interface.main.get());
        assert!(interface.use_ip.get());
        assert_eq!(interface.interface_type(), InterfaceType::Agent);
        assert_eq!(interface.available, 1);
    }

    #[test]
    fn test_unknown_interface_type() {
        assert_eq!(InterfaceType::from(9), InterfaceType::Other(9));
        assert_eq!(InterfaceType::from(2), InterfaceType::Snmp);
    }
}
