//! Host group resource implementation.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{is_false, GetParameters, Related, SelectQuery};
use crate::resources::{Host, Resource};
use crate::types::ApiBool;

/// A group of hosts.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/hostgroup/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostGroup {
    #[serde(rename = "groupid")]
    pub group_id: String,
    pub name: String,
    /// 0 for a plain group, 4 for a discovered one.
    #[serde(with = "crate::types::numeric")]
    pub flags: i64,
    /// Internal groups cannot be deleted.
    pub internal: ApiBool,
    pub uuid: String,
    /// Only populated with [`HostGroupGetParams::select_hosts`].
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub hosts: Related<Host>,
}

impl Resource for HostGroup {
    type Params = HostGroupGetParams;

    const NAME: &'static str = "HostGroup";
    const METHOD: &'static str = "hostgroup.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HostGroupGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "groupids", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(rename = "itemids", skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,
    #[serde(rename = "maintenanceids", skip_serializing_if = "Vec::is_empty")]
    pub maintenance_ids: Vec<String>,
    #[serde(rename = "triggerids", skip_serializing_if = "Vec::is_empty")]
    pub trigger_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub monitored_hosts: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_hosts: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_items: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_monitored_items: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_triggers: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_monitored_triggers: bool,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,
}

impl Session {
    /// Queries host groups. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no host group matches.
    pub async fn get_host_groups(
        &self,
        params: &HostGroupGetParams,
    ) -> Result<Vec<HostGroup>, RpcError> {
        HostGroup::get(self, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_host_group() {
        let group: HostGroup = serde_json::from_value(json!({
            "groupid": "2",
            "name": "Linux servers",
            "flags": "0",
            "internal": "0",
            "uuid": "dc579cd7a1a34222933f24f52a68bcd8"
        }))
        .unwrap();

        assert_eq!(group.group_id, "2");
        assert_eq!(group.name, "Linux servers");
        assert!(!group.internal.get());
        assert!(group.hosts.is_empty());
    }

    #[test]
    fn test_params_serialization() {
        let params = HostGroupGetParams {
            common: GetParameters {
                output: Some(SelectQuery::Extend),
                ..Default::default()
            },
            with_hosts: true,
            select_hosts: Some(SelectQuery::Count),
            ..Default::default()
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            json!({"output": "extend", "with_hosts": true, "selectHosts": "count"})
        );
    }
}
