//! Host resource implementation.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{is_false, GetParameters, Related, SelectQuery, Tag, TagFilter};
use crate::resources::{HostGroup, HostInterface, Item, Resource, Trigger, UserMacro};
use crate::types::{ApiBool, UnixTimestamp};

/// A monitored device or template.
///
/// The related-object lists are only populated when the matching
/// `select_*` flag of [`HostGetParams`] is set.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/host/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
    #[serde(rename = "hostid")]
    pub host_id: String,
    /// Technical name.
    pub host: String,
    /// Visible name.
    pub name: String,
    pub description: String,
    /// 0 monitored, 1 unmonitored.
    #[serde(with = "crate::types::numeric")]
    pub status: i64,
    /// 0 plain host, 4 discovered host.
    #[serde(with = "crate::types::numeric")]
    pub flags: i64,
    /// `proxy_hostid` before 7.0.
    #[serde(rename = "proxyid", alias = "proxy_hostid")]
    pub proxy_id: String,
    #[serde(rename = "maintenanceid")]
    pub maintenance_id: String,
    pub maintenance_status: ApiBool,
    #[serde(with = "crate::types::numeric")]
    pub maintenance_type: i64,
    pub maintenance_from: UnixTimestamp,
    /// -1 disabled, 0 manual, 1 automatic.
    #[serde(with = "crate::types::numeric")]
    pub inventory_mode: i64,
    /// Returned by `selectGroups`, which 7.0 removed.
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub groups: Related<HostGroup>,
    /// Returned by `selectHostGroups` from 6.2.
    #[serde(rename = "hostgroups", skip_serializing_if = "Related::is_unset")]
    pub host_groups: Related<HostGroup>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub interfaces: Related<HostInterface>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub items: Related<Item>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub triggers: Related<Trigger>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub macros: Related<UserMacro>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub tags: Related<Tag>,
    #[serde(rename = "parentTemplates", skip_serializing_if = "Related::is_unset")]
    pub parent_templates: Related<HostTemplate>,
    /// Inventory fields. The server sends an empty array when inventory is
    /// disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<serde_json::Value>,
}

impl Host {
    /// Returns `true` if the host is monitored.
    #[must_use]
    pub const fn is_monitored(&self) -> bool {
        self.status == 0
    }
}

/// A template linked to a host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostTemplate {
    #[serde(rename = "templateid")]
    pub template_id: String,
    pub host: String,
    pub name: String,
}

impl Resource for Host {
    type Params = HostGetParams;

    const NAME: &'static str = "Host";
    const METHOD: &'static str = "host.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HostGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "groupids", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(rename = "interfaceids", skip_serializing_if = "Vec::is_empty")]
    pub interface_ids: Vec<String>,
    #[serde(rename = "itemids", skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,
    #[serde(rename = "maintenanceids", skip_serializing_if = "Vec::is_empty")]
    pub maintenance_ids: Vec<String>,
    #[serde(rename = "proxyids", skip_serializing_if = "Vec::is_empty")]
    pub proxy_ids: Vec<String>,
    #[serde(rename = "templateids", skip_serializing_if = "Vec::is_empty")]
    pub template_ids: Vec<String>,
    #[serde(rename = "triggerids", skip_serializing_if = "Vec::is_empty")]
    pub trigger_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub monitored_hosts: bool,
    /// Include templates in the result.
    #[serde(rename = "templated_hosts", skip_serializing_if = "is_false")]
    pub include_templates: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub proxy_hosts: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_items: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_monitored_items: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_triggers: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_monitored_triggers: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub severities: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagFilter>,
    /// Deprecated in 6.2 in favour of `select_host_groups`, removed in 7.0.
    #[serde(rename = "selectGroups", skip_serializing_if = "Option::is_none")]
    pub select_groups: Option<SelectQuery>,
    #[serde(rename = "selectHostGroups", skip_serializing_if = "Option::is_none")]
    pub select_host_groups: Option<SelectQuery>,
    #[serde(rename = "selectDiscoveries", skip_serializing_if = "Option::is_none")]
    pub select_discoveries: Option<SelectQuery>,
    #[serde(rename = "selectDiscoveryRule", skip_serializing_if = "Option::is_none")]
    pub select_discovery_rule: Option<SelectQuery>,
    #[serde(rename = "selectGraphs", skip_serializing_if = "Option::is_none")]
    pub select_graphs: Option<SelectQuery>,
    #[serde(rename = "selectHostDiscovery", skip_serializing_if = "Option::is_none")]
    pub select_host_discovery: Option<SelectQuery>,
    #[serde(rename = "selectHttpTests", skip_serializing_if = "Option::is_none")]
    pub select_web_scenarios: Option<SelectQuery>,
    #[serde(rename = "selectInterfaces", skip_serializing_if = "Option::is_none")]
    pub select_interfaces: Option<SelectQuery>,
    #[serde(rename = "selectInventory", skip_serializing_if = "Option::is_none")]
    pub select_inventory: Option<SelectQuery>,
    #[serde(rename = "selectItems", skip_serializing_if = "Option::is_none")]
    pub select_items: Option<SelectQuery>,
    #[serde(rename = "selectMacros", skip_serializing_if = "Option::is_none")]
    pub select_macros: Option<SelectQuery>,
    #[serde(rename = "selectParentTemplates", skip_serializing_if = "Option::is_none")]
    pub select_parent_templates: Option<SelectQuery>,
    #[serde(rename = "selectTags", skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<SelectQuery>,
    #[serde(rename = "selectTriggers", skip_serializing_if = "Option::is_none")]
    pub select_triggers: Option<SelectQuery>,
}

impl Session {
    /// Queries hosts. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no host matches.
    pub async fn get_hosts(&self, params: &HostGetParams) -> Result<Vec<Host>, RpcError> {
        Host::get(self, params).await
    }
}
