//! Item resource implementation.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{is_false, GetParameters, Related, SelectQuery, Tag, TagFilter};
use crate::resources::{Host, HostInterface, Resource, Trigger};
use crate::types::UnixTimestamp;

/// A monitored metric on a host.
///
/// `delay`, `history` and `trends` are kept as text since they may hold
/// user macros such as `{$INTERVAL}`.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/item/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(rename = "itemid")]
    pub item_id: String,
    #[serde(rename = "hostid")]
    pub host_id: String,
    #[serde(rename = "interfaceid")]
    pub interface_id: String,
    pub name: String,
    #[serde(rename = "key_")]
    pub key: String,
    pub description: String,
    #[serde(rename = "type", with = "crate::types::numeric")]
    pub kind: i64,
    /// 0 float, 1 character, 2 log, 3 unsigned, 4 text.
    #[serde(with = "crate::types::numeric")]
    pub value_type: i64,
    pub delay: String,
    pub history: String,
    pub trends: String,
    pub units: String,
    /// 0 enabled, 1 disabled.
    #[serde(with = "crate::types::numeric")]
    pub status: i64,
    /// 0 normal, 1 not supported.
    #[serde(with = "crate::types::numeric")]
    pub state: i64,
    pub error: String,
    #[serde(rename = "lastclock")]
    pub last_clock: UnixTimestamp,
    #[serde(rename = "lastvalue")]
    pub last_value: String,
    #[serde(rename = "prevvalue")]
    pub prev_value: String,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub tags: Related<Tag>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub hosts: Related<Host>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub interfaces: Related<HostInterface>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub triggers: Related<Trigger>,
}

impl Resource for Item {
    type Params = ItemGetParams;

    const NAME: &'static str = "Item";
    const METHOD: &'static str = "item.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ItemGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "itemids", skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,
    #[serde(rename = "groupids", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(rename = "templateids", skip_serializing_if = "Vec::is_empty")]
    pub template_ids: Vec<String>,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(rename = "proxyids", skip_serializing_if = "Vec::is_empty")]
    pub proxy_ids: Vec<String>,
    #[serde(rename = "interfaceids", skip_serializing_if = "Vec::is_empty")]
    pub interface_ids: Vec<String>,
    #[serde(rename = "graphids", skip_serializing_if = "Vec::is_empty")]
    pub graph_ids: Vec<String>,
    #[serde(rename = "triggerids", skip_serializing_if = "Vec::is_empty")]
    pub trigger_ids: Vec<String>,
    /// Include web monitoring items.
    #[serde(rename = "webitems", skip_serializing_if = "is_false")]
    pub web_items: bool,
    #[serde(rename = "inherited", skip_serializing_if = "is_false")]
    pub inherited_only: bool,
    #[serde(rename = "templated", skip_serializing_if = "is_false")]
    pub templated_only: bool,
    #[serde(rename = "monitored", skip_serializing_if = "is_false")]
    pub monitored_only: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_triggers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagFilter>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,
    #[serde(rename = "selectInterfaces", skip_serializing_if = "Option::is_none")]
    pub select_interfaces: Option<SelectQuery>,
    #[serde(rename = "selectTriggers", skip_serializing_if = "Option::is_none")]
    pub select_triggers: Option<SelectQuery>,
    #[serde(rename = "selectTags", skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<SelectQuery>,
}

impl Session {
    /// Queries items. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no item matches.
    pub async fn get_items(&self, params: &ItemGetParams) -> Result<Vec<Item>, RpcError> {
        Item::get(self, params).await
    }
}
