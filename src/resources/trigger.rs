//! Trigger resource implementation.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{is_false, GetParameters, Related, SelectQuery, Tag, TagFilter};
use crate::resources::{Event, Host, HostGroup, Item, Resource};
use crate::types::UnixTimestamp;

/// Trigger severity, ordered from least to most severe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TriggerSeverity {
    #[default]
    NotClassified,
    Information,
    Warning,
    Average,
    High,
    Disaster,
}

impl TriggerSeverity {
    /// Maps the API's `priority` code, or `None` if it is out of range.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::NotClassified),
            1 => Some(Self::Information),
            2 => Some(Self::Warning),
            3 => Some(Self::Average),
            4 => Some(Self::High),
            5 => Some(Self::Disaster),
            _ => None,
        }
    }

    /// Returns the API's `priority` code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }
}

/// A problem expression evaluated over item values.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/trigger/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trigger {
    #[serde(rename = "triggerid")]
    pub trigger_id: String,
    /// The trigger name.
    pub description: String,
    pub expression: String,
    pub comments: String,
    /// 0 OK, 1 problem.
    #[serde(with = "crate::types::numeric")]
    pub value: i64,
    #[serde(with = "crate::types::numeric")]
    pub priority: i64,
    /// 0 enabled, 1 disabled.
    #[serde(with = "crate::types::numeric")]
    pub status: i64,
    /// 0 up to date, 1 unknown.
    #[serde(with = "crate::types::numeric")]
    pub state: i64,
    #[serde(rename = "lastchange")]
    pub last_change: UnixTimestamp,
    pub error: String,
    pub url: String,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub hosts: Related<Host>,
    /// Returned by `selectGroups`, which 7.0 removed.
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub groups: Related<HostGroup>,
    /// Returned by `selectHostGroups` from 6.2.
    #[serde(rename = "hostgroups", skip_serializing_if = "Related::is_unset")]
    pub host_groups: Related<HostGroup>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub items: Related<Item>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub tags: Related<Tag>,
    #[serde(
        rename = "lastEvent",
        deserialize_with = "last_event",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_event: Option<Box<Event>>,
}

impl Trigger {
    /// Returns the decoded severity.
    #[must_use]
    pub const fn severity(&self) -> Option<TriggerSeverity> {
        TriggerSeverity::from_code(self.priority)
    }

    /// Returns `true` if the trigger is in the problem state.
    #[must_use]
    pub const fn is_problem(&self) -> bool {
        self.value == 1
    }
}

// The server sends an empty array instead of an object when there is no event.
fn last_event<'de, D>(deserializer: D) -> Result<Option<Box<Event>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl Resource for Trigger {
    type Params = TriggerGetParams;

    const NAME: &'static str = "Trigger";
    const METHOD: &'static str = "trigger.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TriggerGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "triggerids", skip_serializing_if = "Vec::is_empty")]
    pub trigger_ids: Vec<String>,
    #[serde(rename = "groupids", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(rename = "templateids", skip_serializing_if = "Vec::is_empty")]
    pub template_ids: Vec<String>,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(rename = "itemids", skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(rename = "inherited", skip_serializing_if = "is_false")]
    pub inherited_only: bool,
    #[serde(rename = "templated", skip_serializing_if = "is_false")]
    pub templated_only: bool,
    #[serde(rename = "monitored", skip_serializing_if = "is_false")]
    pub monitored_only: bool,
    #[serde(rename = "active", skip_serializing_if = "is_false")]
    pub active_only: bool,
    #[serde(rename = "maintenance", skip_serializing_if = "is_false")]
    pub maintenance_only: bool,
    #[serde(rename = "withUnacknowledgedEvents", skip_serializing_if = "is_false")]
    pub with_unacknowledged_events: bool,
    #[serde(rename = "withAcknowledgedEvents", skip_serializing_if = "is_false")]
    pub with_acknowledged_events: bool,
    #[serde(rename = "withLastEventUnacknowledged", skip_serializing_if = "is_false")]
    pub with_last_event_unacknowledged: bool,
    #[serde(rename = "skipDependent", skip_serializing_if = "is_false")]
    pub skip_dependent: bool,
    /// Return only triggers that have recently been in a problem state.
    #[serde(rename = "only_true", skip_serializing_if = "is_false")]
    pub recent_problem_only: bool,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "severity_code")]
    pub min_severity: Option<TriggerSeverity>,
    #[serde(rename = "lastChangeSince", skip_serializing_if = "Option::is_none")]
    pub last_change_since: Option<UnixTimestamp>,
    #[serde(rename = "lastChangeTill", skip_serializing_if = "Option::is_none")]
    pub last_change_till: Option<UnixTimestamp>,
    #[serde(rename = "expandComment", skip_serializing_if = "is_false")]
    pub expand_comment: bool,
    #[serde(rename = "expandDescription", skip_serializing_if = "is_false")]
    pub expand_description: bool,
    #[serde(rename = "expandExpression", skip_serializing_if = "is_false")]
    pub expand_expression: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagFilter>,
    /// Deprecated in 6.2 in favour of `select_host_groups`, removed in 7.0.
    #[serde(rename = "selectGroups", skip_serializing_if = "Option::is_none")]
    pub select_groups: Option<SelectQuery>,
    #[serde(rename = "selectHostGroups", skip_serializing_if = "Option::is_none")]
    pub select_host_groups: Option<SelectQuery>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,
    #[serde(rename = "selectItems", skip_serializing_if = "Option::is_none")]
    pub select_items: Option<SelectQuery>,
    #[serde(rename = "selectFunctions", skip_serializing_if = "Option::is_none")]
    pub select_functions: Option<SelectQuery>,
    #[serde(rename = "selectDependencies", skip_serializing_if = "Option::is_none")]
    pub select_dependencies: Option<SelectQuery>,
    #[serde(rename = "selectDiscoveryRule", skip_serializing_if = "Option::is_none")]
    pub select_discovery_rule: Option<SelectQuery>,
    #[serde(rename = "selectLastEvent", skip_serializing_if = "Option::is_none")]
    pub select_last_event: Option<SelectQuery>,
    #[serde(rename = "selectTags", skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<SelectQuery>,
}

fn severity_code<S>(severity: &Option<TriggerSeverity>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match severity {
        Some(severity) => serializer.serialize_i64(severity.code()),
        None => serializer.serialize_none(),
    }
}

impl Session {
    /// Queries triggers. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no trigger matches.
    pub async fn get_triggers(&self, params: &TriggerGetParams) -> Result<Vec<Trigger>, RpcError> {
        Trigger::get(self, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_trigger_with_last_event() {
        let trigger: Trigger = serde_json::from_value(json!({
            "triggerid": "13491",
            "description": "High CPU utilization",
            "expression": "{13491}>90",
            "value": "1",
            "priority": "4",
            "status": "0",
            "state": "0",
            "lastchange": "1683642493",
            "lastEvent": {
                "eventid": "8",
                "clock": "1683642493",
                "value": "1"
            }
        }))
        .unwrap();

        assert_eq!(trigger.trigger_id, "13491");
        assert!(trigger.is_problem());
        assert_eq!(trigger.severity(), Some(TriggerSeverity::High));
        assert_eq!(trigger.last_event.unwrap().event_id, "8");
    }

    #[test]
    fn test_empty_last_event_is_none() {
        let trigger: Trigger =
            serde_json::from_value(json!({"triggerid": "1", "lastEvent": []})).unwrap();
        assert!(trigger.last_event.is_none());
    }

    #[test]
    fn test_groups_and_host_groups_are_separate() {
        let trigger: Trigger = serde_json::from_value(json!({
            "triggerid": "13491",
            "groups": [{"groupid": "4"}],
            "hostgroups": [{"groupid": "4"}],
            "items": "3"
        }))
        .unwrap();

        assert_eq!(trigger.groups[0].group_id, "4");
        assert_eq!(trigger.host_groups[0].group_id, "4");
        assert_eq!(trigger.items.as_count(), Some(3));
    }

    #[test]
    fn test_severity_order() {
        assert!(TriggerSeverity::Disaster > TriggerSeverity::Warning);
        assert_eq!(TriggerSeverity::from_code(6), None);
        assert_eq!(TriggerSeverity::Average.code(), 3);
    }

    #[test]
    fn test_params_serialization() {
        let params = TriggerGetParams {
            host_ids: vec!["10084".to_string()],
            recent_problem_only: true,
            min_severity: Some(TriggerSeverity::Average),
            select_last_event: Some(SelectQuery::Extend),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "hostids": ["10084"],
                "only_true": true,
                "min_severity": 3,
                "selectLastEvent": "extend"
            })
        );
    }
}
