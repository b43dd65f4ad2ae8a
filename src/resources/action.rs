//! Action resource implementation.

use serde::{Deserialize, Serialize, Serializer};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{GetParameters, Related, SelectQuery};
use crate::resources::Resource;
use crate::types::{ApiBool, ApiDuration};

/// The kind of events an action handles, and the source of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EventSource {
    #[default]
    Trigger,
    Discovery,
    Autoregistration,
    Internal,
    Service,
    /// A source code this library does not know.
    Other(i64),
}

impl EventSource {
    /// Returns the API's numeric code.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Trigger => 0,
            Self::Discovery => 1,
            Self::Autoregistration => 2,
            Self::Internal => 3,
            Self::Service => 4,
            Self::Other(code) => code,
        }
    }
}

impl From<i64> for EventSource {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Trigger,
            1 => Self::Discovery,
            2 => Self::Autoregistration,
            3 => Self::Internal,
            4 => Self::Service,
            other => Self::Other(other),
        }
    }
}

impl Serialize for EventSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.code())
    }
}

/// An automated reaction to events: notifications, remote commands or
/// configuration changes.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/action/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    #[serde(rename = "actionid")]
    pub action_id: String,
    pub name: String,
    #[serde(rename = "eventsource", with = "crate::types::numeric")]
    pub event_source: i64,
    /// 0 enabled, 1 disabled.
    #[serde(with = "crate::types::numeric")]
    pub status: i64,
    /// Default duration of one escalation step.
    #[serde(rename = "esc_period")]
    pub step_duration: ApiDuration,
    pub pause_suppressed: ApiBool,
    pub notify_if_canceled: ApiBool,
    /// Only populated with [`ActionGetParams::select_filter`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ActionFilter>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub operations: Related<ActionOperation>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub recovery_operations: Related<ActionOperation>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub update_operations: Related<ActionOperation>,
}

impl Action {
    /// Returns `true` if the action is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.status == 0
    }
}

/// The conditions an event must meet for an action to run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionFilter {
    /// 0 and/or, 1 and, 2 or, 3 custom formula.
    #[serde(rename = "evaltype", with = "crate::types::numeric")]
    pub eval_type: i64,
    pub formula: String,
    pub eval_formula: String,
    pub conditions: Vec<ActionCondition>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionCondition {
    #[serde(rename = "conditionid")]
    pub condition_id: String,
    #[serde(rename = "conditiontype", with = "crate::types::numeric")]
    pub condition_type: i64,
    #[serde(with = "crate::types::numeric")]
    pub operator: i64,
    pub value: String,
    pub value2: String,
    #[serde(rename = "formulaid")]
    pub formula_id: String,
}

/// One step an action performs.
///
/// The operation details (`opmessage`, `opcommand`, ...) depend on
/// `operation_type` and are kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionOperation {
    #[serde(rename = "operationid")]
    pub operation_id: String,
    #[serde(rename = "operationtype", with = "crate::types::numeric")]
    pub operation_type: i64,
    /// Kept as text since it may be `0` (use the action default) or a macro.
    pub esc_period: String,
    #[serde(with = "crate::types::numeric")]
    pub esc_step_from: i64,
    #[serde(with = "crate::types::numeric")]
    pub esc_step_to: i64,
    #[serde(rename = "evaltype", with = "crate::types::numeric")]
    pub eval_type: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opmessage: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opcommand: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opconditions: Vec<serde_json::Value>,
}

impl Resource for Action {
    type Params = ActionGetParams;

    const NAME: &'static str = "Action";
    const METHOD: &'static str = "action.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ActionGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "actionids", skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<String>,
    #[serde(rename = "groupids", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(rename = "triggerids", skip_serializing_if = "Vec::is_empty")]
    pub trigger_ids: Vec<String>,
    #[serde(rename = "mediatypeids", skip_serializing_if = "Vec::is_empty")]
    pub media_type_ids: Vec<String>,
    #[serde(rename = "usrgrpids", skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(rename = "userids", skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
    #[serde(rename = "scriptids", skip_serializing_if = "Vec::is_empty")]
    pub script_ids: Vec<String>,
    #[serde(rename = "selectFilter", skip_serializing_if = "Option::is_none")]
    pub select_filter: Option<SelectQuery>,
    #[serde(rename = "selectOperations", skip_serializing_if = "Option::is_none")]
    pub select_operations: Option<SelectQuery>,
    #[serde(rename = "selectRecoveryOperations", skip_serializing_if = "Option::is_none")]
    pub select_recovery_operations: Option<SelectQuery>,
    #[serde(rename = "selectUpdateOperations", skip_serializing_if = "Option::is_none")]
    pub select_update_operations: Option<SelectQuery>,
}

impl Session {
    /// Queries actions. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no action matches.
    pub async fn get_actions(&self, params: &ActionGetParams) -> Result<Vec<Action>, RpcError> {
        Action::get(self, params).await
    }
}
