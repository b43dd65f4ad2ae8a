//! Alert resource implementation.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{GetParameters, Related, SelectQuery};
use crate::resources::{EventSource, Host, MediaType, Resource, User};
use crate::types::UnixTimestamp;

/// A message or remote command sent by an action.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/alert/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde(rename = "alertid")]
    pub alert_id: String,
    #[serde(rename = "actionid")]
    pub action_id: String,
    #[serde(rename = "eventid")]
    pub event_id: String,
    #[serde(rename = "userid")]
    pub user_id: String,
    #[serde(rename = "mediatypeid")]
    pub media_type_id: String,
    pub clock: UnixTimestamp,
    /// 0 message, 1 remote command.
    #[serde(rename = "alerttype", with = "crate::types::numeric")]
    pub alert_type: i64,
    #[serde(rename = "sendto")]
    pub send_to: String,
    pub subject: String,
    pub message: String,
    /// For messages: 0 not sent, 1 sent, 2 failed, 3 pending.
    #[serde(with = "crate::types::numeric")]
    pub status: i64,
    #[serde(with = "crate::types::numeric")]
    pub retries: i64,
    pub error: String,
    #[serde(with = "crate::types::numeric")]
    pub esc_step: i64,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub hosts: Related<Host>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub users: Related<User>,
    #[serde(rename = "mediatypes", skip_serializing_if = "Related::is_unset")]
    pub media_types: Related<MediaType>,
}

impl Resource for Alert {
    type Params = AlertGetParams;

    const NAME: &'static str = "Alert";
    const METHOD: &'static str = "alert.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AlertGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "alertids", skip_serializing_if = "Vec::is_empty")]
    pub alert_ids: Vec<String>,
    #[serde(rename = "actionids", skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<String>,
    #[serde(rename = "eventids", skip_serializing_if = "Vec::is_empty")]
    pub event_ids: Vec<String>,
    #[serde(rename = "groupids", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(rename = "mediatypeids", skip_serializing_if = "Vec::is_empty")]
    pub media_type_ids: Vec<String>,
    #[serde(rename = "objectids", skip_serializing_if = "Vec::is_empty")]
    pub object_ids: Vec<String>,
    #[serde(rename = "userids", skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
    #[serde(rename = "eventsource", skip_serializing_if = "Option::is_none")]
    pub event_source: Option<EventSource>,
    #[serde(rename = "eventobject", skip_serializing_if = "Option::is_none")]
    pub event_object: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_from: Option<UnixTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_till: Option<UnixTimestamp>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,
    #[serde(rename = "selectMediatypes", skip_serializing_if = "Option::is_none")]
    pub select_media_types: Option<SelectQuery>,
    #[serde(rename = "selectUsers", skip_serializing_if = "Option::is_none")]
    pub select_users: Option<SelectQuery>,
}

impl Session {
    /// Queries alerts. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no alert matches.
    pub async fn get_alerts(&self, params: &AlertGetParams) -> Result<Vec<Alert>, RpcError> {
        Alert::get(self, params).await
    }
}
