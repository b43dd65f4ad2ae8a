//! Event resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{GetParameters, Related, SelectQuery, Tag, TagFilter};
use crate::resources::{EventSource, Host, Resource};
use crate::types::{ApiBool, UnixTimestamp};

/// Something that happened: a trigger changing state, a discovery, an
/// agent autoregistration or an internal state change.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/event/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "eventid")]
    pub event_id: String,
    #[serde(with = "crate::types::numeric")]
    pub source: i64,
    /// Type of the object that caused the event; 0 is a trigger.
    #[serde(with = "crate::types::numeric")]
    pub object: i64,
    #[serde(rename = "objectid")]
    pub object_id: String,
    pub acknowledged: ApiBool,
    pub clock: UnixTimestamp,
    #[serde(with = "crate::types::numeric")]
    pub ns: i64,
    pub name: String,
    /// For trigger events, 0 OK and 1 problem.
    #[serde(with = "crate::types::numeric")]
    pub value: i64,
    #[serde(with = "crate::types::numeric")]
    pub severity: i64,
    /// The recovery event, if the problem is resolved.
    #[serde(rename = "r_eventid")]
    pub recovery_event_id: String,
    pub suppressed: ApiBool,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub hosts: Related<Host>,
    /// The trigger, item or discovery object behind the event. Its shape
    /// depends on `object`.
    #[serde(rename = "relatedObject", skip_serializing_if = "Option::is_none")]
    pub related_object: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub tags: Related<Tag>,
}

impl Event {
    /// Returns when the event happened, with nanosecond precision.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        let nanos = u32::try_from(self.ns).unwrap_or(0);
        DateTime::<Utc>::from_timestamp(self.clock.unix_seconds(), nanos)
            .unwrap_or_else(|| self.clock.as_datetime())
    }

    /// Returns the decoded event source.
    #[must_use]
    pub fn event_source(&self) -> EventSource {
        EventSource::from(self.source)
    }
}

impl Resource for Event {
    type Params = EventGetParams;

    const NAME: &'static str = "Event";
    const METHOD: &'static str = "event.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "eventids", skip_serializing_if = "Vec::is_empty")]
    pub event_ids: Vec<String>,
    #[serde(rename = "groupids", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(rename = "objectids", skip_serializing_if = "Vec::is_empty")]
    pub object_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<EventSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppressed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub severities: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_from: Option<UnixTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_till: Option<UnixTimestamp>,
    #[serde(rename = "eventid_from", skip_serializing_if = "Option::is_none")]
    pub event_id_from: Option<String>,
    #[serde(rename = "eventid_till", skip_serializing_if = "Option::is_none")]
    pub event_id_till: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagFilter>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,
    #[serde(rename = "selectRelatedObject", skip_serializing_if = "Option::is_none")]
    pub select_related_object: Option<SelectQuery>,
    #[serde(rename = "selectAcknowledges", skip_serializing_if = "Option::is_none")]
    pub select_acknowledges: Option<SelectQuery>,
    #[serde(rename = "selectTags", skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<SelectQuery>,
}

impl Session {
    /// Queries events. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no event matches.
    pub async fn get_events(&self, params: &EventGetParams) -> Result<Vec<Event>, RpcError> {
        Event::get(self, params).await
    }
}
