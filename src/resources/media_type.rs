//! Media type resource implementation.

use serde::{Deserialize, Deserializer, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{GetParameters, Related, SelectQuery};
use crate::resources::{Action, Resource, User};
use crate::types::{ApiBool, ApiDuration};

/// A delivery channel for notifications: email, script, SMS or webhook.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/mediatype/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaType {
    #[serde(rename = "mediatypeid")]
    pub media_type_id: String,
    pub name: String,
    /// 0 email, 1 script, 2 SMS, 4 webhook.
    #[serde(rename = "type", with = "crate::types::numeric")]
    pub media_kind: i64,
    pub description: String,
    /// 0 enabled, 1 disabled.
    #[serde(with = "crate::types::numeric")]
    pub status: i64,
    pub exec_path: String,
    pub gsm_modem: String,
    #[serde(with = "crate::types::numeric")]
    pub provider: i64,
    pub smtp_server: String,
    #[serde(with = "crate::types::numeric")]
    pub smtp_port: i64,
    pub smtp_helo: String,
    pub smtp_email: String,
    #[serde(with = "crate::types::numeric")]
    pub smtp_security: i64,
    pub smtp_verify_host: ApiBool,
    pub smtp_verify_peer: ApiBool,
    #[serde(with = "crate::types::numeric")]
    pub smtp_authentication: i64,
    pub username: String,
    #[serde(rename = "maxsessions", with = "crate::types::numeric")]
    pub max_sessions: i64,
    #[serde(rename = "maxattempts", with = "crate::types::numeric")]
    pub max_attempts: i64,
    pub attempt_interval: ApiDuration,
    /// 0 plain text, 1 HTML.
    #[serde(with = "crate::types::numeric")]
    pub message_format: i64,
    /// Webhook body.
    pub script: String,
    pub timeout: ApiDuration,
    pub process_tags: ApiBool,
    pub show_event_menu: ApiBool,
    pub event_menu_url: String,
    pub event_menu_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<MediaTypeParameter>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub message_templates: Related<MediaTypeMessageTemplate>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub actions: Related<Action>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub users: Related<User>,
}

/// A webhook parameter (`name` set) or a script argument (`sort_order` set).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaTypeParameter {
    pub name: String,
    #[serde(rename = "sortorder", with = "crate::types::numeric")]
    pub sort_order: i64,
    pub value: String,
}

/// The default message a media type sends for one event source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaTypeMessageTemplate {
    #[serde(rename = "eventsource", with = "crate::types::numeric")]
    pub event_source: i64,
    /// 0 operations, 1 recovery operations, 2 update operations.
    #[serde(with = "crate::types::numeric")]
    pub recovery: i64,
    pub subject: String,
    pub message: String,
}

/// A media assigned to a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(rename = "mediaid")]
    pub media_id: String,
    #[serde(rename = "mediatypeid")]
    pub media_type_id: String,
    /// Recipients. Email media send a list, every other type a single string.
    #[serde(rename = "sendto", deserialize_with = "one_or_many")]
    pub send_to: Vec<String>,
    /// 0 enabled, 1 disabled.
    #[serde(with = "crate::types::numeric")]
    pub active: i64,
    /// Bitmask of trigger severities, 1 for not classified up to 32 for
    /// disaster.
    #[serde(with = "crate::types::numeric")]
    pub severity: i64,
    /// When notifications may be sent, e.g. `1-7,00:00-24:00`.
    pub period: String,
    pub provisioned: ApiBool,
    #[serde(rename = "userdirectory_mediaid")]
    pub user_directory_media_id: String,
}

impl Media {
    /// Returns `true` if the media is enabled.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active == 0
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) if s.is_empty() => Vec::new(),
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

impl Resource for MediaType {
    type Params = MediaTypeGetParams;

    const NAME: &'static str = "MediaType";
    const METHOD: &'static str = "mediatype.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MediaTypeGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "mediatypeids", skip_serializing_if = "Vec::is_empty")]
    pub media_type_ids: Vec<String>,
    #[serde(rename = "mediaids", skip_serializing_if = "Vec::is_empty")]
    pub media_ids: Vec<String>,
    #[serde(rename = "userids", skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
    #[serde(rename = "selectActions", skip_serializing_if = "Option::is_none")]
    pub select_actions: Option<SelectQuery>,
    #[serde(rename = "selectMessageTemplates", skip_serializing_if = "Option::is_none")]
    pub select_message_templates: Option<SelectQuery>,
    #[serde(rename = "selectUsers", skip_serializing_if = "Option::is_none")]
    pub select_users: Option<SelectQuery>,
}

impl Session {
    /// Queries media types. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no media type matches.
    pub async fn get_media_types(
        &self,
        params: &MediaTypeGetParams,
    ) -> Result<Vec<MediaType>, RpcError> {
        MediaType::get(self, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_deserialize_webhook_media_type() {
        let media_type: MediaType = serde_json::from_value(json!({
            "mediatypeid": "4",
            "type": "4",
            "name": "Slack",
            "status": "0",
            "maxsessions": "1",
            "maxattempts": "3",
            "attempt_interval": "10s",
            "timeout": "30s",
            "process_tags": "1",
            "parameters": [
                {"name": "channel", "value": "{ALERT.SENDTO}"},
                {"name": "zabbix_url", "value": "{$ZABBIX.URL}"}
            ],
            "message_templates": [
                {"eventsource": "0", "recovery": "1", "subject": "Resolved", "message": "OK"}
            ]
        }))
        .unwrap();

        assert_eq!(media_type.media_kind, 4);
        assert_eq!(media_type.attempt_interval.as_duration(), Duration::from_secs(10));
        assert_eq!(media_type.timeout.as_duration(), Duration::from_secs(30));
        assert!(media_type.process_tags.get());
        assert_eq!(media_type.parameters[1].name, "zabbix_url");
        assert_eq!(media_type.message_templates[0].recovery, 1);
    }

    #[test]
    fn test_media_send_to_accepts_string_and_list() {
        let sms: Media = serde_json::from_value(json!({
            "mediaid": "1",
            "mediatypeid": "3",
            "sendto": "+15550100",
            "active": "0",
            "severity": "63",
            "period": "1-7,00:00-24:00"
        }))
        .unwrap();
        let email: Media = serde_json::from_value(json!({
            "mediaid": "2",
            "mediatypeid": "1",
            "sendto": ["ops@example.com", "oncall@example.com"],
            "active": "1"
        }))
        .unwrap();

        assert_eq!(sms.send_to, vec!["+15550100"]);
        assert!(sms.is_active());
        assert_eq!(sms.severity, 63);
        assert_eq!(email.send_to.len(), 2);
        assert!(!email.is_active());
    }

    #[test]
    fn test_params_serialization() {
        let params = MediaTypeGetParams {
            user_ids: vec!["1".to_string()],
            select_message_templates: Some(SelectQuery::Extend),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"userids": ["1"], "selectMessageTemplates": "extend"})
        );
    }
}
