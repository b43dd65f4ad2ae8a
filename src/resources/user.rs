//! User resource implementation.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{is_false, GetParameters, Related, SelectQuery};
use crate::resources::{Media, MediaType, Resource};
use crate::types::{ApiBool, ApiDuration, UnixTimestamp};

/// A frontend user.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/user/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "userid")]
    pub user_id: String,
    /// `alias` before 5.4.
    #[serde(alias = "alias")]
    pub username: String,
    pub name: String,
    pub surname: String,
    #[serde(rename = "roleid")]
    pub role_id: String,
    pub url: String,
    pub autologin: ApiBool,
    /// Session lifetime; zero means the session never expires.
    pub autologout: ApiDuration,
    pub refresh: ApiDuration,
    pub lang: String,
    pub theme: String,
    pub timezone: String,
    #[serde(with = "crate::types::numeric")]
    pub rows_per_page: i64,
    #[serde(with = "crate::types::numeric")]
    pub attempt_failed: i64,
    pub attempt_ip: String,
    pub attempt_clock: UnixTimestamp,
    pub provisioned: ApiBool,
    pub ts_provisioned: UnixTimestamp,
    #[serde(rename = "userdirectoryid")]
    pub user_directory_id: String,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub medias: Related<Media>,
    #[serde(rename = "mediatypes", skip_serializing_if = "Related::is_unset")]
    pub media_types: Related<MediaType>,
}

impl Resource for User {
    type Params = UserGetParams;

    const NAME: &'static str = "User";
    const METHOD: &'static str = "user.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "userids", skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
    #[serde(rename = "usrgrpids", skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(rename = "mediaids", skip_serializing_if = "Vec::is_empty")]
    pub media_ids: Vec<String>,
    #[serde(rename = "mediatypeids", skip_serializing_if = "Vec::is_empty")]
    pub media_type_ids: Vec<String>,
    /// Adds `gui_access`, `debug_mode` and `users_status` to each user.
    #[serde(rename = "getAccess", skip_serializing_if = "is_false")]
    pub get_access: bool,
    #[serde(rename = "selectMedias", skip_serializing_if = "Option::is_none")]
    pub select_medias: Option<SelectQuery>,
    #[serde(rename = "selectMediatypes", skip_serializing_if = "Option::is_none")]
    pub select_media_types: Option<SelectQuery>,
}

impl Session {
    /// Queries users. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no user matches.
    pub async fn get_users(&self, params: &UserGetParams) -> Result<Vec<User>, RpcError> {
        User::get(self, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_deserialize_user() {
        let user: User = serde_json::from_value(json!({
            "userid": "1",
            "username": "Admin",
            "name": "Zabbix",
            "surname": "Administrator",
            "url": "",
            "autologin": "1",
            "autologout": "0",
            "lang": "en_US",
            "refresh": "0s",
            "theme": "default",
            "attempt_failed": "0",
            "attempt_ip": "",
            "attempt_clock": "0",
            "rows_per_page": "50",
            "timezone": "default",
            "roleid": "3",
            "medias": [{"mediaid": "1", "mediatypeid": "1", "sendto": ["admin@example.com"]}]
        }))
        .unwrap();

        assert_eq!(user.username, "Admin");
        assert!(user.autologin.get());
        assert_eq!(user.autologout.as_duration(), Duration::ZERO);
        assert_eq!(user.rows_per_page, 50);
        assert_eq!(user.medias[0].send_to, vec!["admin@example.com"]);
    }

    #[test]
    fn test_deserialize_legacy_alias() {
        let user: User = serde_json::from_value(json!({
            "userid": "2",
            "alias": "guest",
            "refresh": "30s"
        }))
        .unwrap();

        assert_eq!(user.username, "guest");
        assert_eq!(user.refresh.as_duration(), Duration::from_secs(30));
    }

    #[test]
    fn test_params_serialization() {
        let params = UserGetParams {
            user_group_ids: vec!["7".to_string()],
            get_access: true,
            select_medias: Some(SelectQuery::Extend),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"usrgrpids": ["7"], "getAccess": true, "selectMedias": "extend"})
        );
    }
}
