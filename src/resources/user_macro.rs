//! User macro resource implementation.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{is_false, GetParameters, Related, SelectQuery};
use crate::resources::{Host, HostGroup, HostTemplate, Resource};

/// A host-level or global user macro such as `{$SNMP_COMMUNITY}`.
///
/// Host macros carry `host_macro_id` and `host_id`; global macros carry
/// `global_macro_id` instead.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/usermacro/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMacro {
    #[serde(rename = "hostmacroid", skip_serializing_if = "String::is_empty")]
    pub host_macro_id: String,
    #[serde(rename = "globalmacroid", skip_serializing_if = "String::is_empty")]
    pub global_macro_id: String,
    #[serde(rename = "hostid", skip_serializing_if = "String::is_empty")]
    pub host_id: String,
    #[serde(rename = "macro")]
    pub macro_name: String,
    /// Empty for secret macros.
    pub value: String,
    pub description: String,
    /// 0 text, 1 secret, 2 vault secret.
    #[serde(rename = "type", with = "crate::types::numeric")]
    pub macro_type: i64,
    /// 0 defined by the user, 1 created by discovery.
    #[serde(with = "crate::types::numeric")]
    pub automatic: i64,
    /// Returned by `selectGroups`, which 7.0 removed.
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub groups: Related<HostGroup>,
    /// Returned by `selectHostGroups` from 6.2.
    #[serde(rename = "hostgroups", skip_serializing_if = "Related::is_unset")]
    pub host_groups: Related<HostGroup>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub hosts: Related<Host>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub templates: Related<HostTemplate>,
}

impl UserMacro {
    /// Returns `true` for macros defined globally rather than on a host.
    #[must_use]
    pub fn is_global(&self) -> bool {
        !self.global_macro_id.is_empty()
    }

    /// Returns `true` if the value is hidden by the server.
    #[must_use]
    pub const fn is_secret(&self) -> bool {
        self.macro_type == 1
    }
}

impl Resource for UserMacro {
    type Params = UserMacroGetParams;

    const NAME: &'static str = "UserMacro";
    const METHOD: &'static str = "usermacro.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserMacroGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    /// Return global macros instead of host macros.
    #[serde(rename = "globalmacro", skip_serializing_if = "is_false")]
    pub global_macro: bool,
    #[serde(rename = "globalmacroids", skip_serializing_if = "Vec::is_empty")]
    pub global_macro_ids: Vec<String>,
    #[serde(rename = "groupids", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(rename = "hostmacroids", skip_serializing_if = "Vec::is_empty")]
    pub host_macro_ids: Vec<String>,
    #[serde(rename = "templateids", skip_serializing_if = "Vec::is_empty")]
    pub template_ids: Vec<String>,
    /// Deprecated in 6.2 in favour of `select_host_groups`, removed in 7.0.
    #[serde(rename = "selectGroups", skip_serializing_if = "Option::is_none")]
    pub select_groups: Option<SelectQuery>,
    #[serde(rename = "selectHostGroups", skip_serializing_if = "Option::is_none")]
    pub select_host_groups: Option<SelectQuery>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,
    #[serde(rename = "selectTemplates", skip_serializing_if = "Option::is_none")]
    pub select_templates: Option<SelectQuery>,
}

impl Session {
    /// Queries user macros. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no macro matches.
    pub async fn get_user_macros(
        &self,
        params: &UserMacroGetParams,
    ) -> Result<Vec<UserMacro>, RpcError> {
        UserMacro::get(self, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_host_macro() {
        let user_macro: UserMacro = serde_json::from_value(json!({
            "hostmacroid": "9",
            "hostid": "10198",
            "macro": "{$INTERFACE}",
            "value": "eth0",
            "description": "",
            "type": "0",
            "automatic": "0"
        }))
        .unwrap();

        assert_eq!(user_macro.macro_name, "{$INTERFACE}");
        assert_eq!(user_macro.host_id, "10198");
        assert!(!user_macro.is_global());
        assert!(!user_macro.is_secret());
    }

    #[test]
    fn test_deserialize_global_secret_macro() {
        let user_macro: UserMacro = serde_json::from_value(json!({
            "globalmacroid": "6",
            "macro": "{$SNMP_COMMUNITY}",
            "type": "1"
        }))
        .unwrap();

        assert!(user_macro.is_global());
        assert!(user_macro.is_secret());
        assert!(user_macro.value.is_empty());
    }

    #[test]
    fn test_deserialize_macro_with_both_group_lists() {
        let user_macro: UserMacro = serde_json::from_value(json!({
            "hostmacroid": "9",
            "groups": [{"groupid": "2"}],
            "hostgroups": [{"groupid": "2"}],
            "hosts": "1"
        }))
        .unwrap();

        assert_eq!(user_macro.groups[0].group_id, "2");
        assert_eq!(user_macro.host_groups[0].group_id, "2");
        assert_eq!(user_macro.hosts.count(), 1);
    }

    #[test]
    fn test_params_serialization() {
        let params = UserMacroGetParams {
            global_macro: true,
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"globalmacro": true})
        );
    }
}
