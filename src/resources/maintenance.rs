//! Maintenance resource implementation.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::{GetParameters, Related, SelectQuery, Tag};
use crate::resources::{Host, HostGroup, Resource};
use crate::types::{ApiDuration, UnixTimestamp};

/// A scheduled maintenance window for hosts and host groups.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/maintenance/object>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintenance {
    #[serde(rename = "maintenanceid")]
    pub maintenance_id: String,
    pub name: String,
    pub description: String,
    /// 0 with data collection, 1 without.
    #[serde(with = "crate::types::numeric")]
    pub maintenance_type: i64,
    pub active_since: UnixTimestamp,
    pub active_till: UnixTimestamp,
    #[serde(with = "crate::types::numeric")]
    pub tags_evaltype: i64,
    #[serde(rename = "timeperiods", skip_serializing_if = "Related::is_unset")]
    pub time_periods: Related<TimePeriod>,
    /// Returned by `selectGroups`, which 7.0 removed.
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub groups: Related<HostGroup>,
    /// Returned by `selectHostGroups` from 6.2.
    #[serde(rename = "hostgroups", skip_serializing_if = "Related::is_unset")]
    pub host_groups: Related<HostGroup>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub hosts: Related<Host>,
    #[serde(skip_serializing_if = "Related::is_unset")]
    pub tags: Related<Tag>,
}

impl Maintenance {
    /// Returns `true` if `at` lies inside the maintenance's active range.
    ///
    /// This does not evaluate the time periods within that range.
    #[must_use]
    pub fn is_active_at(&self, at: UnixTimestamp) -> bool {
        self.active_since <= at && at < self.active_till
    }
}

/// A recurring or one-time period within a maintenance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePeriod {
    /// 0 one time, 2 daily, 3 weekly, 4 monthly.
    #[serde(rename = "timeperiod_type", with = "crate::types::numeric")]
    pub period_type: i64,
    pub period: ApiDuration,
    /// Start of a one-time period.
    pub start_date: UnixTimestamp,
    /// Seconds since midnight.
    #[serde(with = "crate::types::numeric")]
    pub start_time: i64,
    #[serde(with = "crate::types::numeric")]
    pub every: i64,
    /// Bitmask of days, Monday is 1.
    #[serde(rename = "dayofweek", with = "crate::types::numeric")]
    pub day_of_week: i64,
    #[serde(with = "crate::types::numeric")]
    pub day: i64,
    /// Bitmask of months, January is 1.
    #[serde(with = "crate::types::numeric")]
    pub month: i64,
}

impl Resource for Maintenance {
    type Params = MaintenanceGetParams;

    const NAME: &'static str = "Maintenance";
    const METHOD: &'static str = "maintenance.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MaintenanceGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(rename = "maintenanceids", skip_serializing_if = "Vec::is_empty")]
    pub maintenance_ids: Vec<String>,
    #[serde(rename = "groupids", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    /// Deprecated in 6.2 in favour of `select_host_groups`, removed in 7.0.
    #[serde(rename = "selectGroups", skip_serializing_if = "Option::is_none")]
    pub select_groups: Option<SelectQuery>,
    #[serde(rename = "selectHostGroups", skip_serializing_if = "Option::is_none")]
    pub select_host_groups: Option<SelectQuery>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,
    #[serde(rename = "selectTimeperiods", skip_serializing_if = "Option::is_none")]
    pub select_time_periods: Option<SelectQuery>,
    #[serde(rename = "selectTags", skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<SelectQuery>,
}

impl Session {
    /// Queries maintenances. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no maintenance matches.
    pub async fn get_maintenances(
        &self,
        params: &MaintenanceGetParams,
    ) -> Result<Vec<Maintenance>, RpcError> {
        Maintenance::get(self, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_deserialize_maintenance() {
        let maintenance: Maintenance = serde_json::from_value(json!({
            "maintenanceid": "3",
            "name": "Sunday maintenance",
            "maintenance_type": "0",
            "description": "",
            "active_since": "1358844540",
            "active_till": "1390466940",
            "tags_evaltype": "0",
            "timeperiods": [{
                "timeperiod_type": "3",
                "every": "1",
                "month": "0",
                "dayofweek": "64",
                "day": "0",
                "start_time": "64800",
                "period": "3600",
                "start_date": "2147483647"
            }]
        }))
        .unwrap();

        assert_eq!(maintenance.maintenance_id, "3");
        let period = &maintenance.time_periods[0];
        assert_eq!(period.day_of_week, 64);
        assert_eq!(period.period.as_duration(), Duration::from_secs(3600));
        assert!(maintenance.is_active_at("1360000000".parse().unwrap()));
        assert!(!maintenance.is_active_at("1390466940".parse().unwrap()));
    }

    #[test]
    fn test_deserialize_maintenance_with_both_group_lists() {
        let maintenance: Maintenance = serde_json::from_value(json!({
            "maintenanceid": "3",
            "groups": [{"groupid": "4"}],
            "hostgroups": [{"groupid": "4"}],
            "hosts": "12"
        }))
        .unwrap();

        assert_eq!(maintenance.groups.count(), 1);
        assert_eq!(maintenance.host_groups[0].group_id, "4");
        assert_eq!(maintenance.hosts.as_count(), Some(12));
    }
}
