use std::collections::HashMap;

use serde::Serialize;

use super::{is_false, SelectQuery};

/// Sort direction for `sortorder`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

/// Output-shaping parameters accepted by every `<resource>.get` method.
///
/// Embedded (flattened) in each resource's parameter struct. Unset fields
/// are omitted from the request so the server applies its defaults.
///
/// `countOutput` and `preservekeys` are not offered: both change the result
/// from an array of records into a number or an object, which the typed
/// resource wrappers cannot decode. Use [`Session::get`](crate::Session::get)
/// directly for those.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GetParameters {
    /// Return only objects the user has write access to.
    #[serde(skip_serializing_if = "is_false")]
    pub editable: bool,

    /// Return results that do not match the `search` criteria.
    #[serde(rename = "excludeSearch", skip_serializing_if = "is_false")]
    pub exclude_search: bool,

    /// Exact-match filters: property name to a value or array of values.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub filter: HashMap<String, serde_json::Value>,

    /// Maximum number of records to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Properties to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<SelectQuery>,

    /// Case-insensitive substring matches on string properties.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub search: HashMap<String, String>,

    /// Match any of the `filter`/`search` criteria instead of all.
    #[serde(rename = "searchByAny", skip_serializing_if = "is_false")]
    pub search_by_any: bool,

    /// Allow `*` wildcards in `search`.
    #[serde(rename = "searchWildcardsEnabled", skip_serializing_if = "is_false")]
    pub search_wildcards_enabled: bool,

    #[serde(rename = "sortfield", skip_serializing_if = "Vec::is_empty")]
    pub sort_field: Vec<String>,

    #[serde(rename = "sortorder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Match `search` at the beginning of a property only.
    #[serde(rename = "startSearch", skip_serializing_if = "is_false")]
    pub start_search: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_serializes_empty() {
        let json = serde_json::to_value(GetParameters::default()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn test_all_fields_use_wire_names() {
        let params = GetParameters {
            editable: true,
            exclude_search: true,
            filter: HashMap::from([("status".to_string(), json!(["0", "1"]))]),
            limit: Some(5),
            output: Some(SelectQuery::Extend),
            search: HashMap::from([("name".to_string(), "web*".to_string())]),
            search_by_any: true,
            search_wildcards_enabled: true,
            sort_field: vec!["name".to_string()],
            sort_order: Some(SortOrder::Ascending),
            start_search: true,
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            json!({
                "editable": true,
                "excludeSearch": true,
                "filter": {"status": ["0", "1"]},
                "limit": 5,
                "output": "extend",
                "search": {"name": "web*"},
                "searchByAny": true,
                "searchWildcardsEnabled": true,
                "sortfield": ["name"],
                "sortorder": "ASC",
                "startSearch": true
            })
        );
    }
}
