//! History resource implementation.

use serde::{Deserialize, Serialize, Serializer};

use crate::auth::Session;
use crate::clients::RpcError;
use crate::resources::common::GetParameters;
use crate::resources::Resource;
use crate::types::UnixTimestamp;

/// Which history table a `history.get` query reads.
///
/// The server only searches one value type per call and defaults to
/// [`HistoryValueType::Unsigned`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HistoryValueType {
    Float,
    Character,
    Log,
    #[default]
    Unsigned,
    Text,
    Binary,
}

impl HistoryValueType {
    const fn code(self) -> u8 {
        match self {
            Self::Float => 0,
            Self::Character => 1,
            Self::Log => 2,
            Self::Unsigned => 3,
            Self::Text => 4,
            Self::Binary => 5,
        }
    }
}

impl Serialize for HistoryValueType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

/// One collected value of an item.
///
/// See <https://www.zabbix.com/documentation/current/en/manual/api/reference/history/object>.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    #[serde(rename = "itemid", with = "crate::types::numeric")]
    pub item_id: i64,
    pub clock: UnixTimestamp,
    /// The value, as text regardless of the item's value type.
    pub value: String,
    #[serde(with = "crate::types::numeric")]
    pub ns: i64,
}

impl Resource for History {
    type Params = HistoryGetParams;

    const NAME: &'static str = "History";
    const METHOD: &'static str = "history.get";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HistoryGetParams {
    #[serde(flatten)]
    pub common: GetParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<HistoryValueType>,
    #[serde(rename = "hostids", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(rename = "itemids", skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_from: Option<UnixTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_till: Option<UnixTimestamp>,
}

impl Session {
    /// Queries item history. See [`Resource::get`].
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if no value matches.
    pub async fn get_history(&self, params: &HistoryGetParams) -> Result<Vec<History>, RpcError> {
        History::get(self, params).await
    }
}
