use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;

/// Related objects returned by a `select*` parameter.
///
/// With [`SelectQuery::Extend`](super::SelectQuery::Extend) or a field list
/// the server returns the objects themselves; with
/// [`SelectQuery::Count`](super::SelectQuery::Count) it returns only their
/// number, e.g. `"items": "42"`. Both decode into this type.
///
/// Derefs to a slice of the listed objects, which is empty for a count.
///
/// ```rust
/// use zabbix_api::resources::common::Related;
/// use zabbix_api::resources::Item;
///
/// let listed: Related<Item> = serde_json::from_str(r#"[{"itemid": "23296"}]"#).unwrap();
/// assert_eq!(listed[0].item_id, "23296");
/// assert_eq!(listed.count(), 1);
///
/// let counted: Related<Item> = serde_json::from_str(r#""42""#).unwrap();
/// assert!(counted.is_empty());
/// assert_eq!(counted.count(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Related<T> {
    /// The related objects.
    Objects(Vec<T>),
    /// Only the number of related objects.
    Count(u64),
}

impl<T> Related<T> {
    /// Returns the number of related objects, listed or counted.
    #[must_use]
    pub fn count(&self) -> u64 {
        match self {
            Self::Objects(objects) => objects.len() as u64,
            Self::Count(count) => *count,
        }
    }

    /// Returns the count if the server answered with one.
    #[must_use]
    pub const fn as_count(&self) -> Option<u64> {
        match self {
            Self::Objects(_) => None,
            Self::Count(count) => Some(*count),
        }
    }

    /// Returns the listed objects, empty for a count.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Objects(objects) => objects,
            Self::Count(_) => &[],
        }
    }

    /// Returns `true` for an empty object list. A count is never unset.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Objects(objects) if objects.is_empty())
    }
}

impl<T> Default for Related<T> {
    fn default() -> Self {
        Self::Objects(Vec::new())
    }
}

impl<T> Deref for Related<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for Related<T> {
    fn from(objects: Vec<T>) -> Self {
        Self::Objects(objects)
    }
}

impl<'a, T> IntoIterator for &'a Related<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T: Serialize> Serialize for Related<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Objects(objects) => {
                let mut seq = serializer.serialize_seq(Some(objects.len()))?;
                for object in objects {
                    seq.serialize_element(object)?;
                }
                seq.end()
            }
            Self::Count(count) => serializer.collect_str(count),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Related<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Null => Ok(Self::default()),
            value @ serde_json::Value::Array(_) => serde_json::from_value(value)
                .map(Self::Objects)
                .map_err(de::Error::custom),
            serde_json::Value::String(s) => s
                .parse()
                .map(Self::Count)
                .map_err(|_| de::Error::custom(format!("invalid object count {s:?}"))),
            serde_json::Value::Number(n) => n
                .as_u64()
                .map(Self::Count)
                .ok_or_else(|| de::Error::custom(format!("invalid object count {n}"))),
            other => Err(de::Error::custom(format!(
                "expected an object list or a count, found {other}"
            ))),
        }
    }
}
