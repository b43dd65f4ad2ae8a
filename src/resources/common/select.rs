use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Which properties a query returns, for `output` and `select*` parameters.
///
/// ```rust
/// use zabbix_api::resources::common::SelectQuery;
///
/// assert_eq!(serde_json::to_string(&SelectQuery::Extend).unwrap(), r#""extend""#);
/// assert_eq!(serde_json::to_string(&SelectQuery::Count).unwrap(), r#""count""#);
/// assert_eq!(
///     serde_json::to_string(&SelectQuery::fields(["hostid"])).unwrap(),
///     r#"["hostid"]"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectQuery {
    /// All properties.
    Extend,
    /// Only the number of related objects. Not valid for `output`.
    Count,
    /// The named properties.
    Fields(Vec<String>),
}

impl SelectQuery {
    /// Selects the given properties.
    #[must_use]
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Fields(fields.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for SelectQuery {
    fn from(fields: Vec<String>) -> Self {
        Self::Fields(fields)
    }
}

impl Serialize for SelectQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Extend => serializer.serialize_str("extend"),
            Self::Count => serializer.serialize_str("count"),
            Self::Fields(fields) => {
                let mut seq = serializer.serialize_seq(Some(fields.len()))?;
                for field in fields {
                    seq.serialize_element(field)?;
                }
                seq.end()
            }
        }
    }
}
