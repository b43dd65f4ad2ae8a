use serde::{Deserialize, Serialize};

/// A name/value tag on a host, trigger, item or event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub tag: String,
    pub value: String,
}

/// How a [`TagFilter`] matches a tag value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TagOperator {
    #[default]
    Contains,
    Equals,
    NotLike,
    NotEqual,
    Exists,
    NotExists,
}

impl TagOperator {
    const fn code(self) -> u8 {
        match self {
            Self::Contains => 0,
            Self::Equals => 1,
            Self::NotLike => 2,
            Self::NotEqual => 3,
            Self::Exists => 4,
            Self::NotExists => 5,
        }
    }
}

impl Serialize for TagOperator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.code())
    }
}

/// One entry of a `tags` filter in a query.
///
/// ```rust
/// use zabbix_api::resources::common::{TagFilter, TagOperator};
///
/// let filter = TagFilter::new("service", TagOperator::Equals, "mysql");
/// assert_eq!(
///     serde_json::to_value(&filter).unwrap(),
///     serde_json::json!({"tag": "service", "operator": "1", "value": "mysql"})
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TagFilter {
    pub tag: String,
    pub operator: TagOperator,
    pub value: String,
}

impl TagFilter {
    #[must_use]
    pub fn new(tag: impl Into<String>, operator: TagOperator, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            operator,
            value: value.into(),
        }
    }
}
