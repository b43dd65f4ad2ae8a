//! String-encoded boolean flags.

use crate::error::ParseError;
use crate::types::scalar_text;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A boolean as the Zabbix API encodes it.
///
/// Decodes `"1"` and `"true"` as `true`, `"0"` and `"false"` as `false`.
/// Matching is case-sensitive. JSON numbers and JSON booleans are accepted
/// too. Always encodes as `"1"` or `"0"`.
///
/// # Example
///
/// ```rust
/// use zabbix_api::types::ApiBool;
///
/// let flag: ApiBool = serde_json::from_str(r#""1""#).unwrap();
/// assert!(flag.get());
/// assert_eq!(serde_json::to_string(&ApiBool::from(false)).unwrap(), r#""0""#);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ApiBool(pub bool);

impl ApiBool {
    /// Returns the wrapped value.
    #[must_use]
    pub const fn get(self) -> bool {
        self.0
    }
}

impl From<bool> for ApiBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<ApiBool> for bool {
    fn from(value: ApiBool) -> Self {
        value.0
    }
}

impl FromStr for ApiBool {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "true" => Ok(Self(true)),
            "0" | "false" => Ok(Self(false)),
            _ => Err(ParseError::InvalidBoolean {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ApiBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "1" } else { "0" })
    }
}

impl Serialize for ApiBool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Bool(b) => Ok(Self(b)),
            other => scalar_text::<D::Error>(other)?
                .parse()
                .map_err(de::Error::custom),
        }
    }
}
