//! Unix timestamps encoded as decimal strings.

use crate::error::ParseError;
use crate::types::scalar_text;
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A point in time encoded as seconds since the Unix epoch, e.g. `"1683642493"`.
///
/// Decodes to a UTC [`DateTime`]. `"0"` is the epoch itself, which the API
/// also uses for "never". Encodes back to the seconds string.
///
/// # Example
///
/// ```rust
/// use zabbix_api::types::UnixTimestamp;
///
/// let ts: UnixTimestamp = "1683642493".parse().unwrap();
/// assert_eq!(ts.as_datetime().to_rfc3339(), "2023-05-09T14:28:13+00:00");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixTimestamp(pub DateTime<Utc>);

impl UnixTimestamp {
    /// Returns the timestamp as a UTC date-time.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the number of seconds since the Unix epoch.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns `true` if this is the epoch, which the API uses as "unset".
    #[must_use]
    pub fn is_epoch(&self) -> bool {
        self.0.timestamp() == 0
    }
}

impl From<DateTime<Utc>> for UnixTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl FromStr for UnixTimestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidTimestamp {
                input: s.to_string(),
            });
        }
        s.parse::<i64>()
            .ok()
            .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0))
            .map(Self)
            .ok_or_else(|| ParseError::InvalidTimestamp {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.timestamp())
    }
}

impl Serialize for UnixTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UnixTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        scalar_text::<D::Error>(value)?
            .parse()
            .map_err(de::Error::custom)
    }
}
