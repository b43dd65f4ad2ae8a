//! Durations with Zabbix time-unit suffixes.

use crate::error::ParseError;
use crate::types::scalar_text;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// A duration as the Zabbix API encodes it, e.g. `"30s"`, `"1h"`, `"3600"`.
///
/// A bare number is a count of seconds. Supported suffixes are `s`, `m`,
/// `h`, `d` (24 hours) and `w` (7 days). Encodes as a bare seconds count.
///
/// Values containing user macros (`{$TIMEOUT}`) are not durations and fail
/// to decode.
///
/// # Example
///
/// ```rust
/// use zabbix_api::types::ApiDuration;
/// use std::time::Duration;
///
/// let d: ApiDuration = "2h".parse().unwrap();
/// assert_eq!(d.as_duration(), Duration::from_secs(7200));
/// assert_eq!(d.as_nanos(), 7_200_000_000_000);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiDuration(pub Duration);

impl ApiDuration {
    /// Returns the duration as a [`std::time::Duration`].
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the duration as a count of nanoseconds.
    #[must_use]
    pub const fn as_nanos(self) -> u128 {
        self.0.as_nanos()
    }
}

impl From<Duration> for ApiDuration {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}

impl From<ApiDuration> for Duration {
    fn from(value: ApiDuration) -> Self {
        value.0
    }
}

impl FromStr for ApiDuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidDuration {
            input: s.to_string(),
        };

        let (digits, multiplier) = match s.as_bytes().last() {
            Some(b's') => (&s[..s.len() - 1], 1),
            Some(b'm') => (&s[..s.len() - 1], MINUTE),
            Some(b'h') => (&s[..s.len() - 1], HOUR),
            Some(b'd') => (&s[..s.len() - 1], DAY),
            Some(b'w') => (&s[..s.len() - 1], WEEK),
            Some(_) => (s, 1),
            None => return Err(invalid()),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let seconds = digits
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_mul(multiplier))
            .ok_or_else(invalid)?;

        Ok(Self(Duration::from_secs(seconds)))
    }
}

impl fmt::Display for ApiDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_secs())
    }
}

impl Serialize for ApiDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiDuration {
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
