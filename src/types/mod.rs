//! Value types for the Zabbix API's string-encoded scalars.
//!
//! The Zabbix API transmits almost every scalar as a JSON string: booleans
//! are `"0"`/`"1"`, durations are `"30s"` or `"1h"`, timestamps are decimal
//! epoch seconds and the server version is a dotted string. The types in this
//! module decode those conventions leniently (JSON numbers are accepted
//! wherever a numeric string is) and encode them canonically.
//!
//! - [`Version`]: dotted numeric version with zero-padded ordering
//! - [`ApiBool`]: `"0"`/`"1"`/`"false"`/`"true"` flag
//! - [`ApiDuration`]: seconds with optional `s`/`m`/`h`/`d`/`w` suffix
//! - [`UnixTimestamp`]: epoch seconds as a UTC date-time
//! - [`numeric`]: serde helpers for integer fields sent as strings

mod boolean;
mod duration;
mod timestamp;
mod version;

pub use boolean::ApiBool;
pub use duration::ApiDuration;
pub use timestamp::UnixTimestamp;
pub use version::Version;

use serde::de;

/// Converts a JSON scalar into the text a string-encoded codec parses.
fn scalar_text<E: de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

/// Serde helpers for integers the API sends as strings.
///
/// Use with `#[serde(default, with = "crate::types::numeric")]`. Decoding
/// accepts `"42"` and `42`; `null` and the empty string decode as 0.
/// Encoding writes `"42"`.
pub mod numeric {
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes an integer as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if writing fails.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Deserializes an integer from a string or a number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither an integer nor a string
    /// holding one.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(0);
        }
        let text = super::scalar_text::<D::Error>(value)?;
        if text.is_empty() {
            return Ok(0);
        }
        text.parse()
            .map_err(|_| de::Error::custom(format!("invalid integer '{text}'")))
    }
}
