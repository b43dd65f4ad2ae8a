//! Zabbix API version values.
//!
//! This module provides the [`Version`] type returned by `apiinfo.version`
//! and used to pick the authentication strategy for a server.

use crate::error::ParseError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A dotted numeric software version, such as `6.4.0`.
///
/// Versions are compared component by component. Missing trailing
/// components count as zero, so `6.1` and `6.1.0` are equal and hash alike.
///
/// # Rendering
///
/// [`Display`](fmt::Display) writes the parsed components joined by dots.
/// The number of components is preserved (`6.0` stays `6.0`) but leading
/// zeros inside a component are not (`06.0` renders as `6.0`).
///
/// # Example
///
/// ```rust
/// use zabbix_api::types::Version;
///
/// let server: Version = "6.2.9".parse().unwrap();
/// assert!(server < Version::from([6, 4, 0]));
/// assert_eq!("6.1".parse::<Version>().unwrap(), "6.1.0".parse().unwrap());
/// assert_eq!(server.to_string(), "6.2.9");
/// ```
#[derive(Clone, Debug)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Returns the parsed numeric components.
    #[must_use]
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Returns the major (first) component.
    #[must_use]
    pub fn major(&self) -> u64 {
        self.component(0)
    }

    /// Returns the minor (second) component, or 0 if absent.
    #[must_use]
    pub fn minor(&self) -> u64 {
        self.component(1)
    }

    /// Returns the patch (third) component, or 0 if absent.
    #[must_use]
    pub fn patch(&self) -> u64 {
        self.component(2)
    }

    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }

    /// Components with trailing zeros removed, used for equality and hashing.
    fn significant(&self) -> &[u64] {
        let len = self
            .components
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |i| i + 1);
        &self.components[..len]
    }
}

impl<const N: usize> From<[u64; N]> for Version {
    fn from(components: [u64; N]) -> Self {
        Self {
            components: components.to_vec(),
        }
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidVersion {
            input: s.to_string(),
        };

        if s.is_empty() {
            return Err(invalid());
        }

        let components = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                part.parse::<u64>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_dotted_versions() {
        assert_eq!(v("6.0.0").components(), &[6, 0, 0]);
        assert_eq!(v("7.2").components(), &[7, 2]);
        assert_eq!(v("5").components(), &[5]);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "6..0", "6.0.", ".6", "6.0.0rc1", "v6", "6.-1", " 6.0"] {
            assert!(
                matches!(input.parse::<Version>(), Err(ParseError::InvalidVersion { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_compare_matches_numeric_order() {
        let v500 = v("5.0.0");
        let v600 = v("6.0.0");
        let v610 = v("6.1.0");
        let v615 = v("6.1.5");

        assert!(v500 < v600);
        assert!(v600 < v610);
        assert!(v610 < v615);
        assert!(v615 > v500);
        assert_eq!(v610.cmp(&v610), Ordering::Equal);
        // 10 sorts after 9 numerically, not lexically
        assert!(v("6.10") > v("6.9"));
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let versions = [v("5.0"), v("6.0.0"), v("6.0.1"), v("6.4"), v("7.0.0.1")];
        for a in &versions {
            for b in &versions {
                assert_eq!(a.cmp(b), b.cmp(a).reverse(), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_missing_components_count_as_zero() {
        assert_eq!(v("6.1"), v("6.1.0"));
        assert_eq!(v("6"), v("6.0.0.0"));
        assert!(v("6.1") < v("6.1.1"));

        let mut set = HashSet::new();
        set.insert(v("6.1"));
        assert!(set.contains(&v("6.1.0")));
    }

    #[test]
    fn test_display_renders_parsed_components() {
        assert_eq!(v("6.0.0").to_string(), "6.0.0");
        assert_eq!(v("6.0").to_string(), "6.0");
        assert_eq!(v("06.01").to_string(), "6.1");
        assert_eq!(Version::from([6, 4, 0]).to_string(), "6.4.0");
    }

    #[test]
    fn test_accessors_pad_with_zero() {
        let version = v("7.2");
        assert_eq!(version.major(), 7);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 0);
    }

    #[test]
    fn test_serde_uses_string_form() {
        let version: Version = serde_json::from_str(r#""6.1.5""#).unwrap();
        assert_eq!(version, v("6.1.5"));
        assert_eq!(serde_json::to_string(&version).unwrap(), r#""6.1.5""#);

        assert!(serde_json::from_str::<Version>(r#""six""#).is_err());
    }
}
