//! JDK version identifiers and the built-in probe list.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regex extracting the leading numeric release component of an identifier.
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)").expect("LEADING_NUMBER must compile"));

/// An SDKMAN JDK identifier, e.g. `21.0.5-tem`.
///
/// The identifier is opaque to everything except [`release_number`]. Ordering
/// is positional: a version list is always handed around oldest-first, and the
/// compatibility search assumes (without verifying) that compatibility is
/// monotonic in that order.
///
/// [`release_number`]: JdkVersion::release_number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JdkVersion(String);

impl JdkVersion {
    /// Wrap an SDKMAN identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading numeric release component (`8.0.432-tem` → `8`), used for the
    /// pom's compiler source/target level. `None` if the identifier does not
    /// start with digits.
    pub fn release_number(&self) -> Option<u32> {
        LEADING_NUMBER
            .captures(&self.0)
            .and_then(|caps| caps[1].parse().ok())
    }
}

impl fmt::Display for JdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The built-in JDK list, oldest first. Starts at Java 8, the oldest LTS
/// still widely used.
pub fn default_jdks() -> Vec<JdkVersion> {
    vec![
        JdkVersion::new("8.0.432-tem"),
        JdkVersion::new("11.0.25-tem"),
        JdkVersion::new("17.0.13-tem"),
        JdkVersion::new("21.0.5-tem"),
        JdkVersion::new("23.0.1-tem"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_number_takes_leading_component() {
        assert_eq!(JdkVersion::new("8.0.432-tem").release_number(), Some(8));
        assert_eq!(JdkVersion::new("21.0.5-tem").release_number(), Some(21));
        assert_eq!(JdkVersion::new("11").release_number(), Some(11));
    }

    #[test]
    fn release_number_rejects_non_numeric_lead() {
        assert_eq!(JdkVersion::new("tem-latest").release_number(), None);
        assert_eq!(JdkVersion::new("").release_number(), None);
    }

    #[test]
    fn display_shows_raw_identifier() {
        assert_eq!(JdkVersion::new("17.0.13-tem").to_string(), "17.0.13-tem");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&JdkVersion::new("8.0.432-tem")).unwrap();
        assert_eq!(json, "\"8.0.432-tem\"");
    }

    #[test]
    fn default_jdks_ascend_by_release() {
        let jdks = default_jdks();
        let releases: Vec<u32> = jdks.iter().filter_map(|v| v.release_number()).collect();
        assert_eq!(releases.len(), jdks.len());
        assert!(releases.windows(2).all(|w| w[0] < w[1]));
    }
}
