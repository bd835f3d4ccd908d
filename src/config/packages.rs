//! Maven package coordinates under test.

/// A Maven dependency to test, identified by its `group:artifact` coordinate.
///
/// The version range is handed to Maven verbatim; resolution of a concrete
/// version within the range is entirely Maven's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenPackage {
    /// Maven groupId (e.g. `org.apache.commons`).
    pub group_id: String,

    /// Maven artifactId (e.g. `commons-lang3`).
    pub artifact_id: String,

    /// Version range expression (e.g. `[3.12,4.0)`).
    pub version_range: String,
}

impl MavenPackage {
    /// Create a new package descriptor.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version_range: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version_range: version_range.into(),
        }
    }

    /// The `group:artifact` coordinate identifying this package.
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// The built-in package list, using version ranges to give the resolver
/// flexibility.
pub fn default_packages() -> Vec<MavenPackage> {
    vec![
        // Core Apache Commons
        MavenPackage::new("org.apache.commons", "commons-lang3", "[3.12,4.0)"),
        MavenPackage::new("commons-io", "commons-io", "[2.11,3.0)"),
        MavenPackage::new("org.apache.commons", "commons-collections4", "[4.4,5.0)"),
        MavenPackage::new("org.apache.commons", "commons-text", "[1.10,2.0)"),
        MavenPackage::new("org.apache.commons", "commons-math3", "[3.6,4.0)"),
        MavenPackage::new("org.apache.commons", "commons-csv", "[1.10,2.0)"),
        // Logging
        MavenPackage::new("org.slf4j", "slf4j-api", "[2.0,3.0)"),
        MavenPackage::new("ch.qos.logback", "logback-classic", "[1.4,2.0)"),
        // JSON processing
        MavenPackage::new("com.google.code.gson", "gson", "[2.10,3.0)"),
        MavenPackage::new("com.fasterxml.jackson.core", "jackson-databind", "[2.15,3.0)"),
        // Testing
        MavenPackage::new("org.junit.jupiter", "junit-jupiter", "[5.10,6.0)"),
        MavenPackage::new("org.mockito", "mockito-core", "[5.0,6.0)"),
        MavenPackage::new("org.assertj", "assertj-core", "[3.24,4.0)"),
        // Utilities
        MavenPackage::new("com.google.guava", "guava", "[32.0,33.0)"),
        // HTTP clients
        MavenPackage::new("org.apache.httpcomponents", "httpclient", "[4.5,5.0)"),
        MavenPackage::new("com.squareup.okhttp3", "okhttp", "[4.12,5.0)"),
        // Date/time
        MavenPackage::new("joda-time", "joda-time", "[2.12,3.0)"),
        // Async/reactive
        MavenPackage::new("io.reactivex.rxjava3", "rxjava", "[3.1,4.0)"),
        // Database
        MavenPackage::new("com.h2database", "h2", "[2.2,3.0)"),
        MavenPackage::new("org.postgresql", "postgresql", "[42.7,43.0)"),
        MavenPackage::new("com.zaxxer", "HikariCP", "[5.1,6.0)"),
        // XML/YAML
        MavenPackage::new("org.dom4j", "dom4j", "[2.1,3.0)"),
        MavenPackage::new("org.yaml", "snakeyaml", "[2.0,3.0)"),
        // Dependency injection
        MavenPackage::new("javax.inject", "javax.inject", "[1,2)"),
        MavenPackage::new("com.google.inject", "guice", "[7.0,8.0)"),
        // Validation
        MavenPackage::new("jakarta.validation", "jakarta.validation-api", "[3.0,4.0)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coordinate_joins_group_and_artifact() {
        let pkg = MavenPackage::new("com.google.guava", "guava", "[32.0,33.0)");
        assert_eq!(pkg.coordinate(), "com.google.guava:guava");
    }

    #[test]
    fn default_packages_is_non_empty() {
        assert!(!default_packages().is_empty());
    }

    #[test]
    fn default_packages_have_unique_coordinates() {
        let packages = default_packages();
        let coordinates: HashSet<String> = packages.iter().map(|p| p.coordinate()).collect();
        assert_eq!(coordinates.len(), packages.len());
    }

    #[test]
    fn default_packages_have_range_expressions() {
        for pkg in default_packages() {
            assert!(
                pkg.version_range.starts_with('['),
                "{} has no range: {}",
                pkg.coordinate(),
                pkg.version_range
            );
        }
    }
}
