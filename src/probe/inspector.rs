//! Resolved-version extraction from `mvn dependency:tree` output.

use crate::config::MavenPackage;

/// Pull the concrete resolved version for `package` out of dependency-tree
/// output.
///
/// Tree lines look like `[INFO] +- org.slf4j:slf4j-api:jar:2.0.16:compile`;
/// the version is the 4th colon-delimited field. This is best-effort textual
/// scraping, not structured parsing: the first line mentioning both the
/// group and artifact ids with enough fields wins, and anything else yields
/// `None`.
pub fn extract_resolved_version(tree_output: &str, package: &MavenPackage) -> Option<String> {
    for line in tree_output.lines() {
        if line.contains(&package.group_id) && line.contains(&package.artifact_id) {
            let parts: Vec<&str> = line.split(':').collect();
            if parts.len() >= 4 {
                return Some(parts[3].trim().to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(group: &str, artifact: &str) -> MavenPackage {
        MavenPackage::new(group, artifact, "[1,2)")
    }

    #[test]
    fn extracts_fourth_colon_field() {
        let out = "ns:art:jar:9.9.9:compile";
        assert_eq!(
            extract_resolved_version(out, &package("ns", "art")),
            Some("9.9.9".to_string())
        );
    }

    #[test]
    fn extracts_from_realistic_tree_line() {
        let out = "\
[INFO] --- dependency:3.6.1:tree (default-cli) @ test ---
[INFO] test:test:jar:1.0-SNAPSHOT
[INFO] \\- org.slf4j:slf4j-api:jar:2.0.16:compile
";
        assert_eq!(
            extract_resolved_version(out, &package("org.slf4j", "slf4j-api")),
            Some("2.0.16".to_string())
        );
    }

    #[test]
    fn no_matching_line_is_none() {
        let out = "[INFO] \\- com.google.guava:guava:jar:32.1.3-jre:compile";
        assert_eq!(extract_resolved_version(out, &package("ns", "art")), None);
    }

    #[test]
    fn first_match_wins() {
        let out = "\
ns:art:jar:1.0.0:compile
ns:art:jar:2.0.0:compile
";
        assert_eq!(
            extract_resolved_version(out, &package("ns", "art")),
            Some("1.0.0".to_string())
        );
    }

    #[test]
    fn short_matching_line_is_skipped() {
        // A mention without the full coordinate shape is passed over in
        // favor of a later complete line.
        let out = "\
[INFO] Resolving ns:art
ns:art:jar:3.3.3:compile
";
        assert_eq!(
            extract_resolved_version(out, &package("ns", "art")),
            Some("3.3.3".to_string())
        );
    }

    #[test]
    fn empty_output_is_none() {
        assert_eq!(extract_resolved_version("", &package("ns", "art")), None);
    }
}
