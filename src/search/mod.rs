//! Oldest-compatible JDK search.
//!
//! Binary search over the configured ascending JDK list. Correctness rests
//! on a monotonicity precondition that is assumed, never verified: if a
//! package compiles under the JDK at index `i`, it compiles under every JDK
//! at a higher index. Under that precondition the search finds the oldest
//! compatible version in O(log N) probes; without it the answer is whatever
//! the probed path happened to see.

use crate::config::{JdkVersion, MavenPackage};
use crate::probe::ProbeHost;

/// Find the oldest JDK in `jdks` under which a probe for `package` (or the
/// no-dependency control case) compiles.
///
/// Maintains `[left, right)` such that everything at index ≥ `right` is
/// known-or-assumed compatible and everything below `left` is
/// known-or-assumed incompatible. Returns `None` when no probed version
/// succeeded, which for a fully incompatible package is concluded after
/// O(log N) probes rather than N: the search never confirms that every
/// version failed, only that its path found no success.
pub fn find_oldest_compatible(
    host: &mut dyn ProbeHost,
    jdks: &[JdkVersion],
    package: Option<&MavenPackage>,
) -> Option<JdkVersion> {
    let mut left = 0;
    let mut right = jdks.len();
    let mut oldest = None;

    while left < right {
        let mid = left + (right - left) / 2;
        let version = &jdks[mid];

        tracing::info!("Testing JDK {version}");

        if host.compile_probe(version, package) {
            oldest = Some(version.clone());
            right = mid;
        } else {
            left = mid + 1;
        }
    }

    oldest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    /// Scripted host: probe outcomes by JDK list index, probes recorded.
    struct ScriptedHost {
        outcomes: Vec<bool>,
        probes: Vec<usize>,
    }

    impl ScriptedHost {
        fn new(outcomes: Vec<bool>) -> Self {
            Self {
                outcomes,
                probes: Vec::new(),
            }
        }
    }

    impl ProbeHost for ScriptedHost {
        fn provision(&mut self, _version: &JdkVersion) -> bool {
            true
        }

        fn compile_probe(
            &mut self,
            version: &JdkVersion,
            _package: Option<&MavenPackage>,
        ) -> bool {
            let index: usize = version.as_str().parse().unwrap();
            self.probes.push(index);
            self.outcomes[index]
        }

        fn resolve_version(&mut self, _package: &MavenPackage) -> Result<Option<String>> {
            Ok(None)
        }
    }

    /// JDK list whose identifiers are their own indices.
    fn indexed_jdks(n: usize) -> Vec<JdkVersion> {
        (0..n).map(|i| JdkVersion::new(i.to_string())).collect()
    }

    fn max_probes(n: usize) -> usize {
        (n as f64).log2().ceil() as usize + 1
    }

    #[test]
    fn finds_single_boundary_within_max_probes() {
        for n in [1, 2, 3, 5, 8, 16, 31] {
            for boundary in 0..n {
                let outcomes = (0..n).map(|i| i >= boundary).collect();
                let mut host = ScriptedHost::new(outcomes);
                let jdks = indexed_jdks(n);

                let oldest = find_oldest_compatible(&mut host, &jdks, None);

                assert_eq!(
                    oldest,
                    Some(jdks[boundary].clone()),
                    "wrong answer for n={n} boundary={boundary}"
                );
                assert!(
                    host.probes.len() <= max_probes(n),
                    "n={n} boundary={boundary} used {} probes",
                    host.probes.len()
                );
            }
        }
    }

    #[test]
    fn all_failing_returns_none_in_log_probes() {
        let n = 32;
        let mut host = ScriptedHost::new(vec![false; n]);
        let jdks = indexed_jdks(n);

        assert_eq!(find_oldest_compatible(&mut host, &jdks, None), None);
        assert!(host.probes.len() <= max_probes(n));
    }

    #[test]
    fn all_passing_converges_to_index_zero() {
        let n = 9;
        let mut host = ScriptedHost::new(vec![true; n]);
        let jdks = indexed_jdks(n);

        assert_eq!(
            find_oldest_compatible(&mut host, &jdks, None),
            Some(jdks[0].clone())
        );
    }

    #[test]
    fn empty_list_returns_none_without_probing() {
        let mut host = ScriptedHost::new(vec![]);

        assert_eq!(find_oldest_compatible(&mut host, &[], None), None);
        assert!(host.probes.is_empty());
    }

    #[test]
    fn four_version_boundary_takes_two_probes() {
        // [fail, fail, pass, pass]: mid=2 passes -> record, right=2;
        // mid=1 fails -> left=2; loop ends with the answer at index 2.
        let mut host = ScriptedHost::new(vec![false, false, true, true]);
        let jdks = indexed_jdks(4);

        let oldest = find_oldest_compatible(&mut host, &jdks, None);

        assert_eq!(oldest, Some(jdks[2].clone()));
        assert_eq!(host.probes, vec![2, 1]);
    }

    #[test]
    fn package_is_passed_through_to_probes() {
        struct AssertingHost {
            saw_package: bool,
        }

        impl ProbeHost for AssertingHost {
            fn provision(&mut self, _version: &JdkVersion) -> bool {
                true
            }

            fn compile_probe(
                &mut self,
                _version: &JdkVersion,
                package: Option<&MavenPackage>,
            ) -> bool {
                self.saw_package = package.is_some();
                true
            }

            fn resolve_version(&mut self, _package: &MavenPackage) -> Result<Option<String>> {
                Ok(None)
            }
        }

        let mut host = AssertingHost { saw_package: false };
        let pkg = MavenPackage::new("ns", "art", "[1,2)");

        find_oldest_compatible(&mut host, &indexed_jdks(1), Some(&pkg));

        assert!(host.saw_package);
    }
}
