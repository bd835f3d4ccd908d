//! Experiment configuration.
//!
//! The package and JDK lists are an explicit [`ExperimentConfig`] value that
//! callers construct and pass down, never process-wide state. The built-in
//! defaults can be overridden (wholly or per-section) by a `jdkspan.yml`
//! config file, see [`loader`].

pub mod loader;
pub mod packages;
pub mod toolchains;

pub use loader::{load, load_or_default, CONFIG_FILE};
pub use packages::{default_packages, MavenPackage};
pub use toolchains::{default_jdks, JdkVersion};

use crate::error::{JdkspanError, Result};
use std::collections::HashSet;

/// The full configuration for one experiment run.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Packages to test, in sweep order.
    pub packages: Vec<MavenPackage>,

    /// JDK candidates, oldest first.
    pub jdks: Vec<JdkVersion>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            packages: default_packages(),
            jdks: default_jdks(),
        }
    }
}

impl ExperimentConfig {
    /// Look up a package by its `group:artifact` coordinate.
    pub fn find_package(&self, coordinate: &str) -> Option<&MavenPackage> {
        self.packages.iter().find(|p| p.coordinate() == coordinate)
    }

    /// The newest configured JDK, if any.
    pub fn newest_jdk(&self) -> Option<&JdkVersion> {
        self.jdks.last()
    }

    /// Validate structural invariants: coordinate fields non-empty, no
    /// duplicate coordinates, every JDK identifier parseable to a release
    /// level. Empty package or JDK lists are allowed.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for pkg in &self.packages {
            if pkg.group_id.is_empty() || pkg.artifact_id.is_empty() {
                return Err(JdkspanError::ConfigValidationError {
                    message: format!(
                        "package '{}' has an empty coordinate field",
                        pkg.coordinate()
                    ),
                });
            }
            if pkg.version_range.is_empty() {
                return Err(JdkspanError::ConfigValidationError {
                    message: format!("package '{}' has an empty version range", pkg.coordinate()),
                });
            }
            if !seen.insert(pkg.coordinate()) {
                return Err(JdkspanError::ConfigValidationError {
                    message: format!("duplicate package coordinate '{}'", pkg.coordinate()),
                });
            }
        }

        for jdk in &self.jdks {
            if jdk.release_number().is_none() {
                return Err(JdkspanError::ConfigValidationError {
                    message: format!("JDK identifier '{}' has no numeric release component", jdk),
                });
            }
        }

        Ok(())
    }
}
