//! Configuration file discovery and loading.
//!
//! A config file is optional. Without one the built-in package and JDK lists
//! apply; with one, each section independently overrides its default, so a
//! file may pin a smaller JDK list while keeping the full package sweep.

use crate::config::{default_jdks, default_packages, ExperimentConfig, JdkVersion, MavenPackage};
use crate::error::{JdkspanError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "jdkspan.yml";

/// On-disk config schema. Absent sections fall back to the built-in defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    /// SDKMAN JDK identifiers, oldest first.
    jdks: Option<Vec<String>>,

    /// Packages to sweep.
    packages: Option<Vec<PackageEntry>>,
}

#[derive(Debug, Deserialize)]
struct PackageEntry {
    group: String,
    artifact: String,
    versions: String,
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<ExperimentConfig> {
    let content = fs::read_to_string(path).map_err(|_| JdkspanError::ConfigNotFound {
        path: path.to_path_buf(),
    })?;

    let file: ConfigFile =
        serde_yaml::from_str(&content).map_err(|e| JdkspanError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let config = ExperimentConfig {
        jdks: file
            .jdks
            .map(|jdks| jdks.into_iter().map(JdkVersion::new).collect())
            .unwrap_or_else(default_jdks),
        packages: file
            .packages
            .map(|packages| {
                packages
                    .into_iter()
                    .map(|p| MavenPackage::new(p.group, p.artifact, p.versions))
                    .collect()
            })
            .unwrap_or_else(default_packages),
    };

    config.validate()?;
    Ok(config)
}

/// Resolve the effective configuration for a run.
///
/// An explicit `--config` path must exist; otherwise `jdkspan.yml` in the
/// working directory is used when present, and the built-in defaults when not.
pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> Result<ExperimentConfig> {
    match explicit {
        Some(path) => load(path),
        None => {
            let discovered = cwd.join(CONFIG_FILE);
            if discovered.exists() {
                load(&discovered)
            } else {
                Ok(ExperimentConfig::default())
            }
        }
    }
}
