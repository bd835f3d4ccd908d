//! Experiment result records and JSON persistence.
//!
//! Results are written pretty-printed: a JSON array at `results.json` for a
//! full sweep, or a single object at `result-<coordinate>.json` for a
//! single-package run. Absent optional fields are omitted from the document
//! rather than serialized as null.

use crate::config::JdkVersion;
use crate::error::{JdkspanError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name for full-sweep results.
pub const RESULTS_FILE: &str = "results.json";

/// Outcome of testing one package (or the control case).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// `group:artifact` coordinate, or `CONTROL` for the no-dependency case.
    pub package_name: String,

    /// The version range that was requested.
    pub version_spec: String,

    /// Concrete version Maven resolved under the newest JDK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_version: Option<String>,

    /// Oldest JDK the package compiled under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_compatible: Option<JdkVersion>,

    /// Newest configured JDK, reported verbatim without probing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_compatible: Option<JdkVersion>,

    /// Populated when the package's whole result failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExperimentResult {
    /// A fresh record with no outcome fields yet.
    pub fn new(package_name: impl Into<String>, version_spec: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            version_spec: version_spec.into(),
            resolved_version: None,
            oldest_compatible: None,
            latest_compatible: None,
            error: None,
        }
    }

    /// A record for a package whose test failed outright.
    pub fn failed(
        package_name: impl Into<String>,
        version_spec: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        let mut result = Self::new(package_name, version_spec);
        result.error = Some(error.into());
        result
    }

    /// File name for a single-package result (`:` is not filename-safe).
    pub fn single_file_name(&self) -> String {
        format!("result-{}.json", self.package_name.replace(':', "-"))
    }
}

/// Write the full-sweep results array into `dir`, returning the path.
pub fn write_results(results: &[ExperimentResult], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(RESULTS_FILE);
    write_pretty(results, &path)?;
    Ok(path)
}

/// Write a single-package result into `dir`, returning the path.
pub fn write_single(result: &ExperimentResult, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(result.single_file_name());
    write_pretty(result, &path)?;
    Ok(path)
}

fn write_pretty<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let mut json =
        serde_json::to_string_pretty(value).map_err(|e| JdkspanError::ReportWriteError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
