//! The experiment driver.
//!
//! Iterates the configured packages (plus the no-dependency control case),
//! running version resolution and the compatibility search for each. A
//! failure while testing one package is captured into that package's result
//! record; it never aborts the sweep.

use crate::config::{ExperimentConfig, MavenPackage};
use crate::error::{JdkspanError, Result};
use crate::probe::ProbeHost;
use crate::report::ExperimentResult;
use crate::search::find_oldest_compatible;
use crate::ui::{Output, SweepProgress};

/// Drives a full sweep or a single-package run over a [`ProbeHost`].
pub struct ExperimentRunner<'a> {
    config: &'a ExperimentConfig,
    host: &'a mut dyn ProbeHost,
}

impl<'a> ExperimentRunner<'a> {
    /// Create a runner over the given configuration and probe host.
    pub fn new(config: &'a ExperimentConfig, host: &'a mut dyn ProbeHost) -> Self {
        Self { config, host }
    }

    /// Run the control case and every configured package, in order.
    ///
    /// Always returns one record per package plus the control record, with
    /// failures captured in each record's error field.
    pub fn run_full(&mut self, ui: &Output) -> Vec<ExperimentResult> {
        let config = self.config;
        let mut results = Vec::with_capacity(config.packages.len() + 1);

        let progress = if ui.mode().shows_progress() {
            SweepProgress::new(config.packages.len())
        } else {
            SweepProgress::hidden()
        };

        progress.suspend(|| ui.section("Testing control case (no dependencies)"));
        let control = self.control_case();
        progress.suspend(|| ui.println(&summary_line(&control)));
        results.push(control);

        for package in &config.packages {
            let coordinate = package.coordinate();
            progress.begin(&coordinate);

            let record = progress.suspend(|| {
                ui.section(&format!("Testing {coordinate}"));
                match self.test_package(package) {
                    Ok(record) => {
                        ui.println(&summary_line(&record));
                        record
                    }
                    Err(e) => {
                        ui.warning(&format!("{coordinate} failed: {e}"));
                        ExperimentResult::failed(
                            coordinate.clone(),
                            package.version_range.clone(),
                            e.to_string(),
                        )
                    }
                }
            });

            results.push(record);
            progress.advance();
        }

        progress.finish();
        results
    }

    /// Run a single package selected by coordinate.
    ///
    /// Errors only when the coordinate is not in the configured list; a
    /// failure while testing a known package is captured in the record.
    pub fn run_single(&mut self, coordinate: &str, ui: &Output) -> Result<ExperimentResult> {
        let config = self.config;
        let Some(package) = config.find_package(coordinate) else {
            return Err(JdkspanError::UnknownPackage {
                coordinate: coordinate.to_string(),
            });
        };

        ui.section(&format!(
            "Testing {} (version spec: {})",
            package.coordinate(),
            package.version_range
        ));

        let record = match self.test_package(package) {
            Ok(record) => record,
            Err(e) => {
                ui.warning(&format!("{} failed: {e}", package.coordinate()));
                ExperimentResult::failed(
                    package.coordinate(),
                    package.version_range.clone(),
                    e.to_string(),
                )
            }
        };

        Ok(record)
    }

    /// The no-dependency baseline: same probe, empty dependency set.
    fn control_case(&mut self) -> ExperimentResult {
        let mut result = ExperimentResult::new("CONTROL", "none");
        result.oldest_compatible =
            find_oldest_compatible(self.host, &self.config.jdks, None);
        result.latest_compatible = self.config.newest_jdk().cloned();
        result
    }

    fn test_package(&mut self, package: &MavenPackage) -> Result<ExperimentResult> {
        let mut result = ExperimentResult::new(package.coordinate(), package.version_range.clone());

        result.resolved_version = self.host.resolve_version(package)?;
        result.oldest_compatible =
            find_oldest_compatible(self.host, &self.config.jdks, Some(package));
        // The newest configured JDK is reported as-is, not probed.
        result.latest_compatible = self.config.newest_jdk().cloned();

        Ok(result)
    }
}

/// One-line outcome summary for a record.
pub fn summary_line(result: &ExperimentResult) -> String {
    format!(
        "{}: oldest={}, latest={}",
        result.package_name,
        result
            .oldest_compatible
            .as_ref()
            .map_or("none", |v| v.as_str()),
        result
            .latest_compatible
            .as_ref()
            .map_or("none", |v| v.as_str()),
    )
}
