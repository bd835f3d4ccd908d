//! Experiment execution glue.
//!
//! Wires configuration, the real probe host, the driver, and result writing
//! together, and translates outcomes into process exit codes.

use crate::cli::Cli;
use crate::config::{self, ExperimentConfig};
use crate::error::{JdkspanError, Result};
use crate::probe::MavenProbe;
use crate::report::{self, ExperimentResult};
use crate::runner::{experiment::summary_line, ExperimentRunner};
use crate::toolchain::ProvisionerContext;
use crate::ui::Output;
use anyhow::Context;

/// Execute the requested run, returning the process exit code.
pub fn execute(cli: &Cli, ui: &Output) -> Result<u8> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let config = config::load_or_default(cli.config.as_deref(), &cwd)?;

    if cli.list {
        for package in &config.packages {
            println!("{}", package.coordinate());
        }
        return Ok(0);
    }

    std::fs::create_dir_all(&cli.output)?;

    let mut host = MavenProbe::new(ProvisionerContext::sdkman(), config.jdks.clone());
    let mut runner = ExperimentRunner::new(&config, &mut host);

    match &cli.package {
        Some(coordinate) => run_single(&mut runner, &config, coordinate, cli, ui),
        None => run_full(&mut runner, &config, cli, ui),
    }
}

fn run_full(
    runner: &mut ExperimentRunner<'_>,
    config: &ExperimentConfig,
    cli: &Cli,
    ui: &Output,
) -> Result<u8> {
    ui.println("Starting dependency toolchain compatibility experiment");
    ui.println(&format!(
        "Testing {} packages across {} JDKs",
        config.packages.len(),
        config.jdks.len()
    ));

    let results = runner.run_full(ui);

    let path = report::write_results(&results, &cli.output)?;
    ui.success(&format!("Results written to {}", path.display()));
    Ok(0)
}

fn run_single(
    runner: &mut ExperimentRunner<'_>,
    config: &ExperimentConfig,
    coordinate: &str,
    cli: &Cli,
    ui: &Output,
) -> Result<u8> {
    let record = match runner.run_single(coordinate, ui) {
        Ok(record) => record,
        Err(JdkspanError::UnknownPackage { coordinate }) => {
            ui.warning(&format!(
                "'{coordinate}' is not in the configured package list"
            ));
            ui.println("Available packages:");
            for package in &config.packages {
                ui.println(&format!("  {}", package.coordinate()));
            }
            return Ok(1);
        }
        Err(e) => return Err(e),
    };

    print_record(&record, ui);

    let path = report::write_single(&record, &cli.output)?;
    ui.success(&format!("Result written to {}", path.display()));
    Ok(if record.error.is_some() { 1 } else { 0 })
}

fn print_record(record: &ExperimentResult, ui: &Output) {
    ui.println(&format!("\nResults for {}:", record.package_name));
    ui.println(&format!("  Version spec: {}", record.version_spec));
    ui.println(&format!(
        "  Resolved version: {}",
        record.resolved_version.as_deref().unwrap_or("N/A")
    ));
    ui.println(&format!("  {}", summary_line(record)));
    if let Some(error) = &record.error {
        ui.warning(&format!("  Error: {error}"));
    }
}
