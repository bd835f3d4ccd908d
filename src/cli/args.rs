//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// jdkspan - JDK compatibility range experiments for Maven dependencies.
///
/// Without a coordinate, sweeps the whole configured package list plus a
/// no-dependency control case. With one, tests that package in isolation.
#[derive(Debug, Parser)]
#[command(name = "jdkspan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Package coordinate (group:artifact) to test in isolation
    pub package: Option<String>,

    /// Path to config file (overrides ./jdkspan.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory where result files are written
    #[arg(short, long, env = "JDKSPAN_OUTPUT", default_value = ".")]
    pub output: PathBuf,

    /// List configured package coordinates and exit
    #[arg(long)]
    pub list: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_invocation() {
        let cli = Cli::parse_from(["jdkspan"]);
        assert!(cli.package.is_none());
        assert!(!cli.list);
        assert_eq!(cli.output, PathBuf::from("."));
    }

    #[test]
    fn parses_positional_coordinate() {
        let cli = Cli::parse_from(["jdkspan", "com.google.guava:guava"]);
        assert_eq!(cli.package.as_deref(), Some("com.google.guava:guava"));
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "jdkspan",
            "--config",
            "custom.yml",
            "--output",
            "out",
            "--quiet",
            "--debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
