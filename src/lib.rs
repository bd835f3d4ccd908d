//! jdkspan - JDK compatibility range experiments for Maven dependencies.
//!
//! jdkspan measures, for each of a configured set of Maven dependencies, the
//! oldest JDK under which a minimal project declaring that dependency still
//! compiles. It binary-searches an ascending JDK list, provisioning versions
//! through SDKMAN and probing with Maven in throwaway project directories.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and run glue
//! - [`config`] - Package and JDK lists, config-file loading
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Throwaway workspaces, the probe host, tree-output scraping
//! - [`report`] - Result records and JSON persistence
//! - [`runner`] - Experiment orchestration
//! - [`search`] - Oldest-compatible binary search
//! - [`shell`] - Bounded external command execution
//! - [`toolchain`] - SDKMAN provisioning
//! - [`ui`] - Terminal output and progress
//!
//! # Example
//!
//! ```
//! use jdkspan::config::default_jdks;
//!
//! // The built-in probe list starts at the oldest widely-used LTS.
//! let jdks = default_jdks();
//! assert_eq!(jdks.first().unwrap().release_number(), Some(8));
//! ```
//!
//! The compatibility search and driver only talk to the
//! [`probe::ProbeHost`] trait, so they can be exercised without SDKMAN or
//! Maven present; see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod runner;
pub mod search;
pub mod shell;
pub mod toolchain;
pub mod ui;

pub use error::{JdkspanError, Result};
