//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Experiment execution and result writing

pub mod args;
pub mod run;

pub use args::Cli;
