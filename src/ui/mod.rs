//! Terminal output and progress display.

pub mod output;
pub mod progress;

pub use output::{Output, OutputMode};
pub use progress::SweepProgress;
