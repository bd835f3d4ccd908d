//! Output mode and writer.

use console::style;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show progress and status.
    #[default]
    Normal,
    /// Show only results and errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows the sweep progress bar.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a line if the mode allows status messages.
    pub fn println(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a section header.
    pub fn section(&self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}", style(format!("=== {} ===", title)).bold().magenta());
        }
    }

    /// Write a success line. Shown in every mode.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    /// Write a warning line. Shown in every mode.
    pub fn warning(&self, msg: &str) {
        println!("{} {}", style("⚠").color256(208), msg);
    }

    /// Write an error line to stderr. Shown in every mode.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }
}
