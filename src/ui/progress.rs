//! Sweep progress bar.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress across the configured package list.
///
/// The bar draws on stderr; per-package output printed through [`suspend`]
/// keeps stdout clean while the bar redraws underneath.
///
/// [`suspend`]: SweepProgress::suspend
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a progress bar over `total` packages.
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.magenta} {pos}/{len} {msg}")
                .expect("progress template must parse"),
        );
        Self { bar }
    }

    /// Create a bar that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Label the in-flight package.
    pub fn begin(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    /// Run `f` with the bar hidden so its output prints cleanly.
    pub fn suspend<T>(&self, f: impl FnOnce() -> T) -> T {
        self.bar.suspend(f)
    }

    /// Mark one package finished.
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
