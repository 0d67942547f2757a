//! Terminal feedback: a spinner while scanning and one-line status messages.

use std::path::Path;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::boundary::HorizontalBounds;
use crate::scan::WorldScanner;

/// Spinner for the region directory scan
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(spinner_style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }
}

/// Wraps another scanner and spins while it works.
pub struct SpinningScanner<S> {
    inner: S,
}

impl<S: WorldScanner> SpinningScanner<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: WorldScanner> WorldScanner for SpinningScanner<S> {
    fn scan(&self, region_dir: &Path) -> HorizontalBounds {
        let spinner = Spinner::new(&format!("Scanning {}", region_dir.display()));
        let found = self.inner.scan(region_dir);
        spinner.finish_clear();
        found
    }
}

/// Print a success message (green checkmark)
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message (red)
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Format a count with proper singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Extent;

    struct Fixed(HorizontalBounds);

    impl WorldScanner for Fixed {
        fn scan(&self, _: &Path) -> HorizontalBounds {
            self.0
        }
    }

    #[test]
    fn spinning_scanner_passes_result_through() {
        let found = HorizontalBounds::Defined(Extent::new(0, 1, 2, 3));
        let scanner = SpinningScanner::new(Fixed(found));
        assert_eq!(scanner.scan(Path::new("region")), found);
    }

    #[test]
    fn counts() {
        assert_eq!(format_count(1, "marker", "markers"), "1 marker");
        assert_eq!(format_count(3, "marker", "markers"), "3 markers");
    }
}
