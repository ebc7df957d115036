//! Progress UI utilities (spinner feedback for stylesheet scans).

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while walking directory roots for stylesheets.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner:.cyan} {msg}")
                .expect("valid template"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Finish with a green checkmark summary line.
    pub fn finish_success(&self, message: &str) {
        self.bar.finish_and_clear();
        eprintln!("{} {}", style("✓").green().bold(), message);
    }

    /// Finish with a yellow warning line.
    pub fn finish_warning(&self, message: &str) {
        self.bar.finish_and_clear();
        eprintln!("{} {}", style("⚠").yellow().bold(), message);
    }

    /// Clear without a summary (quiet mode).
    pub fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }
}
