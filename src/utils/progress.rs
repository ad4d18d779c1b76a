use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the scanlines of one page
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    pub fn new(total_rows: u64, page: usize) -> Self {
        let bar = ProgressBar::new(total_rows);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message(format!("page {}", page));

        ProgressTracker { bar }
    }

    /// A tracker that draws nothing
    pub fn hidden() -> Self {
        ProgressTracker {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn increment(&self, rows: u64) {
        self.bar.inc(rows);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("verified");
    }

    pub fn abandon(&self, reason: &str) {
        self.bar.abandon_with_message(reason.to_string());
    }
}
