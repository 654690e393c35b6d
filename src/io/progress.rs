//! Progress display for the stages of one mosaic run

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:<16} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{msg:<16} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates progress display across the pipeline stages of one run
///
/// Counted stages (block matching) get a bar; stages with no unit of
/// progress (decoding, compositing) get a spinner. Finished stages stay
/// on screen so the run reads as a checklist.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    current: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            current: None,
        }
    }

    /// Start a stage with a known amount of work
    pub fn start_stage(&mut self, message: &'static str, len: usize) {
        self.finish_current();

        let bar = ProgressBar::new(len as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_message(message);
        self.current = Some(self.multi_progress.add(bar));
    }

    /// Start a stage with no measurable unit of progress
    pub fn start_spinner(&mut self, message: &'static str) {
        self.finish_current();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.current = Some(self.multi_progress.add(spinner));
    }

    /// Advance the active stage by one unit
    pub fn advance(&self) {
        if let Some(bar) = &self.current {
            bar.inc(1);
        }
    }

    /// Finish the active stage and clear the display
    pub fn finish(&mut self) {
        self.finish_current();
        let _ = self.multi_progress.clear();
    }

    fn finish_current(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.finish();
        }
    }
}
