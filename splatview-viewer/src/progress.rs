//! Log-backed progress presentation
//!
//! Plays the role of the progress bar: a label shown when a load starts,
//! percentage updates while it runs, and a final hide.

use splatview_core::ProgressSink;

/// Progress sink reporting through the `log` macros
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    label: String,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for ConsoleProgress {
    fn show_progress(&mut self, message: &str, pct: f32) {
        self.label = message.to_string();
        log::info!("{message} {:.0}%", pct);
    }

    fn update_progress(&mut self, pct: f32) {
        log::debug!("{} {:.0}%", self.label, pct);
    }

    fn hide_progress(&mut self) {
        log::info!("{} done", self.label);
        self.label.clear();
    }
}
