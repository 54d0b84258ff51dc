//! Export observer: writes the final statistics when the run ends.

use std::path::PathBuf;

use via_sim::{SimObserver, TrafficStats};

use crate::{OutputError, write_stats_json};

/// A [`SimObserver`] that exports the last computed statistics to a JSON
/// file once the run ends.
///
/// Observer methods return nothing, so a write failure is stored internally
/// and retrieved with [`take_error`][Self::take_error] after the run.
pub struct StatsExportObserver {
    path:       PathBuf,
    last_error: Option<OutputError>,
}

impl StatsExportObserver {
    /// Create an observer that will write to `path` when the run ends.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:       path.into(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if the export succeeded or never ran.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }
}

impl SimObserver for StatsExportObserver {
    fn on_run_end(&mut self, stats: &TrafficStats) {
        if let Err(e) = write_stats_json(stats, &self.path) {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}
