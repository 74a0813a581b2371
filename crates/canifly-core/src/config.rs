//! Resolved desktop configuration.
//!
//! Command-line parsing lives in the binary; this is the plain result with
//! defaults filled in.

use std::path::PathBuf;

pub const DEFAULT_WINDOW_WIDTH: f64 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 800.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON payload to load at startup. `None` leaves the app in its
    /// loading state.
    pub data_file: Option<PathBuf>,
    pub logs_dir: PathBuf,
    /// Explicit filter directive. `None` defers to `RUST_LOG`, then to
    /// [`DEFAULT_FILTER`](crate::logging::DEFAULT_FILTER).
    pub log_filter: Option<String>,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            logs_dir: default_logs_dir(),
            log_filter: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl AppConfig {
    pub fn with_data_file(mut self, path: Option<PathBuf>) -> Self {
        self.data_file = path;
        self
    }

    pub fn with_logs_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.logs_dir = dir;
        }
        self
    }

    pub fn with_log_filter(mut self, filter: Option<String>) -> Self {
        if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
            self.log_filter = Some(filter);
        }
        self
    }
}

/// `<data dir>/canifly/logs`, or `./canifly/logs` when the platform has no
/// data dir.
pub fn default_logs_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("canifly")
        .join("logs")
}
