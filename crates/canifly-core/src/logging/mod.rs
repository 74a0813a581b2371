//! Logging setup: console output plus a per-session JSONL file.
//!
//! ```text
//! logs/
//! └── raw/
//!     ├── 2026-10-18_desktop.jsonl
//!     └── 2026-10-19_desktop.jsonl
//! ```
//!
//! ```ignore
//! use canifly_core::logging::LoggingBuilder;
//!
//! let log_path = LoggingBuilder::new("./logs", "desktop")
//!     .with_filter("canifly=debug")
//!     .init()?;
//! ```
//!
//! Errors caught by the error boundary land here as `error` entries, so
//! `jq 'select(.level == "error")' logs/raw/*.jsonl` lists every render
//! failure.

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder, DEFAULT_FILTER};
pub use writer::SessionLogWriter;
