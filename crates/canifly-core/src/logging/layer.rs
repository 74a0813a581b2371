//! `tracing` layer that mirrors events into the session JSONL file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::{level_name, EventFields, JsonLogEntry};
use super::writer::SessionLogWriter;

/// Filter used when neither the builder nor `RUST_LOG` specify one
pub const DEFAULT_FILTER: &str = "canifly=info,canifly_core=info,canifly_ui=info";

pub struct JsonlLayer {
    writer: Arc<SessionLogWriter>,
}

impl JsonlLayer {
    pub fn new(logs_dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        let writer = SessionLogWriter::new(logs_dir, session)?;
        Ok(Self {
            writer: Arc::new(writer),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut collected = EventFields::default();
        event.record(&mut collected);

        let span = ctx.event_scope(event).map(|scope| {
            scope
                .from_root()
                .map(|span| span.name())
                .collect::<Vec<_>>()
                .join(" > ")
        });

        let entry = JsonLogEntry::new(
            level_name(metadata.level()),
            self.writer.session(),
            metadata.target(),
            collected.message,
        )
        .with_fields(collected.fields)
        .with_span(span);

        // Logging must never take the app down
        let _ = self.writer.write(&entry);
    }
}

/// Builds and installs the global subscriber.
pub struct LoggingBuilder {
    logs_dir: Option<PathBuf>,
    session: String,
    console_output: bool,
    env_filter: Option<String>,
}

impl LoggingBuilder {
    pub fn new(logs_dir: impl Into<PathBuf>, session: impl Into<String>) -> Self {
        Self {
            logs_dir: Some(logs_dir.into()),
            session: session.into(),
            console_output: true,
            env_filter: None,
        }
    }

    /// Console only, no JSONL file.
    pub fn console_only() -> Self {
        Self {
            logs_dir: None,
            session: String::new(),
            console_output: true,
            env_filter: None,
        }
    }

    pub fn no_console(mut self) -> Self {
        self.console_output = false;
        self
    }

    /// Set the filter (e.g. "canifly=debug"). Overrides `RUST_LOG`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn build_layer(&self) -> std::io::Result<Option<JsonlLayer>> {
        self.logs_dir
            .as_ref()
            .map(|dir| JsonlLayer::new(dir, &self.session))
            .transpose()
    }

    fn filter(&self) -> EnvFilter {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let directives = resolve_directives(self.env_filter.as_deref(), env);
        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }

    /// Install as the global default. Returns the JSONL path when a file
    /// layer is active.
    pub fn init(self) -> std::io::Result<Option<PathBuf>> {
        let jsonl = self.build_layer()?;
        let log_path = jsonl.as_ref().map(|l| l.log_path().to_path_buf());
        let console = self.console_output.then(|| tracing_subscriber::fmt::layer());

        tracing_subscriber::registry()
            .with(self.filter())
            .with(console)
            .with(jsonl)
            .try_init()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))?;

        Ok(log_path)
    }
}

/// Explicit filter, else a non-blank `RUST_LOG`, else [`DEFAULT_FILTER`].
fn resolve_directives(explicit: Option<&str>, env: Option<String>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| env.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
