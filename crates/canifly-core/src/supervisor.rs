//! Render supervisor behind the error boundary.
//!
//! A [`Supervisor`] wraps a render step. The first time the step fails,
//! either by returning `Err` or by panicking, the supervisor reports the
//! failure once to its [`DiagnosticSink`] and switches permanently to the
//! fallback. The step is never run again for that supervisor.

use std::any::Any;
use std::fmt::Display;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Static text shown in place of a failed subtree
pub const FALLBACK_MESSAGE: &str = "Something went wrong.";

/// What the supervisor knows about a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    /// Boundary that caught the failure
    pub boundary: String,
    /// The error message or panic payload
    pub error: String,
    /// Auxiliary diagnostic info (how the failure surfaced)
    pub info: String,
}

/// Observability sink for caught failures
pub trait DiagnosticSink {
    fn report(&self, report: &FailureReport);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn report(&self, report: &FailureReport) {
        (**self).report(report)
    }
}

/// Default sink: one `error` line through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, report: &FailureReport) {
        tracing::error!(
            boundary = %report.boundary,
            info = %report.info,
            "Render failure caught: {}",
            report.error
        );
    }
}

/// Supervisor state. `Failed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryState {
    Healthy,
    Failed,
}

/// Output of a supervised step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Supervised<T> {
    Content(T),
    Fallback,
}

impl<T> Supervised<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Supervised::Fallback)
    }

    pub fn content(self) -> Option<T> {
        match self {
            Supervised::Content(v) => Some(v),
            Supervised::Fallback => None,
        }
    }
}

pub struct Supervisor<S = TracingSink> {
    name: String,
    state: BoundaryState,
    sink: S,
}

impl Supervisor<TracingSink> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_sink(name, TracingSink)
    }
}

impl<S: DiagnosticSink> Supervisor<S> {
    pub fn with_sink(name: impl Into<String>, sink: S) -> Self {
        Self {
            name: name.into(),
            state: BoundaryState::Healthy,
            sink,
        }
    }

    pub fn state(&self) -> BoundaryState {
        self.state
    }

    pub fn is_failed(&self) -> bool {
        self.state == BoundaryState::Failed
    }

    /// Run one step under supervision.
    pub fn run<T, E, F>(&mut self, step: F) -> Supervised<T>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        if self.is_failed() {
            return Supervised::Fallback;
        }
        match catch_unwind(AssertUnwindSafe(step)) {
            Ok(Ok(value)) => Supervised::Content(value),
            Ok(Err(e)) => {
                self.record_failure(e, "render returned an error");
                Supervised::Fallback
            }
            Err(payload) => {
                self.record_failure(panic_message(payload.as_ref()), "render panicked");
                Supervised::Fallback
            }
        }
    }

    /// Move to `Failed` and report, unless already failed.
    ///
    /// Returns whether this call caused the transition.
    pub fn record_failure(&mut self, error: impl Display, info: impl Into<String>) -> bool {
        if self.is_failed() {
            return false;
        }
        self.state = BoundaryState::Failed;
        self.sink.report(&FailureReport {
            boundary: self.name.clone(),
            error: error.to_string(),
            info: info.into(),
        });
        true
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        reports: Mutex<Vec<FailureReport>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn report(&self, report: &FailureReport) {
            self.reports.lock().push(report.clone());
        }
    }

    #[test]
    fn test_healthy_passes_content_through() {
        let sink = Arc::new(RecordingSink::default());
        let mut sup = Supervisor::with_sink("root", sink.clone());
        let out = sup.run(|| Ok::<_, String>("hello"));
        assert_eq!(out, Supervised::Content("hello"));
        assert_eq!(sup.state(), BoundaryState::Healthy);
        assert!(sink.reports.lock().is_empty());
    }

    #[test]
    fn test_error_switches_to_fallback_once() {
        let sink = Arc::new(RecordingSink::default());
        let mut sup = Supervisor::with_sink("root", sink.clone());

        let out = sup.run(|| Err::<(), _>("boom"));
        assert!(out.is_fallback());
        assert!(sup.is_failed());

        // Later steps are not run and nothing more is reported
        let mut ran = false;
        let out = sup.run(|| {
            ran = true;
            Ok::<_, String>(())
        });
        assert!(out.is_fallback());
        assert!(!ran);

        let reports = sink.reports.lock();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].error, "boom");
        assert_eq!(reports[0].boundary, "root");
    }

    #[test]
    fn test_panic_is_caught() {
        let sink = Arc::new(RecordingSink::default());
        let mut sup = Supervisor::with_sink("cards", sink.clone());
        let out: Supervised<()> = sup.run(|| -> Result<(), String> { panic!("render exploded") });
        assert!(out.is_fallback());
        let reports = sink.reports.lock();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].error, "render exploded");
        assert_eq!(reports[0].info, "render panicked");
    }

    #[test]
    fn test_record_failure_is_idempotent() {
        let sink = Arc::new(RecordingSink::default());
        let mut sup = Supervisor::with_sink("root", sink.clone());
        assert!(sup.record_failure("first", "external"));
        assert!(!sup.record_failure("second", "external"));
        assert_eq!(sink.reports.lock().len(), 1);
    }
}
