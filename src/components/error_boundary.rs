//! Error boundary for the component tree.
//!
//! Wraps the framework boundary with a [`Supervisor`]. The first error
//! raised below it is reported once to the diagnostic sink, and from then
//! on the boundary renders [`ErrorFallback`] without touching its children
//! again.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use canifly_core::{DiagnosticSink, Supervisor, TracingSink, FALLBACK_MESSAGE};
use dioxus::prelude::ErrorBoundary as FrameworkBoundary;
use dioxus::prelude::*;

/// Where boundaries report failures. Provided as context; boundaries with
/// no provider above them report through `tracing`.
#[derive(Clone)]
pub struct BoundarySink(pub Arc<dyn DiagnosticSink>);

/// Catches render errors from `children`.
///
/// # Props
///
/// * `name` - Boundary name used in the failure report
/// * `children` - Subtree to protect
#[component]
pub fn ErrorBoundary(#[props(default = "app".to_string())] name: String, children: Element) -> Element {
    let supervisor = use_hook(|| {
        let sink = try_consume_context::<BoundarySink>()
            .map(|s| s.0)
            .unwrap_or_else(|| Arc::new(TracingSink));
        Rc::new(RefCell::new(Supervisor::with_sink(name.clone(), sink)))
    });

    if supervisor.borrow().is_failed() {
        return rsx! { ErrorFallback {} };
    }

    rsx! {
        FrameworkBoundary {
            handle_error: move |errors: ErrorContext| {
                let detail = errors
                    .errors()
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                supervisor.borrow_mut().record_failure(detail, "descendant render error");
                rsx! { ErrorFallback {} }
            },
            {children}
        }
    }
}

/// Static fallback. Takes no data so it cannot fail itself.
#[component]
pub fn ErrorFallback() -> Element {
    rsx! {
        div { class: "error-fallback", "role": "alert",
            h2 { "{FALLBACK_MESSAGE}" }
        }
    }
}
