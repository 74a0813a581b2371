//! Loading placeholders shown while application data is not yet available.

use dioxus::prelude::*;

/// Shapes a skeleton can take
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SkeletonKind {
    /// Account card outline
    #[default]
    Card,
    /// Single table row
    Row,
}

impl SkeletonKind {
    pub fn class(&self) -> &'static str {
        match self {
            SkeletonKind::Card => "skeleton skeleton-card",
            SkeletonKind::Row => "skeleton skeleton-row",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SkeletonLoaderProps {
    /// Number of placeholders (default: 3)
    #[props(default = 3)]
    pub count: usize,
    #[props(default)]
    pub kind: SkeletonKind,
}

/// A column of pulsing placeholders
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if data.is_none() {
///         SkeletonLoader { count: 4 }
///     }
/// }
/// ```
#[component]
pub fn SkeletonLoader(props: SkeletonLoaderProps) -> Element {
    let class = props.kind.class();

    rsx! {
        div {
            class: "skeleton-list",
            "role": "status",
            "aria-busy": "true",
            "aria-label": "Loading",
            for index in 0..props.count {
                div {
                    key: "{index}",
                    class: "{class}",
                    style: "--index: {index}",
                    div { class: "skeleton-line skeleton-line--title" }
                    div { class: "skeleton-line" }
                    div { class: "skeleton-line skeleton-line--short" }
                }
            }
        }
    }
}
