//! Circular progress indicator.
//!
//! Geometry comes from [`canifly_core::SkillProgress`]; this only draws it.

use canifly_core::SkillProgress;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ProgressRingProps {
    pub value: usize,
    pub total: usize,
    /// Outer size in pixels (default: 40)
    #[props(default = 40)]
    pub size: u32,
    /// Stroke width in pixels (default: 4)
    #[props(default = 4)]
    pub stroke: u32,
}

/// SVG ring filled to `value / total`, with the percentage in the middle
#[component]
pub fn ProgressRing(props: ProgressRingProps) -> Element {
    let progress = SkillProgress::new(props.value, props.total);
    let size = props.size;
    let center = size as f64 / 2.0;
    let radius = center - props.stroke as f64;
    let circumference = SkillProgress::circumference(radius);
    let offset = progress.dash_offset(radius);
    let label = progress.label();

    rsx! {
        div {
            class: "progress-ring",
            title: "{props.value} / {props.total}",
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 {size} {size}",
                "aria-hidden": "true",
                circle {
                    class: "progress-ring__track",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{radius}",
                    fill: "none",
                    stroke_width: "{props.stroke}",
                }
                circle {
                    class: "progress-ring__fill",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{radius}",
                    fill: "none",
                    stroke_width: "{props.stroke}",
                    stroke_dasharray: "{circumference}",
                    stroke_dashoffset: "{offset}",
                    transform: "rotate(-90 {center} {center})",
                }
            }
            span { class: "progress-ring__label", "{label}" }
        }
    }
}
