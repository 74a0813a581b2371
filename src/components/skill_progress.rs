//! Qualified-characters progress for one plan.

use canifly_ui::ProgressRing;
use dioxus::prelude::*;

/// Ring plus a `qualified/total` caption
#[component]
pub fn SkillProgress(qualified: usize, total: usize) -> Element {
    rsx! {
        div { class: "skill-progress",
            ProgressRing { value: qualified, total: total }
            span { class: "skill-progress__caption", "{qualified}/{total}" }
        }
    }
}
