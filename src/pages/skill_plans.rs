//! Skill plans page.

use canifly_ui::{SkeletonKind, SkeletonLoader};
use dioxus::prelude::*;

use crate::components::SkillPlanTable;
use crate::context::{use_app_data, use_skill_plan_actions};

#[component]
pub fn SkillPlans() -> Element {
    let data = use_app_data();
    let actions = use_skill_plan_actions();

    rsx! {
        h2 { class: "page-title", "Skill Plans" }
        {match data() {
            Some(data) => rsx! { SkillPlanTable { data, actions } },
            None => rsx! { SkeletonLoader { count: 5, kind: SkeletonKind::Row } },
        }}
    }
}
