//! Skill plan table component.
//!
//! One row per plan with its progress and copy/delete actions. Rows start
//! collapsed; expanding one lists its characters beneath it, qualified
//! first, then pending with their finish dates, then missing.
//!
//! ## Components
//!
//! - [`SkillPlanTable`] - Table owning the expansion state
//! - [`PlanRow`] - One plan plus its character rows when expanded
//! - [`PlanCharacterRow`] - One nested character

use canifly_core::{
    AppData, PlanAction, PlanCharacterEntry, SkillPlanCapability, SkillPlanRow,
    SkillPlanTableState,
};
use canifly_ui::IconButton;
use dioxus::prelude::*;

use super::SkillProgress;

/// Expand/collapse glyph for a row
fn toggle_symbol(expanded: bool) -> &'static str {
    if expanded {
        "\u{25BE}"
    } else {
        "\u{25B8}"
    }
}

/// `Oct 21, 12:00 (3 days)`, or empty when there is no finish date
fn finish_text(entry: &PlanCharacterEntry) -> String {
    entry
        .pending_finish
        .as_ref()
        .map(|f| format!("{} ({})", f.date, f.remaining_label))
        .unwrap_or_default()
}

/// All skill plans in the data.
///
/// # Props
///
/// * `data` - Current application data
/// * `actions` - Owner that receives copy and delete
#[component]
pub fn SkillPlanTable(data: AppData, actions: SkillPlanCapability) -> Element {
    let mut state = use_signal(SkillPlanTableState::new);

    // Forget expansion for plans that disappeared
    use_effect(use_reactive((&data,), move |(data,)| {
        state.write().retain_plans(data.skill_plans.keys());
    }));

    let dispatch = use_callback(move |(action, plan): (PlanAction, String)| {
        action.dispatch(&plan, &*actions)
    });

    let rows = state.read().rows(&data);

    if rows.is_empty() {
        return rsx! {
            p { class: "empty-state", "No skill plans" }
        };
    }

    rsx! {
        table { class: "plan-table",
            thead {
                tr {
                    th {}
                    th { "Plan" }
                    th { "Progress" }
                    th { "Qualified" }
                    th { "Pending" }
                    th { "Missing" }
                    th { "Actions" }
                }
            }
            tbody {
                for row in rows {
                    PlanRow {
                        key: "{row.name}",
                        row: row.clone(),
                        on_toggle: move |plan: String| {
                            let expanded = state.write().toggle(&plan);
                            tracing::debug!(plan = %plan, expanded, "Toggled skill plan row");
                        },
                        on_action: move |request: (PlanAction, String)| dispatch.call(request),
                    }
                }
            }
        }
    }
}

/// One plan row, followed by its characters when expanded.
///
/// # Props
///
/// * `row` - Render-ready row from [`SkillPlanTableState`]
/// * `on_toggle` - Called with the plan name to flip expansion
/// * `on_action` - Called with copy or delete for this plan
#[component]
pub fn PlanRow(
    row: SkillPlanRow,
    on_toggle: EventHandler<String>,
    on_action: EventHandler<(PlanAction, String)>,
) -> Element {
    let toggle_name = row.name.clone();
    let copy_name = row.name.clone();
    let delete_name = row.name.clone();
    let toggle_label = if row.expanded { "Collapse plan" } else { "Expand plan" }.to_string();
    let total = row.qualified + row.pending + row.missing;

    rsx! {
        tr { class: "plan-row {row.status.class()}",
            td {
                IconButton {
                    aria_label: toggle_label,
                    onclick: move |_| on_toggle.call(toggle_name.clone()),
                    "{toggle_symbol(row.expanded)}"
                }
            }
            td { class: "plan-row__name", "{row.name}" }
            td { SkillProgress { qualified: row.qualified, total: total } }
            td { "{row.qualified}" }
            td { "{row.pending}" }
            td { "{row.missing}" }
            td {
                IconButton {
                    aria_label: "Copy plan",
                    onclick: move |_| on_action.call((PlanAction::Copy, copy_name.clone())),
                    "\u{29C9}"
                }
                IconButton {
                    aria_label: "Delete plan",
                    class: "danger",
                    onclick: move |_| on_action.call((PlanAction::Delete, delete_name.clone())),
                    "\u{1F5D1}"
                }
            }
        }
        for (index, entry) in row.children.iter().enumerate() {
            PlanCharacterRow { key: "{index}", entry: entry.clone() }
        }
    }
}

/// A character nested under an expanded plan
#[component]
pub fn PlanCharacterRow(entry: PlanCharacterEntry) -> Element {
    let status_class = entry.status.class();
    let finish = finish_text(&entry);

    rsx! {
        tr { class: "plan-child",
            td {}
            td { class: "plan-child__name {status_class}", "{entry.label}" }
            td { class: "{status_class}", colspan: "2", "{entry.status.label()}" }
            td { class: "plan-child__finish", colspan: "3", "{finish}" }
        }
    }
}
