//! Skill plan table view state.
//!
//! Each plan row is either collapsed (the initial state) or expanded. The
//! table owns one explicit map from plan name to expansion flag, so rows
//! toggle independently. Plan names are the row identity and are unique
//! because they are the keys of the `SkillPlans` mapping.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::capability::SkillPlanActions;
use crate::format::{days_between, format_date_in, format_days_remaining, parse_timestamp};
use crate::types::{AppData, Character, SkillPlan};

/// Prefix that marks a character entry nested under a plan row
pub const CHILD_PREFIX: &str = "\u{21B3} ";

/// Where a character stands against one plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterPlanStatus {
    Qualified,
    Pending,
    Missing,
}

impl CharacterPlanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CharacterPlanStatus::Qualified => "Qualified",
            CharacterPlanStatus::Pending => "Pending",
            CharacterPlanStatus::Missing => "Missing",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CharacterPlanStatus::Qualified => "status-qualified",
            CharacterPlanStatus::Pending => "status-pending",
            CharacterPlanStatus::Missing => "status-missing",
        }
    }
}

/// Summary status of a whole plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanStatus {
    /// Every listed character is qualified (and there is at least one)
    AllQualified,
    /// At least one character is still training toward the plan
    InProgress,
    /// Nobody is training and not everyone qualifies
    NoneQualified,
}

impl PlanStatus {
    fn from_plan(plan: &SkillPlan) -> Self {
        if !plan.pending_characters.is_empty() {
            PlanStatus::InProgress
        } else if !plan.qualified_characters.is_empty() && plan.missing_characters.is_empty() {
            PlanStatus::AllQualified
        } else {
            PlanStatus::NoneQualified
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PlanStatus::AllQualified => "plan-all-qualified",
            PlanStatus::InProgress => "plan-in-progress",
            PlanStatus::NoneQualified => "plan-none-qualified",
        }
    }
}

/// Pending finish annotation for a character entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFinish {
    /// `Mon D, HH:MM`
    pub date: String,
    pub days_remaining: i64,
    /// e.g. `3 days`, `Completed`
    pub remaining_label: String,
}

/// One character nested under an expanded plan row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCharacterEntry {
    pub name: String,
    /// Display text, `↳ name`
    pub label: String,
    pub status: CharacterPlanStatus,
    pub pending_finish: Option<PendingFinish>,
}

/// Render-ready row for one plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillPlanRow {
    pub name: String,
    pub qualified: usize,
    pub pending: usize,
    pub missing: usize,
    pub status: PlanStatus,
    pub expanded: bool,
    /// Empty while collapsed
    pub children: Vec<PlanCharacterEntry>,
}

/// Row actions forwarded to the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    Copy,
    Delete,
}

impl PlanAction {
    /// Fire the action for exactly one plan. The result is not observed.
    pub fn dispatch(self, plan_name: &str, actions: &dyn SkillPlanActions) {
        tracing::debug!(plan = %plan_name, action = ?self, "Dispatching skill plan action");
        match self {
            PlanAction::Copy => actions.copy_skill_plan(plan_name),
            PlanAction::Delete => actions.delete_skill_plan(plan_name),
        }
    }
}

/// Expansion state for the skill plan table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPlanTableState {
    expanded: BTreeMap<String, bool>,
}

impl SkillPlanTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, plan_name: &str) -> bool {
        self.expanded.get(plan_name).copied().unwrap_or(false)
    }

    /// Flip one row and return its new state. Other rows are untouched.
    pub fn toggle(&mut self, plan_name: &str) -> bool {
        let entry = self.expanded.entry(plan_name.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn set_expanded(&mut self, plan_name: &str, expanded: bool) {
        self.expanded.insert(plan_name.to_string(), expanded);
    }

    /// Drop state for plans that no longer exist.
    pub fn retain_plans<'a>(&mut self, plan_names: impl IntoIterator<Item = &'a String>) {
        let live: std::collections::BTreeSet<&String> = plan_names.into_iter().collect();
        self.expanded.retain(|name, _| live.contains(name));
    }

    /// Rows for the current data, using the wall clock and local time.
    pub fn rows(&self, data: &AppData) -> Vec<SkillPlanRow> {
        self.rows_at(data, Utc::now(), &chrono::Local)
    }

    /// Rows with an explicit clock and display zone.
    pub fn rows_at<Tz>(&self, data: &AppData, now: DateTime<Utc>, tz: &Tz) -> Vec<SkillPlanRow>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let characters = data.characters_by_name();
        data.skill_plans
            .iter()
            .map(|(name, plan)| self.row(name, plan, &characters, now, tz))
            .collect()
    }

    fn row<Tz>(
        &self,
        name: &str,
        plan: &SkillPlan,
        characters: &BTreeMap<&str, &Character>,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> SkillPlanRow
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let expanded = self.is_expanded(name);
        let children = if expanded {
            let groups = [
                (CharacterPlanStatus::Qualified, &plan.qualified_characters),
                (CharacterPlanStatus::Pending, &plan.pending_characters),
                (CharacterPlanStatus::Missing, &plan.missing_characters),
            ];
            groups
                .into_iter()
                .flat_map(|(status, names)| {
                    let mut sorted: Vec<&String> = names.iter().collect();
                    sorted.sort();
                    sorted.into_iter().map(move |n| (status, n))
                })
                .map(|(status, character_name)| PlanCharacterEntry {
                    name: character_name.clone(),
                    label: format!("{CHILD_PREFIX}{character_name}"),
                    status,
                    pending_finish: characters
                        .get(character_name.as_str())
                        .and_then(|c| c.pending_finish_date(name))
                        .and_then(|date| pending_finish(date, now, tz)),
                })
                .collect()
        } else {
            Vec::new()
        };

        SkillPlanRow {
            name: name.to_string(),
            qualified: plan.qualified_characters.len(),
            pending: plan.pending_characters.len(),
            missing: plan.missing_characters.len(),
            status: PlanStatus::from_plan(plan),
            expanded,
            children,
        }
    }
}

fn pending_finish<Tz>(date: &str, now: DateTime<Utc>, tz: &Tz) -> Option<PendingFinish>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let target = parse_timestamp(date)?;
    let days_remaining = days_between(target, now);
    Some(PendingFinish {
        date: format_date_in(date, tz),
        days_remaining,
        remaining_label: format_days_remaining(days_remaining),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data() -> AppData {
        serde_json::from_value(json!({
            "Accounts": [{
                "ID": 1,
                "Name": "Main",
                "Characters": [
                    {"Character": {"CharacterName": "C2", "PendingFinishDates": {"Plan A": "2026-10-21T12:00:00Z"}}},
                    {"Character": {"CharacterName": "C1"}}
                ]
            }],
            "SkillPlans": {
                "Plan A": {
                    "Name": "Plan A",
                    "QualifiedCharacters": ["C1"],
                    "PendingCharacters": ["C2"],
                    "MissingCharacters": ["C3"]
                },
                "Plan B": {"Name": "Plan B"}
            }
        }))
        .unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_rows_start_collapsed() {
        let state = SkillPlanTableState::new();
        let rows = state.rows_at(&data(), now(), &Utc);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| !r.expanded && r.children.is_empty()));
        assert_eq!(rows[0].name, "Plan A");
        assert_eq!((rows[0].qualified, rows[0].pending, rows[0].missing), (1, 1, 1));
        assert_eq!(rows[0].status, PlanStatus::InProgress);
    }

    #[test]
    fn test_toggle_is_per_row() {
        let mut state = SkillPlanTableState::new();
        assert!(state.toggle("Plan A"));
        assert!(state.is_expanded("Plan A"));
        assert!(!state.is_expanded("Plan B"));
        assert!(!state.toggle("Plan A"));
        assert!(!state.is_expanded("Plan A"));
    }

    #[test]
    fn test_expanded_children_order_and_annotations() {
        let mut state = SkillPlanTableState::new();
        state.toggle("Plan A");
        let rows = state.rows_at(&data(), now(), &Utc);
        let labels: Vec<_> = rows[0].children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["\u{21B3} C1", "\u{21B3} C2", "\u{21B3} C3"]);

        let pending = &rows[0].children[1];
        assert_eq!(pending.status, CharacterPlanStatus::Pending);
        let finish = pending.pending_finish.as_ref().unwrap();
        assert_eq!(finish.days_remaining, 3);
        assert_eq!(finish.remaining_label, "3 days");
        assert_eq!(finish.date, "Oct 21, 12:00");

        // No finish date for C1, and C3 is not a known character
        assert!(rows[0].children[0].pending_finish.is_none());
        assert!(rows[0].children[2].pending_finish.is_none());
    }

    #[test]
    fn test_empty_plan_still_toggles() {
        let mut state = SkillPlanTableState::new();
        assert!(state.toggle("Plan B"));
        let rows = state.rows_at(&data(), now(), &Utc);
        assert!(rows[1].expanded);
        assert!(rows[1].children.is_empty());
        assert_eq!(rows[1].status, PlanStatus::NoneQualified);
    }

    #[test]
    fn test_retain_plans_prunes_stale_rows() {
        let mut state = SkillPlanTableState::new();
        state.set_expanded("Plan A", true);
        state.set_expanded("Gone", true);
        let data = data();
        state.retain_plans(data.skill_plans.keys());
        assert!(state.is_expanded("Plan A"));
        assert!(!state.is_expanded("Gone"));
    }

    #[test]
    fn test_plan_status_all_qualified() {
        let plan = SkillPlan {
            qualified_characters: vec!["C1".into()],
            ..Default::default()
        };
        assert_eq!(PlanStatus::from_plan(&plan), PlanStatus::AllQualified);
    }
}
