//! View state derived from [`AppData`](crate::types::AppData).
//!
//! Everything here is framework-free so it can be tested without a renderer.

pub mod account_card;
pub mod skill_plan_table;
pub mod skill_progress;

pub use account_card::{role_options, status_class, AccountCardAction, AccountCardState, EditState};
pub use skill_plan_table::{
    CharacterPlanStatus, PendingFinish, PlanAction, PlanCharacterEntry, PlanStatus,
    SkillPlanRow, SkillPlanTableState, CHILD_PREFIX,
};
pub use skill_progress::SkillProgress;
