//! UI components for CanIFly.
//!
//! Components render from `canifly-core` view state and forward every user
//! action through the injected capability objects.

mod account_card;
mod error_boundary;
mod footer;
mod skill_plan_table;
mod skill_progress;

pub use account_card::{AccountCard, CharacterRow};
pub use error_boundary::{BoundarySink, ErrorBoundary, ErrorFallback};
pub use footer::Footer;
pub use skill_plan_table::{PlanCharacterRow, PlanRow, SkillPlanTable};
pub use skill_progress::SkillProgress;
