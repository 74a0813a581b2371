//! Page components for CanIFly.

mod accounts;
mod skill_plans;

pub use accounts::Accounts;
pub use skill_plans::SkillPlans;
