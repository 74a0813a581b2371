//! Capabilities the view layer invokes but does not implement.
//!
//! Components receive these as explicit props instead of looking up
//! global functions. Calls are fire-and-forget: nothing is returned, and
//! failures are the implementor's business.

use std::fmt;
use std::sync::Arc;

use crate::types::{AccountId, CharacterId, CharacterUpdate};

/// Account and character mutations owned by the data store
pub trait AccountActions: Send + Sync {
    fn toggle_account_status(&self, account: AccountId);
    fn rename_account(&self, account: AccountId, new_name: &str);
    fn update_character(&self, account: AccountId, character: CharacterId, update: CharacterUpdate);
    fn remove_character(&self, account: AccountId, character: CharacterId);
    fn remove_account(&self, account: AccountId);
}

/// Skill plan operations owned by the hosting environment
pub trait SkillPlanActions: Send + Sync {
    fn copy_skill_plan(&self, plan_name: &str);
    fn delete_skill_plan(&self, plan_name: &str);
}

/// Shared handle to an [`AccountActions`] implementation.
///
/// Equality is pointer identity so the handle can sit in component props.
#[derive(Clone)]
pub struct AccountCapability(pub Arc<dyn AccountActions>);

impl AccountCapability {
    pub fn new(actions: Arc<dyn AccountActions>) -> Self {
        Self(actions)
    }
}

impl std::ops::Deref for AccountCapability {
    type Target = dyn AccountActions;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for AccountCapability {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AccountCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccountCapability")
    }
}

/// Shared handle to a [`SkillPlanActions`] implementation.
#[derive(Clone)]
pub struct SkillPlanCapability(pub Arc<dyn SkillPlanActions>);

impl SkillPlanCapability {
    pub fn new(actions: Arc<dyn SkillPlanActions>) -> Self {
        Self(actions)
    }
}

impl std::ops::Deref for SkillPlanCapability {
    type Target = dyn SkillPlanActions;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for SkillPlanCapability {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SkillPlanCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SkillPlanCapability")
    }
}

/// Destination for plan text produced by "copy skill plan"
pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> crate::error::CanIFlyResult<()>;
}
