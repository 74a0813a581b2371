//! Store context for CanIFly.
//!
//! The [`AppStore`] and the capability objects built on it are provided
//! once by the App root and read by pages and components via hooks.
//!
//! ## Usage
//!
//! ```ignore
//! // In a page
//! let data = use_app_data();
//! let actions = use_account_actions();
//! ```

use std::sync::Arc;

use canifly_core::{AccountCapability, AppConfig, AppData, AppStore, SkillPlanCapability};
use dioxus::prelude::*;

/// Shared owner store type for context.
pub type SharedStore = Arc<AppStore>;

/// Resolved configuration from the command line.
pub fn get_config() -> AppConfig {
    crate::get_config()
}

/// Hook to read the latest data snapshot.
///
/// `None` while nothing has been loaded. Re-renders readers whenever the
/// store changes.
pub fn use_app_data() -> Signal<Option<AppData>> {
    use_context::<Signal<Option<AppData>>>()
}

/// Account actions bound to the store
pub fn use_account_actions() -> AccountCapability {
    use_context::<AccountCapability>()
}

/// Skill plan actions bound to the store
pub fn use_skill_plan_actions() -> SkillPlanCapability {
    use_context::<SkillPlanCapability>()
}
