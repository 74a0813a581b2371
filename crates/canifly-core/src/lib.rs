//! CanIFly Core Library
//!
//! Framework-free half of the CanIFly desktop app: the data model, payload
//! normalization, display formatting, and the view state the components
//! render from.
//!
//! ## Data flow
//!
//! ```text
//! raw payload ─► normalize ─► NormalizedAppData ─► to_app_data ─► AppData
//!                                                                   │
//!                        SkillPlanTableState / AccountCardState ◄───┘
//!                                   │
//!                 user actions ─► capability traits ─► AppStore
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use canifly_core::{normalize, SkillPlanTableState};
//! use serde_json::json;
//!
//! let normalized = normalize(&json!({
//!     "SkillPlans": {"Plan A": {"QualifiedCharacters": ["C1"]}}
//! }))
//! .expect("payload is not null");
//! let data = normalized.to_app_data();
//!
//! let mut table = SkillPlanTableState::new();
//! table.toggle("Plan A");
//! let rows = table.rows(&data);
//! assert_eq!(rows[0].children[0].label, "\u{21B3} C1");
//! ```

pub mod capability;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod normalize;
pub mod store;
pub mod supervisor;
pub mod types;
pub mod view;

// Re-exports
pub use capability::{
    AccountActions, AccountCapability, ClipboardSink, SkillPlanActions, SkillPlanCapability,
};
pub use config::AppConfig;
pub use error::{CanIFlyError, CanIFlyResult};
pub use format::{
    calculate_days_from_today, format_date, format_days_remaining, format_skill_points,
    INVALID_DATE,
};
pub use normalize::{normalize, NormalizedAppData};
pub use store::AppStore;
pub use supervisor::{
    BoundaryState, DiagnosticSink, FailureReport, Supervised, Supervisor, TracingSink,
    FALLBACK_MESSAGE,
};
pub use types::*;
pub use view::*;
