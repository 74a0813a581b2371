//! Error types for CanIFly

use thiserror::Error;

/// Main error type for CanIFly operations
#[derive(Error, Debug)]
pub enum CanIFlyError {
    /// Account was not found in the loaded data
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Character was not found on the given account
    #[error("Character not found: {0}")]
    CharacterNotFound(String),

    /// Skill plan was not found in the loaded data
    #[error("Skill plan not found: {0}")]
    SkillPlanNotFound(String),

    /// No application data has been loaded yet
    #[error("No application data loaded")]
    NoData,

    /// Clipboard could not be written
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Error while decoding or encoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CanIFlyError
pub type CanIFlyResult<T> = Result<T, CanIFlyError>;
