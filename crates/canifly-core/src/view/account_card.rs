//! Account card view state.
//!
//! The card never mutates the account it is given. Everything the user
//! does becomes an [`AccountCardAction`] dispatched to the data owner; the
//! only state the card holds is the rename edit buffer.

use crate::capability::AccountActions;
use crate::types::{Account, AccountId, AccountStatus, CharacterId, CharacterUpdate};

/// Rename edit-in-place state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing {
        buffer: String,
    },
}

/// Local state of one account card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountCardState {
    edit: EditState,
}

impl AccountCardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.edit, EditState::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&str> {
        match &self.edit {
            EditState::Editing { buffer } => Some(buffer),
            EditState::Viewing => None,
        }
    }

    /// Start editing with the current name in the buffer.
    pub fn begin_edit(&mut self, current_name: &str) {
        self.edit = EditState::Editing {
            buffer: current_name.to_string(),
        };
    }

    /// Replace the buffer contents. Ignored unless editing.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if let EditState::Editing { buffer } = &mut self.edit {
            *buffer = text.into();
        }
    }

    /// Discard the buffer.
    pub fn cancel(&mut self) {
        self.edit = EditState::Viewing;
    }

    /// Leave edit mode and return the rename to commit, if any.
    ///
    /// The buffer is trimmed. An empty result or the unchanged name commits
    /// nothing.
    pub fn confirm(&mut self, account: &Account) -> Option<AccountCardAction> {
        let edit = std::mem::take(&mut self.edit);
        let EditState::Editing { buffer } = edit else {
            return None;
        };
        let new_name = buffer.trim();
        if new_name.is_empty() || new_name == account.name {
            return None;
        }
        Some(AccountCardAction::Rename(new_name.to_string()))
    }
}

/// A user request raised by the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountCardAction {
    ToggleStatus,
    Rename(String),
    UpdateCharacter(CharacterId, CharacterUpdate),
    RemoveCharacter(CharacterId),
    RemoveAccount,
}

impl AccountCardAction {
    /// Forward to the owner with the account identity attached.
    pub fn dispatch(self, account: AccountId, actions: &dyn AccountActions) {
        tracing::debug!(%account, action = ?self, "Dispatching account action");
        match self {
            AccountCardAction::ToggleStatus => actions.toggle_account_status(account),
            AccountCardAction::Rename(name) => actions.rename_account(account, &name),
            AccountCardAction::UpdateCharacter(character, update) => {
                if !update.is_empty() {
                    actions.update_character(account, character, update);
                }
            }
            AccountCardAction::RemoveCharacter(character) => {
                actions.remove_character(account, character)
            }
            AccountCardAction::RemoveAccount => actions.remove_account(account),
        }
    }
}

/// CSS class for a status badge
pub fn status_class(status: &AccountStatus) -> &'static str {
    match status {
        AccountStatus::Omega => "status-omega",
        AccountStatus::Alpha => "status-alpha",
        AccountStatus::Other(_) => "status-other",
    }
}

/// Roles offered in a character's role selector.
///
/// The configured roles plus the character's current role when it is not
/// among them, sorted and de-duplicated. Empty when no roles are configured,
/// which hides the selector.
pub fn role_options(roles: &[String], current: &str) -> Vec<String> {
    if roles.is_empty() {
        return Vec::new();
    }
    let mut options: Vec<String> = roles.to_vec();
    if !current.is_empty() && !options.iter().any(|r| r == current) {
        options.push(current.to_string());
    }
    options.sort();
    options.dedup();
    options
}
