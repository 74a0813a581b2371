//! Core types for CanIFly
//!
//! Field names follow the payload the backend produces (PascalCase keys,
//! lower-case `associations`). Collections tolerate `null` because the
//! backend serializes empty lists that way.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identity of an account as assigned by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account_{}", self.0)
    }
}

/// Identity of a character (the game's character ID)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub i64);

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "character_{}", self.0)
    }
}

/// Subscription status of an account
///
/// Anything other than the two known values is kept verbatim so that
/// round-tripping a payload never loses information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountStatus {
    Alpha,
    Omega,
    Other(String),
}

impl AccountStatus {
    /// Status after a toggle. Only `Alpha` moves to `Omega`; everything
    /// else (including unknown values) moves to `Alpha`.
    pub fn toggled(&self) -> Self {
        match self {
            AccountStatus::Alpha => AccountStatus::Omega,
            _ => AccountStatus::Alpha,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AccountStatus::Alpha => "Alpha",
            AccountStatus::Omega => "Omega",
            AccountStatus::Other(s) => s,
        }
    }
}

impl Default for AccountStatus {
    fn default() -> Self {
        AccountStatus::Alpha
    }
}

impl From<String> for AccountStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Alpha" => AccountStatus::Alpha,
            "Omega" => AccountStatus::Omega,
            _ => AccountStatus::Other(s),
        }
    }
}

impl From<AccountStatus> for String {
    fn from(status: AccountStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character record as reported by the game API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "CharacterID", default, deserialize_with = "null_as_default")]
    pub character_id: CharacterId,
    #[serde(rename = "CharacterName", default, deserialize_with = "null_as_default")]
    pub character_name: String,
    #[serde(rename = "TotalSP", default, deserialize_with = "null_as_default")]
    pub total_sp: u64,
    /// Plan name -> ISO-8601 date the plan finishes training.
    /// A `None` value means the backend knows the plan but has no date.
    #[serde(
        rename = "PendingFinishDates",
        default,
        deserialize_with = "null_as_default"
    )]
    pub pending_finish_dates: BTreeMap<String, Option<String>>,
    /// Fields this client does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Character {
    /// Finish date for a plan, if the backend provided one.
    pub fn pending_finish_date(&self, plan: &str) -> Option<&str> {
        self.pending_finish_dates
            .get(plan)
            .and_then(|d| d.as_deref())
            .filter(|d| !d.is_empty())
    }
}

/// A character as attached to an account, with per-account settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterIdentity {
    #[serde(rename = "Character", default, deserialize_with = "null_as_default")]
    pub character: Character,
    #[serde(rename = "Role", default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(rename = "MCT", default, deserialize_with = "null_as_default")]
    pub mct: bool,
}

impl CharacterIdentity {
    pub fn id(&self) -> CharacterId {
        self.character.character_id
    }

    pub fn name(&self) -> &str {
        &self.character.character_name
    }
}

/// Partial character update forwarded to the data owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterUpdate {
    #[serde(rename = "Role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "MCT", skip_serializing_if = "Option::is_none")]
    pub mct: Option<bool>,
}

impl CharacterUpdate {
    pub fn role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            mct: None,
        }
    }

    pub fn mct(mct: bool) -> Self {
        Self {
            role: None,
            mct: Some(mct),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.mct.is_none()
    }

    /// Apply the present fields to a character.
    pub fn apply(&self, target: &mut CharacterIdentity) {
        if let Some(role) = &self.role {
            target.role = role.clone();
        }
        if let Some(mct) = self.mct {
            target.mct = mct;
        }
    }
}

/// Game account holding one or more characters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "ID", default, deserialize_with = "null_as_default")]
    pub id: AccountId,
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Status", default, deserialize_with = "null_as_default")]
    pub status: AccountStatus,
    #[serde(rename = "Characters", default, deserialize_with = "null_as_default")]
    pub characters: Vec<CharacterIdentity>,
}

impl Account {
    pub fn character(&self, id: CharacterId) -> Option<&CharacterIdentity> {
        self.characters.iter().find(|c| c.id() == id)
    }
}

/// A single skill requirement inside a plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Level", default, deserialize_with = "null_as_default")]
    pub level: u8,
}

/// Named skill plan with characters grouped by qualification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillPlan {
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Skills", default, deserialize_with = "null_as_default")]
    pub skills: BTreeMap<String, Skill>,
    #[serde(
        rename = "QualifiedCharacters",
        default,
        deserialize_with = "null_as_default"
    )]
    pub qualified_characters: Vec<String>,
    #[serde(
        rename = "PendingCharacters",
        default,
        deserialize_with = "null_as_default"
    )]
    pub pending_characters: Vec<String>,
    #[serde(
        rename = "MissingCharacters",
        default,
        deserialize_with = "null_as_default"
    )]
    pub missing_characters: Vec<String>,
}

impl SkillPlan {
    /// Total characters across all three status sets
    pub fn character_count(&self) -> usize {
        self.qualified_characters.len()
            + self.pending_characters.len()
            + self.missing_characters.len()
    }

    /// Plan text in the game's import format: one `<Skill> <Level>` per line,
    /// ordered by skill name.
    pub fn to_import_text(&self) -> String {
        self.skills
            .values()
            .map(|skill| format!("{} {}", skill.name, skill.level))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Link between a character and a settings-directory user file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    #[serde(default, deserialize_with = "null_as_default")]
    pub char_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub char_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
}

/// A game settings directory and the files found in it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubDirectory {
    #[serde(rename = "Profile", default, deserialize_with = "null_as_default")]
    pub profile: String,
    #[serde(
        rename = "AvailableCharFiles",
        default,
        deserialize_with = "null_as_default"
    )]
    pub available_char_files: Vec<Value>,
    #[serde(
        rename = "AvailableUserFiles",
        default,
        deserialize_with = "null_as_default"
    )]
    pub available_user_files: Vec<Value>,
}

/// Typed view of the whole client-side state
///
/// Built from a normalized payload by
/// [`NormalizedAppData::to_app_data`](crate::normalize::NormalizedAppData::to_app_data).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(rename = "Accounts", default, deserialize_with = "null_as_default")]
    pub accounts: Vec<Account>,
    #[serde(rename = "Roles", default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
    #[serde(rename = "SkillPlans", default, deserialize_with = "null_as_default")]
    pub skill_plans: BTreeMap<String, SkillPlan>,
    #[serde(rename = "SubDirs", default, deserialize_with = "null_as_default")]
    pub sub_dirs: Vec<SubDirectory>,
    #[serde(rename = "associations", default, deserialize_with = "null_as_default")]
    pub associations: Vec<Association>,
    #[serde(rename = "UserSelections", default, deserialize_with = "null_as_default")]
    pub user_selections: Map<String, Value>,
}

impl AppData {
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    /// Give every account and every character an id no other record shares.
    ///
    /// A missing `ID` or `CharacterID` decodes as 0. Records with id 0, or
    /// with an id already taken earlier in the payload, get fresh ids above
    /// the largest one in use, in payload order. Account and character
    /// actions then always resolve to exactly one record.
    pub fn assign_identities(&mut self) {
        let mut taken = BTreeSet::new();
        let mut next = next_free(self.accounts.iter().map(|a| a.id.0));
        let mut reassigned = 0usize;
        for account in &mut self.accounts {
            if account.id.0 == 0 || !taken.insert(account.id) {
                account.id = AccountId(next);
                taken.insert(account.id);
                next = next.saturating_add(1);
                reassigned += 1;
            }
        }

        let mut taken = BTreeSet::new();
        let mut next = next_free(
            self.accounts
                .iter()
                .flat_map(|a| a.characters.iter())
                .map(|c| c.id().0),
        );
        for identity in self.accounts.iter_mut().flat_map(|a| a.characters.iter_mut()) {
            let id = identity.id();
            if id.0 == 0 || !taken.insert(id) {
                identity.character.character_id = CharacterId(next);
                taken.insert(identity.id());
                next = next.saturating_add(1);
                reassigned += 1;
            }
        }

        if reassigned > 0 {
            tracing::debug!(reassigned, "Assigned local ids to records without a unique id");
        }
    }

    /// Every character on every account, keyed by character name.
    ///
    /// Skill plans refer to characters by name, so this is the lookup the
    /// plan table uses. A later duplicate name shadows an earlier one.
    pub fn characters_by_name(&self) -> BTreeMap<&str, &Character> {
        self.accounts
            .iter()
            .flat_map(|a| a.characters.iter())
            .map(|c| (c.name(), &c.character))
            .collect()
    }
}

fn next_free(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0).max(0).saturating_add(1)
}
