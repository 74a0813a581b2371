//! In-process owner of the authoritative [`AppData`].
//!
//! Components only ever see snapshots and talk back through the capability
//! traits, which [`AppStore`] implements. Failures (unknown account, missing
//! plan, clipboard trouble) are logged here and never reach the view.

use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde_json::Value;

use crate::capability::{AccountActions, ClipboardSink, SkillPlanActions};
use crate::error::{CanIFlyError, CanIFlyResult};
use crate::normalize::normalize;
use crate::types::{AccountId, AccountStatus, AppData, CharacterId, CharacterUpdate};

type Listener = Arc<dyn Fn(u64) + Send + Sync>;

#[derive(Default)]
struct StoreState {
    data: Option<AppData>,
    revision: u64,
}

/// Owner store for the desktop app
pub struct AppStore {
    state: RwLock<StoreState>,
    listeners: Mutex<Vec<Listener>>,
    clipboard: Arc<dyn ClipboardSink>,
}

impl AppStore {
    pub fn new(clipboard: Arc<dyn ClipboardSink>) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            listeners: Mutex::new(Vec::new()),
            clipboard,
        }
    }

    /// Current data, cloned. `None` until something is loaded.
    pub fn snapshot(&self) -> Option<AppData> {
        self.state.read().data.clone()
    }

    /// Bumped on every successful change
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    /// Call `listener` with the new revision after every change.
    pub fn subscribe(&self, listener: impl Fn(u64) + Send + Sync + 'static) {
        self.listeners.lock().push(Arc::new(listener));
    }

    /// Replace the data with a freshly fetched payload.
    ///
    /// A `null` payload clears the store back to "no data yet".
    pub fn load_value(&self, raw: &Value) {
        let data = normalize(raw).map(|n| n.to_app_data());
        let revision = {
            let mut state = self.state.write();
            state.data = data;
            state.revision += 1;
            state.revision
        };
        tracing::info!(revision, "Application data loaded");
        self.notify(revision);
    }

    /// Read a JSON payload from disk and load it.
    pub fn load_file(&self, path: impl AsRef<Path>) -> CanIFlyResult<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let raw: Value = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), "Read application data file");
        self.load_value(&raw);
        Ok(())
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut AppData) -> CanIFlyResult<R>) -> CanIFlyResult<R> {
        let (result, revision) = {
            let mut state = self.state.write();
            let data = state.data.as_mut().ok_or(CanIFlyError::NoData)?;
            let result = f(data)?;
            state.revision += 1;
            (result, state.revision)
        };
        self.notify(revision);
        Ok(result)
    }

    fn notify(&self, revision: u64) {
        let listeners: Vec<Listener> = self.listeners.lock().clone();
        for listener in listeners {
            listener(revision);
        }
    }

    pub fn try_toggle_account_status(&self, account: AccountId) -> CanIFlyResult<AccountStatus> {
        self.mutate(|data| {
            let acc = data
                .account_mut(account)
                .ok_or_else(|| CanIFlyError::AccountNotFound(account.to_string()))?;
            acc.status = acc.status.toggled();
            Ok(acc.status.clone())
        })
    }

    pub fn try_rename_account(&self, account: AccountId, new_name: &str) -> CanIFlyResult<()> {
        self.mutate(|data| {
            let acc = data
                .account_mut(account)
                .ok_or_else(|| CanIFlyError::AccountNotFound(account.to_string()))?;
            acc.name = new_name.to_string();
            Ok(())
        })
    }

    pub fn try_update_character(
        &self,
        account: AccountId,
        character: CharacterId,
        update: &CharacterUpdate,
    ) -> CanIFlyResult<()> {
        self.mutate(|data| {
            let acc = data
                .account_mut(account)
                .ok_or_else(|| CanIFlyError::AccountNotFound(account.to_string()))?;
            let target = acc
                .characters
                .iter_mut()
                .find(|c| c.id() == character)
                .ok_or_else(|| CanIFlyError::CharacterNotFound(character.to_string()))?;
            update.apply(target);
            Ok(())
        })
    }

    pub fn try_remove_character(&self, account: AccountId, character: CharacterId) -> CanIFlyResult<()> {
        self.mutate(|data| {
            let acc = data
                .account_mut(account)
                .ok_or_else(|| CanIFlyError::AccountNotFound(account.to_string()))?;
            let index = acc
                .characters
                .iter()
                .position(|c| c.id() == character)
                .ok_or_else(|| CanIFlyError::CharacterNotFound(character.to_string()))?;
            acc.characters.remove(index);
            Ok(())
        })
    }

    pub fn try_remove_account(&self, account: AccountId) -> CanIFlyResult<()> {
        self.mutate(|data| {
            let index = data
                .accounts
                .iter()
                .position(|a| a.id == account)
                .ok_or_else(|| CanIFlyError::AccountNotFound(account.to_string()))?;
            data.accounts.remove(index);
            Ok(())
        })
    }

    /// Put the plan's import text on the clipboard. Does not change data.
    pub fn try_copy_skill_plan(&self, plan_name: &str) -> CanIFlyResult<()> {
        let text = {
            let state = self.state.read();
            let data = state.data.as_ref().ok_or(CanIFlyError::NoData)?;
            data.skill_plans
                .get(plan_name)
                .ok_or_else(|| CanIFlyError::SkillPlanNotFound(plan_name.to_string()))?
                .to_import_text()
        };
        self.clipboard.set_text(&text)
    }

    /// Remove the plan and every character's finish date for it.
    pub fn try_delete_skill_plan(&self, plan_name: &str) -> CanIFlyResult<()> {
        self.mutate(|data| {
            data.skill_plans
                .remove(plan_name)
                .ok_or_else(|| CanIFlyError::SkillPlanNotFound(plan_name.to_string()))?;
            for identity in data.accounts.iter_mut().flat_map(|a| a.characters.iter_mut()) {
                identity.character.pending_finish_dates.remove(plan_name);
            }
            Ok(())
        })
    }
}

fn log_outcome<T: std::fmt::Debug>(operation: &str, result: CanIFlyResult<T>) {
    match result {
        Ok(value) => tracing::info!(operation, result = ?value, "Store updated"),
        Err(e) => tracing::warn!(operation, error = %e, "Store operation failed"),
    }
}

impl AccountActions for AppStore {
    fn toggle_account_status(&self, account: AccountId) {
        log_outcome("toggle_account_status", self.try_toggle_account_status(account));
    }

    fn rename_account(&self, account: AccountId, new_name: &str) {
        log_outcome("rename_account", self.try_rename_account(account, new_name));
    }

    fn update_character(&self, account: AccountId, character: CharacterId, update: CharacterUpdate) {
        log_outcome(
            "update_character",
            self.try_update_character(account, character, &update),
        );
    }

    fn remove_character(&self, account: AccountId, character: CharacterId) {
        log_outcome("remove_character", self.try_remove_character(account, character));
    }

    fn remove_account(&self, account: AccountId) {
        log_outcome("remove_account", self.try_remove_account(account));
    }
}

impl SkillPlanActions for AppStore {
    fn copy_skill_plan(&self, plan_name: &str) {
        log_outcome("copy_skill_plan", self.try_copy_skill_plan(plan_name));
    }

    fn delete_skill_plan(&self, plan_name: &str) {
        log_outcome("delete_skill_plan", self.try_delete_skill_plan(plan_name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Default)]
    struct MemoryClipboard {
        text: Mutex<Option<String>>,
    }

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&self, text: &str) -> CanIFlyResult<()> {
            *self.text.lock() = Some(text.to_string());
            Ok(())
        }
    }

    fn payload() -> Value {
        json!({
            "Accounts": [{
                "ID": 1,
                "Name": "Main",
                "Status": "Alpha",
                "Characters": [
                    {"Character": {"CharacterID": 10, "CharacterName": "C1",
                        "PendingFinishDates": {"Plan A": "2026-11-01T00:00:00Z"}}},
                    {"Character": {"CharacterID": 11, "CharacterName": "C2"}}
                ]
            }],
            "SkillPlans": {
                "Plan A": {
                    "Name": "Plan A",
                    "Skills": {"Gunnery": {"Name": "Gunnery", "Level": 4}},
                    "PendingCharacters": ["C1"]
                }
            }
        })
    }

    fn store() -> (AppStore, Arc<MemoryClipboard>) {
        let clipboard = Arc::new(MemoryClipboard::default());
        let store = AppStore::new(clipboard.clone());
        store.load_value(&payload());
        (store, clipboard)
    }

    #[test]
    fn test_empty_store() {
        let store = AppStore::new(Arc::new(MemoryClipboard::default()));
        assert!(store.snapshot().is_none());
        assert!(matches!(
            store.try_remove_account(AccountId(1)),
            Err(CanIFlyError::NoData)
        ));
    }

    #[test]
    fn test_load_null_clears() {
        let (store, _) = store();
        assert!(store.snapshot().is_some());
        store.load_value(&Value::Null);
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_toggle_and_rename() {
        let (store, _) = store();
        assert_eq!(
            store.try_toggle_account_status(AccountId(1)).unwrap(),
            AccountStatus::Omega
        );
        store.try_rename_account(AccountId(1), "Renamed").unwrap();
        let data = store.snapshot().unwrap();
        assert_eq!(data.accounts[0].name, "Renamed");
        assert_eq!(data.accounts[0].status, AccountStatus::Omega);
    }

    #[test]
    fn test_unknown_account_is_error() {
        let (store, _) = store();
        let before = store.revision();
        assert!(matches!(
            store.try_rename_account(AccountId(99), "x"),
            Err(CanIFlyError::AccountNotFound(_))
        ));
        assert_eq!(store.revision(), before);
    }

    #[test]
    fn test_character_update_and_remove() {
        let (store, _) = store();
        store
            .try_update_character(AccountId(1), CharacterId(11), &CharacterUpdate::role("Scout"))
            .unwrap();
        store.try_remove_character(AccountId(1), CharacterId(10)).unwrap();
        let data = store.snapshot().unwrap();
        assert_eq!(data.accounts[0].characters.len(), 1);
        assert_eq!(data.accounts[0].characters[0].role, "Scout");
        assert!(matches!(
            store.try_remove_character(AccountId(1), CharacterId(10)),
            Err(CanIFlyError::CharacterNotFound(_))
        ));
    }

    #[test]
    fn test_records_without_ids_act_on_exactly_one() {
        let store = AppStore::new(Arc::new(MemoryClipboard::default()));
        store.load_value(&json!({
            "Accounts": [
                {"Name": "First", "Characters": [
                    {"Character": {"CharacterName": "A1"}},
                    {"Character": {"CharacterName": "A2"}}
                ]},
                {"Name": "Second"}
            ]
        }));
        let data = store.snapshot().unwrap();
        let first = data.accounts[0].id;
        let second = data.accounts[1].id;
        assert_ne!(first, second);
        let a2 = data.accounts[0].characters[1].id();

        store.rename_account(second, "Renamed");
        store.remove_character(first, a2);

        let data = store.snapshot().unwrap();
        let names: Vec<&str> = data.accounts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Renamed"]);
        let left: Vec<&str> = data.accounts[0].characters.iter().map(|c| c.name()).collect();
        assert_eq!(left, vec!["A1"]);

        store.remove_account(first);
        let data = store.snapshot().unwrap();
        assert_eq!(data.accounts.len(), 1);
        assert_eq!(data.accounts[0].name, "Renamed");
    }

    #[test]
    fn test_copy_plan_uses_clipboard() {
        let (store, clipboard) = store();
        store.copy_skill_plan("Plan A");
        assert_eq!(clipboard.text.lock().as_deref(), Some("Gunnery 4"));

        store.copy_skill_plan("Missing");
        assert_eq!(clipboard.text.lock().as_deref(), Some("Gunnery 4"));
    }

    #[test]
    fn test_delete_plan_strips_finish_dates() {
        let (store, _) = store();
        store.delete_skill_plan("Plan A");
        let data = store.snapshot().unwrap();
        assert!(data.skill_plans.is_empty());
        assert!(data.accounts[0].characters[0]
            .character
            .pending_finish_dates
            .is_empty());
    }

    #[test]
    fn test_listeners_see_revisions() {
        let (store, _) = store();
        let seen = Arc::new(AtomicU64::new(0));
        let seen_clone = seen.clone();
        store.subscribe(move |rev| seen_clone.store(rev, Ordering::SeqCst));
        store.remove_account(AccountId(1));
        assert_eq!(seen.load(Ordering::SeqCst), store.revision());
        assert!(store.snapshot().unwrap().accounts.is_empty());
    }

    #[test]
    fn test_load_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        std::fs::write(&path, payload().to_string()).unwrap();

        let store = AppStore::new(Arc::new(MemoryClipboard::default()));
        store.load_file(&path).unwrap();
        assert_eq!(store.snapshot().unwrap().accounts.len(), 1);

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(store.load_file(&path), Err(CanIFlyError::Json(_))));
        assert!(matches!(
            store.load_file(temp.path().join("missing.json")),
            Err(CanIFlyError::Io(_))
        ));
    }
}
