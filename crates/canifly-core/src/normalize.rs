//! Payload normalization.
//!
//! The backend payload is loosely shaped: containers may be missing, `null`,
//! or the wrong kind. [`normalize`] is the single place that guarantees every
//! container field the UI iterates over has a safe shape. It never fails.
//!
//! ## Rules
//!
//! - `null` input yields `None` ("no data yet").
//! - `Accounts`, `Roles`, `SubDirs`, `associations` pass through when they
//!   are arrays and become `[]` otherwise.
//! - `SkillPlans`, `UserSelections` pass through when truthy and become `{}`
//!   otherwise. Truthiness is deliberately permissive: a non-empty string
//!   passes. [`NormalizedAppData::to_app_data`] is where a structurally wrong
//!   value is finally dropped.
//! - Every other field is kept as-is. Elements are never inspected.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::types::{AppData, SkillPlan};

/// Fields that must be arrays after normalization
pub const SEQUENCE_FIELDS: [&str; 4] = ["Accounts", "Roles", "SubDirs", "associations"];

/// Fields that must be mappings after normalization
pub const MAPPING_FIELDS: [&str; 2] = ["SkillPlans", "UserSelections"];

/// A payload whose container fields are guaranteed present.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAppData {
    fields: Map<String, Value>,
}

/// Coerce a raw payload into a render-safe shape.
///
/// Non-object input other than `null` is treated as an object with no
/// fields, so the result carries only the guaranteed containers.
pub fn normalize(data: &Value) -> Option<NormalizedAppData> {
    let mut fields = match data {
        Value::Null => return None,
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    for key in SEQUENCE_FIELDS {
        if !fields.get(key).is_some_and(Value::is_array) {
            fields.insert(key.to_string(), Value::Array(Vec::new()));
        }
    }

    for key in MAPPING_FIELDS {
        if !fields.get(key).is_some_and(is_truthy) {
            fields.insert(key.to_string(), Value::Object(Map::new()));
        }
    }

    Some(NormalizedAppData { fields })
}

/// JavaScript-style truthiness over JSON values.
///
/// `null`, `false`, numeric zero and the empty string are falsy. Arrays and
/// objects are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl NormalizedAppData {
    /// Look up any field, normalized or passed through.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn sequence(&self, key: &str) -> &[Value] {
        self.fields
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn accounts(&self) -> &[Value] {
        self.sequence("Accounts")
    }

    pub fn roles(&self) -> &[Value] {
        self.sequence("Roles")
    }

    pub fn sub_dirs(&self) -> &[Value] {
        self.sequence("SubDirs")
    }

    pub fn associations(&self) -> &[Value] {
        self.sequence("associations")
    }

    /// Raw `SkillPlans` value. Always present, but only guaranteed truthy.
    pub fn skill_plans(&self) -> &Value {
        self.mapping("SkillPlans")
    }

    /// Raw `UserSelections` value. Always present, but only guaranteed truthy.
    pub fn user_selections(&self) -> &Value {
        self.mapping("UserSelections")
    }

    fn mapping(&self, key: &str) -> &Value {
        static EMPTY: Value = Value::Null;
        self.fields.get(key).unwrap_or(&EMPTY)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Project onto the typed model.
    ///
    /// Elements that do not decode are skipped and logged. A truthy but
    /// non-object `SkillPlans` or `UserSelections` projects to an empty map.
    /// A plan stored under a key that differs from its `Name` takes the key
    /// as its name, since the key is the row identity.
    pub fn to_app_data(&self) -> AppData {
        let skill_plans = match self.skill_plans() {
            Value::Object(plans) => plans
                .iter()
                .filter_map(|(key, raw)| {
                    let mut plan: SkillPlan = decode_element("SkillPlans", raw)?;
                    if plan.name != *key {
                        if !plan.name.is_empty() {
                            tracing::warn!(key = %key, name = %plan.name, "Skill plan name differs from its key");
                        }
                        plan.name = key.clone();
                    }
                    Some((key.clone(), plan))
                })
                .collect(),
            other => {
                tracing::warn!(kind = value_kind(other), "SkillPlans is not a mapping, ignoring");
                BTreeMap::new()
            }
        };

        let user_selections = match self.user_selections() {
            Value::Object(map) => map.clone(),
            other => {
                tracing::warn!(kind = value_kind(other), "UserSelections is not a mapping, ignoring");
                Map::new()
            }
        };

        let mut data = AppData {
            accounts: decode_all("Accounts", self.accounts()),
            roles: decode_all("Roles", self.roles()),
            skill_plans,
            sub_dirs: decode_all("SubDirs", self.sub_dirs()),
            associations: decode_all("associations", self.associations()),
            user_selections,
        };
        data.assign_identities();
        data
    }
}

fn decode_all<T: DeserializeOwned>(field: &str, values: &[Value]) -> Vec<T> {
    values
        .iter()
        .filter_map(|raw| decode_element(field, raw))
        .collect()
}

fn decode_element<T: DeserializeOwned>(field: &str, raw: &Value) -> Option<T> {
    match T::deserialize(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(field, error = %e, "Skipping malformed element");
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_none() {
        assert!(normalize(&Value::Null).is_none());
    }

    #[test]
    fn test_missing_fields_get_empty_containers() {
        let result = normalize(&json!({})).unwrap();
        for key in SEQUENCE_FIELDS {
            assert_eq!(result.get(key), Some(&json!([])), "{key}");
        }
        for key in MAPPING_FIELDS {
            assert_eq!(result.get(key), Some(&json!({})), "{key}");
        }
    }

    #[test]
    fn test_single_account_scenario() {
        let result = normalize(&json!({"Accounts": [{"Name": "A"}]})).unwrap();
        assert_eq!(result.accounts().len(), 1);
        assert_eq!(result.skill_plans(), &json!({}));
        assert_eq!(result.roles(), &[] as &[Value]);
    }

    #[test]
    fn test_wrong_kind_sequences_replaced() {
        let result = normalize(&json!({
            "Accounts": {"Name": "A"},
            "Roles": "admin",
            "SubDirs": 3,
            "associations": null
        }))
        .unwrap();
        assert!(result.accounts().is_empty());
        assert!(result.roles().is_empty());
        assert!(result.sub_dirs().is_empty());
        assert!(result.associations().is_empty());
    }

    #[test]
    fn test_falsy_mappings_replaced() {
        for falsy in [json!(null), json!(false), json!(0), json!(""), json!(0.0)] {
            let result = normalize(&json!({"SkillPlans": falsy, "UserSelections": falsy})).unwrap();
            assert_eq!(result.skill_plans(), &json!({}));
            assert_eq!(result.user_selections(), &json!({}));
        }
    }

    #[test]
    fn test_truthy_non_mapping_passes_through() {
        let result = normalize(&json!({"SkillPlans": "oops", "UserSelections": [1]})).unwrap();
        assert_eq!(result.skill_plans(), &json!("oops"));
        assert_eq!(result.user_selections(), &json!([1]));
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let result = normalize(&json!({"LoggedIn": true, "EveDataDir": "/tmp"})).unwrap();
        assert_eq!(result.get("LoggedIn"), Some(&json!(true)));
        assert_eq!(result.get("EveDataDir"), Some(&json!("/tmp")));
    }

    #[test]
    fn test_input_not_mutated() {
        let input = json!({"Roles": null});
        let _ = normalize(&input);
        assert_eq!(input, json!({"Roles": null}));
    }

    #[test]
    fn test_non_object_input_gets_containers_only() {
        let result = normalize(&json!([1, 2, 3])).unwrap();
        assert_eq!(result.as_map().len(), SEQUENCE_FIELDS.len() + MAPPING_FIELDS.len());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_projection_skips_bad_elements() {
        let normalized = normalize(&json!({
            "Accounts": [{"Name": "Good", "ID": 1}, "not an account", {"Name": "Also", "ID": 2}],
            "Roles": ["Miner", 5, "Scout"],
            "SkillPlans": "oops"
        }))
        .unwrap();
        let data = normalized.to_app_data();
        assert_eq!(data.accounts.len(), 2);
        assert_eq!(data.roles, vec!["Miner".to_string(), "Scout".to_string()]);
        assert!(data.skill_plans.is_empty());
        assert!(data.user_selections.is_empty());
    }

    #[test]
    fn test_projection_uses_key_as_plan_name() {
        let normalized = normalize(&json!({
            "SkillPlans": {
                "Plan A": {"QualifiedCharacters": ["C1"]},
                "Plan B": {"Name": "Renamed"}
            }
        }))
        .unwrap();
        let data = normalized.to_app_data();
        assert_eq!(data.skill_plans["Plan A"].name, "Plan A");
        assert_eq!(data.skill_plans["Plan B"].name, "Plan B");
        assert_eq!(data.skill_plans["Plan A"].qualified_characters, vec!["C1"]);
    }

    #[test]
    fn test_projection_keeps_records_with_null_scalars() {
        let normalized = normalize(&json!({
            "Accounts": [{
                "ID": 1,
                "Name": "Main",
                "Characters": [{"Character": {"CharacterName": "C", "TotalSP": null}, "MCT": null}]
            }]
        }))
        .unwrap();
        let data = normalized.to_app_data();
        assert_eq!(data.accounts.len(), 1);
        let identity = &data.accounts[0].characters[0];
        assert_eq!(identity.name(), "C");
        assert_eq!(identity.character.total_sp, 0);
        assert!(!identity.mct);
    }

    #[test]
    fn test_projection_assigns_distinct_ids() {
        let normalized = normalize(&json!({
            "Accounts": [
                {"Name": "TestAccount", "Status": "Omega", "Characters": [
                    {"Character": {"CharacterName": "A1"}},
                    {"Character": {"CharacterName": "A2"}}
                ]},
                {"Name": "Other"}
            ]
        }))
        .unwrap();
        let data = normalized.to_app_data();
        assert_ne!(data.accounts[0].id, data.accounts[1].id);
        let chars = &data.accounts[0].characters;
        assert_ne!(chars[0].id(), chars[1].id());
    }

    #[test]
    fn test_mapping_accessors_without_key() {
        let normalized = NormalizedAppData { fields: Map::new() };
        assert_eq!(normalized.skill_plans(), &Value::Null);
        assert_eq!(normalized.user_selections(), &Value::Null);
        assert!(normalized.to_app_data().skill_plans.is_empty());
    }
}
