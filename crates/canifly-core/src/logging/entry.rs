//! One JSONL log line, and the visitor that collects an event's fields.

use std::fmt::Debug;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::Level;

/// A log line as written to disk. Borrows from the event it describes.
#[derive(Debug, Serialize)]
pub struct JsonLogEntry<'a> {
    /// RFC 3339, UTC, milliseconds
    pub ts: String,
    pub level: &'a str,
    /// Session the line was written under (e.g. "desktop")
    pub session: &'a str,
    /// Module path of the event (e.g. "canifly_core::store")
    pub target: &'a str,
    pub msg: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
    /// Enclosing spans, outermost first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl<'a> JsonLogEntry<'a> {
    pub fn new(level: &'a str, session: &'a str, target: &'a str, msg: impl Into<String>) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level,
            session,
            target,
            msg: msg.into(),
            fields: Map::new(),
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_span(mut self, span: Option<String>) -> Self {
        self.span = span.filter(|s| !s.is_empty());
        self
    }

    /// Single JSON line, no trailing newline.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Lower-case level name as stored in the `level` column
pub fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    }
}

/// An event's `message` plus every other field as JSON
#[derive(Debug, Default)]
pub struct EventFields {
    pub message: String,
    pub fields: Map<String, Value>,
}

impl EventFields {
    fn put(&mut self, field: &Field, value: Value) {
        match (field.name(), value) {
            ("message", Value::String(text)) => self.message = text,
            ("message", other) => self.message = other.to_string(),
            (name, value) => {
                self.fields.insert(name.to_string(), value);
            }
        }
    }
}

impl Visit for EventFields {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.put(field, Value::String(format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, Value::from(value));
    }

    // Non-finite floats become null
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, Value::from(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, Value::String(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_entry_omits_empty_columns() {
        let entry = JsonLogEntry::new("error", "desktop", "canifly::boundary", "Render failure");
        let line: Value = serde_json::from_str(&entry.to_json_line().unwrap()).unwrap();

        assert_eq!(line["level"], "error");
        assert_eq!(line["session"], "desktop");
        assert_eq!(line["msg"], "Render failure");
        assert!(line.get("fields").is_none());
        assert!(line.get("span").is_none());
    }

    #[test]
    fn test_entry_with_fields_and_span() {
        let mut fields = Map::new();
        fields.insert("operation".into(), json!("remove_account"));
        let entry = JsonLogEntry::new("info", "desktop", "canifly_core::store", "Store updated")
            .with_fields(fields)
            .with_span(Some("app > store".into()));
        let line: Value = serde_json::from_str(&entry.to_json_line().unwrap()).unwrap();

        assert_eq!(line["fields"]["operation"], "remove_account");
        assert_eq!(line["span"], "app > store");
    }

    #[test]
    fn test_empty_span_is_dropped() {
        let entry = JsonLogEntry::new("info", "desktop", "t", "m").with_span(Some(String::new()));
        assert!(entry.span.is_none());
    }

    #[test]
    fn test_level_names() {
        assert_eq!(level_name(&Level::WARN), "warn");
        assert_eq!(level_name(&Level::TRACE), "trace");
    }
}
