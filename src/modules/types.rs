use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt::Display;

use crate::modules::error::{LogError, Result};

// -------------------- Domain Types --------------------
pub const TITLE_FIELD: &str = "title";
pub const NO_TITLE: &str = "No title found";
pub const ENRICHED_PREFIX: &str = "API Data fetched: ";

/// Ordered entries for a single write. Insertion order is write order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogBatch {
    entries: Vec<String>,
}

impl LogBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Display) {
        self.entries.push(entry.to_string());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode a batch from JSON text. Anything but a top-level array is
    /// rejected with [`LogError::InvalidInput`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| LogError::InvalidInput(format!("malformed JSON: {}", e)))?;
        Self::try_from(value)
    }

    /// Append the enrichment line for a non-empty record. An empty record
    /// leaves the batch untouched.
    pub fn enrich_with(&mut self, record: &FetchedRecord) {
        if record.is_empty() {
            return;
        }
        self.entries
            .push(format!("{}{}", ENRICHED_PREFIX, record.title_or_placeholder()));
    }
}

impl<E: Display> FromIterator<E> for LogBatch {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl TryFrom<Value> for LogBatch {
    type Error = LogError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            // Strings are taken verbatim; other values keep their JSON text
            Value::Array(items) => Ok(items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect()),
            other => Err(LogError::InvalidInput(format!(
                "expected a JSON array of entries, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JSON object returned by the remote endpoint. Empty means "no data".
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FetchedRecord {
    fields: Map<String, Value>,
}

impl FetchedRecord {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get(TITLE_FIELD).and_then(|v| v.as_str())
    }

    /// The `title` value for display. A string is used verbatim, any other
    /// value (including `null`) as its JSON text. Only a missing key falls
    /// back to [`NO_TITLE`].
    pub fn title_or_placeholder(&self) -> Cow<'_, str> {
        match self.fields.get(TITLE_FIELD) {
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
            None => Cow::Borrowed(NO_TITLE),
        }
    }
}

impl From<Map<String, Value>> for FetchedRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
