//! Option records and the ordered option list.
//!
//! An option is an arbitrary JSON object. Which field holds the value and
//! which holds the display text is decided by the select's configuration,
//! so a record never interprets its own fields beyond the `disabled` flag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Field that marks an option as not selectable.
pub const DISABLED_KEY: &str = "disabled";

/// A single selectable record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionRecord {
    fields: Map<String, Value>,
}

impl OptionRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from an existing JSON object.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Create a record with the conventional `value` and `text` fields.
    pub fn value_text(value: impl Into<Value>, text: impl Into<Value>) -> Self {
        Self::new().with("value", value).with("text", text)
    }

    /// Set a field using builder pattern.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Mark the record as disabled using builder pattern.
    pub fn with_disabled(self, disabled: bool) -> Self {
        self.with(DISABLED_KEY, disabled)
    }

    /// Get a raw field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a field rendered as display text.
    ///
    /// Strings are returned as-is, missing and `null` fields as an empty
    /// string, anything else in its JSON form.
    pub fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Whether the record carries `disabled: true`.
    pub fn is_disabled(&self) -> bool {
        matches!(self.fields.get(DISABLED_KEY), Some(Value::Bool(true)))
    }

    /// The underlying JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for OptionRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_map(fields)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for OptionRecord {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs
            .into_iter()
            .fold(Self::new(), |record, (key, value)| record.with(key, value))
    }
}

/// The ordered list of options shown by a select.
///
/// Order is display order and is never changed by filtering or selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList {
    items: Vec<OptionRecord>,
}

impl OptionList {
    /// Create a list from records.
    pub fn new(items: Vec<OptionRecord>) -> Self {
        Self { items }
    }

    /// Parse a JSON array of objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Convert an already parsed JSON array of objects.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Array(entries) = value else {
            return Err(Error::options_not_array(&value));
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(fields) => Ok(OptionRecord::from_map(fields)),
                other => Err(Error::invalid_option(index, &other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no options.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the option at an index.
    pub fn get(&self, index: usize) -> Option<&OptionRecord> {
        self.items.get(index)
    }

    /// Iterate over the options in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionRecord> {
        self.items.iter()
    }

    /// The options as a slice.
    pub fn as_slice(&self) -> &[OptionRecord] {
        &self.items
    }

    /// Append an option.
    pub fn push(&mut self, item: OptionRecord) {
        self.items.push(item);
    }
}

/// Indices of the options whose `text_key` text contains `query`.
///
/// Matching is a case-insensitive substring test; an empty query keeps
/// every option.
pub fn filter_options(options: &[OptionRecord], query: &str, text_key: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }

    let needle = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.text(text_key).to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

impl From<Vec<OptionRecord>> for OptionList {
    fn from(items: Vec<OptionRecord>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<OptionRecord> for OptionList {
    fn from_iter<I: IntoIterator<Item = OptionRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a OptionRecord;
    type IntoIter = std::slice::Iter<'a, OptionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
