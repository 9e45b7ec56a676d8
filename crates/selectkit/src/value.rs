//! The externally owned committed value of a select.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The value a select's owner has committed.
///
/// `Empty` is the single-mode "nothing selected" sentinel and serializes to
/// `null`. A multi-select with nothing selected is `Multiple(vec![])` and
/// serializes to `[]`; the two are deliberately distinct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum SelectValue {
    /// No value (`null` or `""`).
    #[default]
    Empty,
    /// A single identifier.
    Single(Value),
    /// An ordered list of identifiers, in selection order.
    Multiple(Vec<Value>),
}

impl SelectValue {
    /// A single identifier, collapsing the empty sentinels to `Empty`.
    pub fn single(value: impl Into<Value>) -> Self {
        Self::from(value.into())
    }

    /// A list of identifiers.
    pub fn multiple<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Multiple(values.into_iter().map(Into::into).collect())
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Single(value) => Self::is_empty_identifier(value),
            Self::Multiple(values) => values.is_empty(),
        }
    }

    /// The selected identifiers as a slice.
    pub fn entries(&self) -> &[Value] {
        match self {
            Self::Empty => &[],
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        }
    }

    /// Whether `id` is among the selected identifiers (deep equality).
    pub fn contains(&self, id: &Value) -> bool {
        self.entries().contains(id)
    }

    /// Whether `id` is one of the empty sentinels (`null` or `""`).
    ///
    /// Such an identifier never counts as selected.
    pub fn is_empty_identifier(id: &Value) -> bool {
        match id {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        self.clone().into()
    }
}

impl From<Value> for SelectValue {
    fn from(value: Value) -> Self {
        match value {
            value if Self::is_empty_identifier(&value) => Self::Empty,
            Value::Array(values) => Self::Multiple(values),
            other => Self::Single(other),
        }
    }
}

impl From<SelectValue> for Value {
    fn from(value: SelectValue) -> Self {
        match value {
            SelectValue::Empty => Value::Null,
            SelectValue::Single(value) => value,
            SelectValue::Multiple(values) => Value::Array(values),
        }
    }
}

impl From<&str> for SelectValue {
    fn from(value: &str) -> Self {
        Self::single(value)
    }
}

impl From<Vec<Value>> for SelectValue {
    fn from(values: Vec<Value>) -> Self {
        Self::Multiple(values)
    }
}
