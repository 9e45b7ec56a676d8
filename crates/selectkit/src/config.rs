//! Select configuration.
//!
//! [`SelectConfig`] is the code-facing configuration, built with the builder
//! pattern. [`SelectProps`] is its serializable counterpart, mirroring the
//! props a host passes to the component (everything except the reducer,
//! which is code).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{OptionList, OptionRecord};
use crate::value::SelectValue;

/// Default field holding an option's value.
pub const DEFAULT_VALUE_KEY: &str = "value";
/// Default field holding an option's display text.
pub const DEFAULT_TEXT_KEY: &str = "text";

/// Maps an option to the identifier that is stored and emitted for it.
pub type Reducer = Arc<dyn Fn(&OptionRecord) -> Value + Send + Sync>;

/// Single- or multi-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// One value at a time.
    #[default]
    Single,
    /// A checkbox list of values.
    Multi,
}

/// Size of the select's trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Full-height trigger.
    #[default]
    Big,
    /// Compact trigger.
    Small,
}

impl Size {
    /// The presentation token for this size.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Small => "small",
        }
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "big" => Ok(Self::Big),
            "small" => Ok(Self::Small),
            other => Err(Error::InvalidSize(other.to_string())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration of a select.
#[derive(Clone)]
pub struct SelectConfig {
    /// Field holding an option's value.
    pub value_key: String,
    /// Field holding an option's display text.
    pub text_key: String,
    /// Optional identifier-producing function.
    pub reduce_value: Option<Reducer>,
    /// Multi-select with checkboxes.
    pub checkbox: bool,
    /// Show a search input and filter options by text.
    pub search: bool,
    /// Borderless presentation.
    pub borderless: bool,
    /// Trigger size.
    pub size: Size,
    /// Label shown when nothing is selected.
    pub placeholder: String,
    /// Offer a clear button.
    pub show_clear_button: bool,
    /// The whole select is disabled.
    pub disabled: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            value_key: DEFAULT_VALUE_KEY.to_string(),
            text_key: DEFAULT_TEXT_KEY.to_string(),
            reduce_value: None,
            checkbox: false,
            search: false,
            borderless: false,
            size: Size::default(),
            placeholder: String::new(),
            show_clear_button: false,
            disabled: false,
        }
    }
}

impl SelectConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selection mode implied by the checkbox flag.
    pub fn mode(&self) -> SelectionMode {
        if self.checkbox {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }

    /// Set the value field name using builder pattern.
    pub fn with_value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = key.into();
        self
    }

    /// Set the text field name using builder pattern.
    pub fn with_text_key(mut self, key: impl Into<String>) -> Self {
        self.text_key = key.into();
        self
    }

    /// Set the reducer using builder pattern.
    pub fn with_reducer<F>(mut self, reducer: F) -> Self
    where
        F: Fn(&OptionRecord) -> Value + Send + Sync + 'static,
    {
        self.reduce_value = Some(Arc::new(reducer));
        self
    }

    /// Set multi-select mode using builder pattern.
    pub fn with_checkbox(mut self, checkbox: bool) -> Self {
        self.checkbox = checkbox;
        self
    }

    /// Enable search filtering using builder pattern.
    pub fn with_search(mut self, search: bool) -> Self {
        self.search = search;
        self
    }

    /// Set borderless presentation using builder pattern.
    pub fn with_borderless(mut self, borderless: bool) -> Self {
        self.borderless = borderless;
        self
    }

    /// Set the size using builder pattern.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Offer a clear button using builder pattern.
    pub fn with_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    /// Disable the select using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl fmt::Debug for SelectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectConfig")
            .field("value_key", &self.value_key)
            .field("text_key", &self.text_key)
            .field("reduce_value", &self.reduce_value.as_ref().map(|_| "<fn>"))
            .field("checkbox", &self.checkbox)
            .field("search", &self.search)
            .field("borderless", &self.borderless)
            .field("size", &self.size)
            .field("placeholder", &self.placeholder)
            .field("show_clear_button", &self.show_clear_button)
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Serializable select props.
///
/// Field names follow the host-side camelCase convention (`valueKey`,
/// `isCheckbox`, `showClearButton`, ...). Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectProps {
    pub options: OptionList,
    pub value: SelectValue,
    pub value_key: Option<String>,
    pub text_key: Option<String>,
    pub is_checkbox: bool,
    pub is_search: bool,
    pub is_borderless: bool,
    pub size: Size,
    pub placeholder: String,
    pub show_clear_button: bool,
    pub disable: bool,
}

impl SelectProps {
    /// Parse props from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Split into configuration, options and the initial committed value.
    pub fn into_parts(self) -> (SelectConfig, OptionList, SelectValue) {
        let config = SelectConfig {
            value_key: self
                .value_key
                .unwrap_or_else(|| DEFAULT_VALUE_KEY.to_string()),
            text_key: self.text_key.unwrap_or_else(|| DEFAULT_TEXT_KEY.to_string()),
            reduce_value: None,
            checkbox: self.is_checkbox,
            search: self.is_search,
            borderless: self.is_borderless,
            size: self.size,
            placeholder: self.placeholder,
            show_clear_button: self.show_clear_button,
            disabled: self.disable,
        };
        (config, self.options, self.value)
    }
}
