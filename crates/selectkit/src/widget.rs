//! Stateful select widget.
//!
//! [`Select`] wraps a [`SelectionProjector`] with the little state a select
//! instance owns: whether it is open and what is typed in its search box.
//! It also keeps a mirror of the committed value, which only the owner
//! writes (through [`Select::set_value`]); clicks never write it, they emit
//! [`Select::input`] and let the owner decide.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use selectkit::{OptionRecord, Select, SelectValue};
//!
//! let select = Arc::new(
//!     Select::new(vec![
//!         OptionRecord::value_text("Value1", "Text1"),
//!         OptionRecord::value_text("Value2", "Text2"),
//!     ])
//!     .with_checkbox(true),
//! );
//!
//! // Commit every proposed value back into the select
//! select.bind_model();
//!
//! select.click_option(0);
//! select.click_option(1);
//! assert_eq!(select.value(), SelectValue::multiple(["Value1", "Value2"]));
//! assert_eq!(select.view().value_text, "Text1, Text2");
//! ```
//!
//! # Signals
//!
//! - `input(SelectValue)`: A new committed value is proposed
//! - `cleared()`: The clear button was activated (after `input`)
//! - `blurred()`: The open dropdown was dismissed
//! - `open_changed(bool)`: The dropdown opened or closed

use std::sync::{Arc, Weak};

use serde_json::Value;

use selectkit_core::logging::{PerfSpan, targets};
use selectkit_core::{ConnectionId, Property, ReadOnlyProperty, Signal};

use crate::config::{SelectConfig, SelectProps, Size};
use crate::model::{OptionList, OptionRecord};
use crate::open_state::OpenState;
use crate::outcome::{Emission, Outcome};
use crate::projector::SelectionProjector;
use crate::value::SelectValue;
use crate::view::SelectView;

/// A discrete user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Click on the trigger.
    ToggleOpen,
    /// Click on the candidate at a visible index.
    SelectOption(usize),
    /// Click on the clear button.
    Clear,
    /// Focus left the select.
    Close,
    /// The search text changed.
    Search(String),
}

/// A select dropdown.
pub struct Select {
    /// Configuration.
    config: SelectConfig,
    /// The options, in display order.
    options: OptionList,

    /// Mirror of the owner's committed value.
    value: Property<SelectValue>,
    /// Whether the dropdown is open.
    open: Property<OpenState>,
    /// Current search text.
    search_text: Property<String>,

    // Signals
    /// Signal emitted when a new value is proposed.
    pub input: Signal<SelectValue>,
    /// Signal emitted when the clear button is activated.
    pub cleared: Signal<()>,
    /// Signal emitted when the open dropdown is dismissed.
    pub blurred: Signal<()>,
    /// Signal emitted when the dropdown opens or closes.
    pub open_changed: Signal<bool>,
}

impl Select {
    /// Create a single-select over `options` with default settings.
    pub fn new(options: impl Into<OptionList>) -> Self {
        Self {
            config: SelectConfig::default(),
            options: options.into(),
            value: Property::new(SelectValue::Empty),
            open: Property::new(OpenState::Closed),
            search_text: Property::new(String::new()),
            input: Signal::new(),
            cleared: Signal::new(),
            blurred: Signal::new(),
            open_changed: Signal::new(),
        }
    }

    /// Create a select from deserialized props.
    pub fn from_props(props: SelectProps) -> Self {
        let (config, options, value) = props.into_parts();
        Self::new(options).with_config(config).with_value(value)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the configuration.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: SelectConfig) {
        self.config = config;
    }

    /// Set configuration using builder pattern.
    pub fn with_config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the value and text field names using builder pattern.
    pub fn with_keys(mut self, value_key: impl Into<String>, text_key: impl Into<String>) -> Self {
        self.config.value_key = value_key.into();
        self.config.text_key = text_key.into();
        self
    }

    /// Set the reducer using builder pattern.
    pub fn with_reducer<F>(mut self, reducer: F) -> Self
    where
        F: Fn(&OptionRecord) -> Value + Send + Sync + 'static,
    {
        self.config = self.config.with_reducer(reducer);
        self
    }

    /// Set multi-select mode using builder pattern.
    pub fn with_checkbox(mut self, checkbox: bool) -> Self {
        self.config.checkbox = checkbox;
        self
    }

    /// Enable search filtering using builder pattern.
    pub fn with_search(mut self, search: bool) -> Self {
        self.config.search = search;
        self
    }

    /// Set borderless presentation using builder pattern.
    pub fn with_borderless(mut self, borderless: bool) -> Self {
        self.config.borderless = borderless;
        self
    }

    /// Set the size using builder pattern.
    pub fn with_size(mut self, size: Size) -> Self {
        self.config.size = size;
        self
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    /// Offer a clear button using builder pattern.
    pub fn with_clear_button(mut self, show: bool) -> Self {
        self.config.show_clear_button = show;
        self
    }

    /// Disable the select using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    // =========================================================================
    // Options and Value
    // =========================================================================

    /// Get the options.
    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: impl Into<OptionList>) {
        self.options = options.into();
    }

    /// Get the committed value mirror.
    pub fn value(&self) -> SelectValue {
        self.value.get()
    }

    /// Commit a value. Returns `true` if it differs from the current one.
    ///
    /// This is the owner's side of the contract; the select itself never
    /// calls it.
    pub fn set_value(&self, value: impl Into<SelectValue>) -> bool {
        self.value.set(value.into())
    }

    /// Set the committed value using builder pattern.
    pub fn with_value(self, value: impl Into<SelectValue>) -> Self {
        self.value.set_silent(value.into());
        self
    }

    /// Commit every proposed value back into this select.
    ///
    /// This is the usual owner for a select that holds its own model. The
    /// connection holds a weak reference, so it never keeps the select alive.
    pub fn bind_model(self: &Arc<Self>) -> ConnectionId {
        let weak: Weak<Self> = Arc::downgrade(self);
        self.input.connect(move |value| {
            if let Some(select) = weak.upgrade() {
                select.set_value(value.clone());
            }
        })
    }

    /// Stop committing proposed values for a connection made by
    /// [`bind_model`](Self::bind_model). Returns `false` for an unknown id.
    pub fn unbind_model(&self, id: ConnectionId) -> bool {
        self.input.disconnect(id)
    }

    // =========================================================================
    // Open State and Search
    // =========================================================================

    /// Get the open state.
    pub fn open_state(&self) -> ReadOnlyProperty<'_, OpenState> {
        self.open.read_only()
    }

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.open.get().is_open()
    }

    /// Get the search text.
    pub fn search_text(&self) -> String {
        self.search_text.get()
    }

    /// Set the search text.
    pub fn set_search_text(&self, text: impl Into<String>) {
        self.search_text.set(text.into());
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// A projector over the current options and configuration.
    pub fn projector(&self) -> SelectionProjector<'_> {
        SelectionProjector::new(self.options.as_slice(), &self.config)
    }

    /// Handle a click on the trigger.
    pub fn click_trigger(&self) {
        let (next, outcome) = self.projector().click_trigger(self.open.get());
        self.transition(next);
        self.apply(outcome);
    }

    /// Close the dropdown, e.g. when focus leaves the select.
    pub fn close(&self) {
        let (next, outcome) = self.open.get().close();
        self.transition(next);
        self.apply(outcome);
    }

    /// Handle a click on the candidate at `visible_index`.
    pub fn click_option(&self, visible_index: usize) {
        let outcome = self.projector().click_option(
            &self.value.get(),
            &self.search_text.get(),
            visible_index,
        );
        self.apply(outcome);
    }

    /// Handle a click on the clear button.
    pub fn click_clear(&self) {
        let outcome = self.projector().clear();
        self.apply(outcome);
    }

    /// Dispatch an intent.
    pub fn handle(&self, intent: Intent) {
        tracing::trace!(target: targets::WIDGET, ?intent, "handling intent");
        match intent {
            Intent::ToggleOpen => self.click_trigger(),
            Intent::SelectOption(index) => self.click_option(index),
            Intent::Clear => self.click_clear(),
            Intent::Close => self.close(),
            Intent::Search(text) => self.set_search_text(text),
        }
    }

    /// Project the current state.
    pub fn view(&self) -> SelectView {
        let _perf = PerfSpan::new("select.view");
        self.projector()
            .project(&self.value.get(), self.open.get(), &self.search_text.get())
    }

    fn transition(&self, next: OpenState) {
        if self.open.set(next) {
            tracing::trace!(target: targets::WIDGET, ?next, "open state changed");
            if !next.is_open() {
                // Reopening starts with an unfiltered list
                self.search_text.set(String::new());
            }
            self.open_changed.emit(next.is_open());
        }
    }

    /// Emit an outcome's notifications in order.
    fn apply(&self, outcome: Outcome) {
        for emission in outcome.emissions {
            match emission {
                Emission::Input(value) => self.input.emit(value),
                Emission::Clear => self.cleared.emit(()),
                Emission::Blur => self.blurred.emit(()),
            }
        }
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new(OptionList::default())
    }
}

static_assertions::assert_impl_all!(Select: Send, Sync);
