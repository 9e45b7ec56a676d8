//! Selection-state projection.
//!
//! [`SelectionProjector`] reconciles an externally owned [`SelectValue`]
//! against an option list and a [`SelectConfig`]. It is a pure borrow of its
//! inputs: resolving labels and selected flags reads them, and every user
//! intent returns an [`Outcome`] instead of mutating anything.
//!
//! # Identifiers
//!
//! The identifier of an option is the output of the configured reducer, or
//! the raw `value_key` field when there is none (`null` when the field is
//! missing). Membership is always tested on identifiers with deep
//! `serde_json::Value` equality, so a reducer may return fresh objects on
//! every call. `null` and `""` identifiers are the empty sentinels: they never
//! match a value, and clicking such an option proposes `Empty` in single mode
//! and does nothing in multi mode.
//!
//! # Example
//!
//! ```
//! use selectkit::{OptionList, OptionRecord, SelectConfig, SelectValue, SelectionProjector};
//!
//! let options = OptionList::new(vec![
//!     OptionRecord::value_text("V1", "T1"),
//!     OptionRecord::value_text("V2", "T2"),
//! ]);
//! let config = SelectConfig::new().with_checkbox(true);
//! let projector = SelectionProjector::new(options.as_slice(), &config);
//!
//! let outcome = projector.click_option(&SelectValue::multiple(Vec::<&str>::new()), "", 1);
//! assert_eq!(outcome.next_value, Some(SelectValue::multiple(["V2"])));
//! ```

use serde_json::Value;

use selectkit_core::logging::{span_names, targets};

use crate::config::{SelectConfig, SelectionMode};
use crate::model::{OptionRecord, filter_options};
use crate::open_state::OpenState;
use crate::outcome::{Emission, Outcome};
use crate::value::SelectValue;
use crate::view::{CheckboxView, OptionView, SelectView};

/// Separator between texts of a multi-select value.
pub const VALUE_TEXT_SEPARATOR: &str = ", ";

/// Pure projection of selection state.
#[derive(Debug, Clone, Copy)]
pub struct SelectionProjector<'a> {
    options: &'a [OptionRecord],
    config: &'a SelectConfig,
}

impl<'a> SelectionProjector<'a> {
    /// Create a projector over `options` with `config`.
    pub fn new(options: &'a [OptionRecord], config: &'a SelectConfig) -> Self {
        Self { options, config }
    }

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.config.mode()
    }

    // =========================================================================
    // Value Resolution
    // =========================================================================

    /// The identifier stored and emitted for `option`.
    pub fn identifier(&self, option: &OptionRecord) -> Value {
        match &self.config.reduce_value {
            Some(reduce) => reduce(option),
            None => option
                .field(&self.config.value_key)
                .cloned()
                .unwrap_or(Value::Null),
        }
    }

    /// The display text of `option`.
    pub fn text(&self, option: &OptionRecord) -> String {
        option.text(&self.config.text_key)
    }

    /// The identifiers currently selected.
    ///
    /// In single mode at most one identifier is reported even if the owner
    /// committed a list.
    pub fn selected_values<'v>(&self, value: &'v SelectValue) -> &'v [Value] {
        let entries = value.entries();
        match self.mode() {
            SelectionMode::Multi => entries,
            SelectionMode::Single => entries.get(..1).unwrap_or(entries),
        }
    }

    /// Whether `option` is part of the committed value.
    ///
    /// An option whose identifier is `null` or `""` is never selected.
    pub fn is_option_selected(&self, option: &OptionRecord, value: &SelectValue) -> bool {
        let id = self.identifier(option);
        !SelectValue::is_empty_identifier(&id) && self.selected_values(value).contains(&id)
    }

    /// The first option whose identifier equals `id`.
    pub fn find_option(&self, id: &Value) -> Option<&'a OptionRecord> {
        if SelectValue::is_empty_identifier(id) {
            return None;
        }
        self.options
            .iter()
            .find(|option| self.identifier(option) == *id)
    }

    /// The trigger label: the selected option's text, or the placeholder.
    ///
    /// In multi mode this is the same as [`value_text`](Self::value_text).
    pub fn resolved_label(&self, value: &SelectValue) -> String {
        self.resolve_text(value)
            .unwrap_or_else(|| self.config.placeholder.clone())
    }

    /// Texts of every selected option in selection order, or the placeholder.
    pub fn value_text(&self, value: &SelectValue) -> String {
        self.resolved_label(value)
    }

    /// Text of the selection, or `None` when nothing resolves.
    fn resolve_text(&self, value: &SelectValue) -> Option<String> {
        let texts: Vec<String> = self
            .selected_values(value)
            .iter()
            .filter_map(|id| self.find_option(id))
            .map(|option| self.text(option))
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.join(VALUE_TEXT_SEPARATOR))
        }
    }

    /// Indices of the clickable options for a search query.
    ///
    /// Without search enabled the query is ignored and every option is a
    /// candidate.
    pub fn candidates(&self, query: &str) -> Vec<usize> {
        if !self.config.search {
            return (0..self.options.len()).collect();
        }
        filter_options(self.options, query, &self.config.text_key)
    }

    // =========================================================================
    // Selection Mutation
    // =========================================================================

    /// Handle a click on the candidate at `visible_index`.
    ///
    /// Disabled options, a disabled select and indices past the candidate
    /// list are ignored. In multi mode every copy of the identifier is removed
    /// when it is already present.
    pub fn click_option(&self, value: &SelectValue, query: &str, visible_index: usize) -> Outcome {
        if self.config.disabled {
            tracing::debug!(target: targets::PROJECTOR, "select disabled, ignoring option click");
            return Outcome::none();
        }

        let Some(option) = self
            .candidates(query)
            .get(visible_index)
            .and_then(|&index| self.options.get(index))
        else {
            tracing::debug!(target: targets::PROJECTOR, visible_index, "no candidate at index");
            return Outcome::none();
        };

        if option.is_disabled() {
            tracing::debug!(target: targets::PROJECTOR, visible_index, "option disabled, ignoring click");
            return Outcome::none();
        }

        let id = self.identifier(option);
        let next = match self.mode() {
            // An empty identifier collapses to `Empty`, the same as a round-trip through JSON
            SelectionMode::Single => SelectValue::from(id),
            SelectionMode::Multi => {
                if SelectValue::is_empty_identifier(&id) {
                    tracing::debug!(target: targets::PROJECTOR, visible_index, "option has no identifier, ignoring click");
                    return Outcome::none();
                }
                let mut entries = value.entries().to_vec();
                if entries.contains(&id) {
                    entries.retain(|entry| *entry != id);
                } else {
                    entries.push(id);
                }
                SelectValue::Multiple(entries)
            }
        };

        tracing::trace!(target: targets::PROJECTOR, ?next, "option clicked");
        Outcome::input(next)
    }

    // =========================================================================
    // Clear Action
    // =========================================================================

    /// Whether the clear button exists.
    pub fn clear_visible(&self) -> bool {
        self.config.show_clear_button && !self.config.disabled
    }

    /// Handle a click on the clear button.
    pub fn clear(&self) -> Outcome {
        if !self.clear_visible() {
            tracing::debug!(target: targets::PROJECTOR, "clear button absent, ignoring");
            return Outcome::none();
        }

        let empty = match self.mode() {
            SelectionMode::Single => SelectValue::Empty,
            SelectionMode::Multi => SelectValue::Multiple(Vec::new()),
        };
        Outcome::input(empty).then(Emission::Clear)
    }

    // =========================================================================
    // Open State
    // =========================================================================

    /// Handle a click on the trigger. A disabled select never opens.
    pub fn click_trigger(&self, open: OpenState) -> (OpenState, Outcome) {
        if self.config.disabled && !open.is_open() {
            tracing::debug!(target: targets::PROJECTOR, "select disabled, ignoring trigger");
            return (open, Outcome::none());
        }
        open.click_trigger()
    }

    // =========================================================================
    // View Projection
    // =========================================================================

    /// Project everything a renderer needs.
    pub fn project(&self, value: &SelectValue, open: OpenState, query: &str) -> SelectView {
        let _span = tracing::trace_span!(target: targets::PROJECTOR, span_names::PROJECT).entered();

        let multi = self.mode() == SelectionMode::Multi;
        let resolved = self.resolve_text(value);
        let placeholder_shown = resolved.is_none();
        let label = resolved.unwrap_or_else(|| self.config.placeholder.clone());

        let options = self
            .candidates(query)
            .into_iter()
            .filter_map(|index| self.options.get(index).map(|option| (index, option)))
            .map(|(index, option)| {
                let selected = self.is_option_selected(option, value);
                let disabled = option.is_disabled();
                OptionView {
                    index,
                    text: self.text(option),
                    identifier: self.identifier(option),
                    selected,
                    row_disabled: disabled,
                    label_disabled: disabled,
                    checkbox: multi.then_some(CheckboxView {
                        checked: selected,
                        disabled,
                    }),
                }
            })
            .collect();

        SelectView {
            value_text: label.clone(),
            label,
            placeholder_shown,
            has_value: !value.is_empty(),
            icon: open.icon(),
            open: open.is_open(),
            content_hidden: open.content_hidden(),
            borderless: self.config.borderless,
            size: self.config.size,
            disabled: self.config.disabled,
            show_search: self.config.search,
            show_checkboxes: multi,
            show_clear_button: self.clear_visible(),
            options,
        }
    }
}
