//! Derived view data handed to a renderer.
//!
//! A [`SelectView`] is recomputed from explicit inputs every time something
//! changes; nothing in it is stateful.

use serde_json::Value;

use selectkit_core::logging::{TreeFormatOptions, TreeFormatter, TreeNode};

use crate::config::Size;
use crate::open_state::Icon;

/// State of the checkbox drawn next to an option in multi-select mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxView {
    /// Whether the option is part of the committed value.
    pub checked: bool,
    /// Whether the checkbox ignores clicks.
    pub disabled: bool,
}

/// One row of the dropdown list.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    /// Index of the option in the unfiltered option list.
    pub index: usize,
    /// Display text.
    pub text: String,
    /// The identifier that clicking this row would store (reduced or raw).
    pub identifier: Value,
    /// Whether the row is part of the committed value.
    pub selected: bool,
    /// Whether the row is disabled.
    pub row_disabled: bool,
    /// Whether the row's text label is disabled.
    pub label_disabled: bool,
    /// Checkbox state, present only in multi-select mode.
    pub checkbox: Option<CheckboxView>,
}

/// Everything a renderer needs to draw a select.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectView {
    /// Text shown in the trigger.
    pub label: String,
    /// Text of the selected values (joined in multi-select mode).
    pub value_text: String,
    /// Whether `label` is the placeholder.
    pub placeholder_shown: bool,
    /// Whether the committed value is non-empty.
    pub has_value: bool,
    /// Trigger chevron.
    pub icon: Icon,
    /// Whether the dropdown is open.
    pub open: bool,
    /// Whether the dropdown content is hidden.
    pub content_hidden: bool,
    /// Whether the trigger is drawn without a border.
    pub borderless: bool,
    /// Trigger size.
    pub size: Size,
    /// Whether the whole select is disabled.
    pub disabled: bool,
    /// Whether to render the search input.
    pub show_search: bool,
    /// Whether rows carry checkboxes.
    pub show_checkboxes: bool,
    /// Whether the clear button exists at all.
    pub show_clear_button: bool,
    /// The candidate rows, in display order.
    pub options: Vec<OptionView>,
}

impl SelectView {
    /// Find a row by its display text.
    pub fn option_by_text(&self, text: &str) -> Option<&OptionView> {
        self.options.iter().find(|option| option.text == text)
    }

    /// Rows that are part of the committed value.
    pub fn selected_options(&self) -> impl Iterator<Item = &OptionView> {
        self.options.iter().filter(|option| option.selected)
    }

    /// Build a debug tree of this view.
    pub fn debug_tree(&self) -> TreeNode {
        let mut root = TreeNode::new(self.label.clone())
            .with_detail("icon", self.icon.token())
            .with_detail("open", self.open)
            .with_detail("size", self.size)
            .with_detail("borderless", self.borderless);
        if self.disabled {
            root = root.with_detail("disabled", true);
        }
        if self.show_clear_button {
            root = root.with_detail("clear", true);
        }

        for option in &self.options {
            let mut node = TreeNode::new(option.text.clone())
                .with_detail("value", &option.identifier)
                .with_detail("selected", option.selected);
            if option.row_disabled {
                node = node.with_detail("disabled", true);
            }
            root.push_child(node);
        }
        root
    }

    /// Render the debug tree as text.
    pub fn format_tree(&self, options: TreeFormatOptions) -> String {
        TreeFormatter::with_options(options).format(&self.debug_tree())
    }
}
