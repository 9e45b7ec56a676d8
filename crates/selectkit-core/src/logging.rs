//! Logging and debugging facilities for selectkit.
//!
//! This module provides:
//! - Target names for filtering the `tracing` output of each subsystem
//! - A small tree formatter for human-readable state dumps
//! - Performance spans for profiling
//!
//! # Tracing Integration
//!
//! selectkit uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("selectkit=debug")
//!         .init();
//! }
//! ```
//!
//! # Tree Output
//!
//! ```
//! use selectkit_core::logging::{TreeFormatter, TreeNode};
//!
//! let tree = TreeNode::new("select")
//!     .with_child(TreeNode::new("Text1"))
//!     .with_child(TreeNode::new("Text2"));
//! let output = TreeFormatter::new().format(&tree);
//! assert!(output.contains("Text2"));
//! ```

use std::fmt::{self, Write as FmtWrite};

/// Span names used throughout selectkit for tracing.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "selectkit::signal";
    /// View projection span.
    pub const PROJECT: &str = "selectkit::project";
    /// Performance measurement span.
    pub const PERF: &str = "selectkit::perf";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "selectkit_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "selectkit_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "selectkit_core::property";
    /// Selection projector target.
    pub const PROJECTOR: &str = "selectkit::projector";
    /// Stateful widget target.
    pub const WIDGET: &str = "selectkit::widget";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to print node details after the label.
    pub show_details: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_details: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_details: false,
            ..Default::default()
        }
    }

    /// Set the tree style using builder pattern.
    pub fn with_style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }
}

/// A labelled node of a debug tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// The text printed for this node.
    pub label: String,
    /// Extra `key=value` annotations printed after the label.
    pub details: Vec<(String, String)>,
    /// Child nodes, printed in order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            details: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a `key=value` annotation.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.details.push((key.into(), value.to_string()));
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child node in place.
    pub fn push_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }
}

/// Renders [`TreeNode`]s as indented text.
#[derive(Debug, Clone, Default)]
pub struct TreeFormatter {
    options: TreeFormatOptions,
}

impl TreeFormatter {
    /// Create a formatter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format a whole tree.
    pub fn format(&self, root: &TreeNode) -> String {
        let mut output = String::new();
        self.format_into(root, 0, true, &mut output);
        output
    }

    fn format_into(&self, node: &TreeNode, depth: usize, is_last: bool, output: &mut String) {
        if let Some(max) = self.options.max_depth
            && depth > max
        {
            return;
        }

        output.push_str(&self.build_prefix(depth, is_last));
        output.push_str(if node.label.is_empty() {
            "(empty)"
        } else {
            &node.label
        });

        if self.options.show_details {
            for (key, value) in &node.details {
                let _ = write!(output, " {key}={value}");
            }
        }
        output.push('\n');

        let child_count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            self.format_into(child, depth + 1, i + 1 == child_count, output);
        }
    }

    /// Build the prefix string for a tree node.
    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, corner, last) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => (
                "\u{2502}",
                "\u{251c}\u{2500}\u{2500}",
                "\u{2514}\u{2500}\u{2500}",
            ),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            for _ in 0..self.options.indent_size {
                prefix.push(' ');
            }
        }
        prefix.push_str(if is_last { last } else { corner });
        prefix.push(' ');
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: span_names::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::new("root")
            .with_detail("open", false)
            .with_child(TreeNode::new("first"))
            .with_child(TreeNode::new("second").with_child(TreeNode::new("leaf")))
    }

    #[test]
    fn test_tree_format_single() {
        let output = TreeFormatter::new().format(&TreeNode::new("alone"));
        assert_eq!(output, "alone\n");
    }

    #[test]
    fn test_tree_format_hierarchy_ascii() {
        let formatter =
            TreeFormatter::with_options(TreeFormatOptions::default().with_style(TreeStyle::Ascii));
        let output = formatter.format(&sample());

        assert_eq!(
            output,
            "root open=false\n+-- first\n`-- second\n|  `-- leaf\n"
        );
    }

    #[test]
    fn test_tree_format_minimal_hides_details() {
        let output = TreeFormatter::with_options(TreeFormatOptions::minimal()).format(&sample());
        assert!(output.starts_with("root\n"));
        assert!(!output.contains("open="));
    }

    #[test]
    fn test_tree_format_max_depth() {
        let options = TreeFormatOptions {
            max_depth: Some(1),
            ..Default::default()
        };
        let output = TreeFormatter::with_options(options).format(&sample());
        assert!(output.contains("second"));
        assert!(!output.contains("leaf"));
    }

    #[test]
    fn test_empty_label() {
        let output = TreeFormatter::new().format(&TreeNode::new(""));
        assert_eq!(output, "(empty)\n");
    }

    #[test]
    fn test_perf_span() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let _span = PerfSpan::new("test_operation");
    }
}
