//! Core systems for selectkit.
//!
//! This crate provides the notification and state plumbing that the select
//! widget builds on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous notifications
//! - **Property System**: Reactive cells with change detection
//! - **Logging**: Tracing targets and tree-shaped debug output
//!
//! # Signal/Slot Example
//!
//! ```
//! use selectkit_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use selectkit_core::{Property, Signal};
//!
//! // A reactive flag with change notification
//! struct Toggle {
//!     on: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn flip(&self) {
//!         let next = !self.on.get();
//!         if self.on.set(next) {
//!             self.toggled.emit(next);
//!         }
//!     }
//! }
//!
//! let toggle = Toggle { on: Property::new(false), toggled: Signal::new() };
//! toggle.flip();
//! assert!(toggle.on.get());
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::{PerfSpan, TreeFormatOptions, TreeFormatter, TreeNode, TreeStyle};
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionId, Signal};
