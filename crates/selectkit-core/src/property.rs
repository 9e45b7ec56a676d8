//! Property system for selectkit.
//!
//! Properties are small reactive cells with change detection. When a
//! property's value actually changes, the owner emits the matching
//! notification signal; setting an equal value is a no-op.
//!
//! # Example
//!
//! ```
//! use selectkit_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn set_value(&self, new_value: i32) {
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//!
//! let counter = Counter { value: Property::new(0), value_changed: Signal::new() };
//! counter.set_value(3);
//! assert_eq!(counter.value.get(), 3);
//! ```

use parking_lot::RwLock;

use crate::logging::targets;

/// A reactive cell that reports whether a write changed it.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }

    /// Get a read-only view of this property.
    pub fn read_only(&self) -> ReadOnlyProperty<'_, T> {
        ReadOnlyProperty { inner: self }
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current == value {
            return false;
        }
        *current = value;
        tracing::trace!(target: targets::PROPERTY, "property changed");
        true
    }
}

/// A read-only view of a property, for exposing state without its setter.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<T: Clone> ReadOnlyProperty<'_, T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }
}
