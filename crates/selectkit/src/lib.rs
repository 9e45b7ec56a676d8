//! Selection-state projection for select dropdowns.
//!
//! This crate implements the logic behind a select dropdown, independent of
//! any rendering layer:
//!
//! - **Options**: Arbitrary JSON records with configurable value/text keys
//! - **Modes**: Single selection, or checkbox multi-selection
//! - **Reducers**: Store a derived identifier instead of the raw value
//! - **Search**: Case-insensitive text filtering of the clickable options
//! - **Clear button**: Reset to `null` (single) or `[]` (multi)
//! - **Open state**: A two-state machine that reports dismissal as `blur`
//!
//! The select is a *controlled component*: it never owns its committed value.
//! User intents produce an [`Outcome`] (or, on the stateful [`Select`], a
//! signal emission) proposing the next value, and the owner commits it.
//!
//! # Example
//!
//! ```
//! use selectkit::{OptionRecord, Select, SelectValue};
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//!
//! let select = Select::new(vec![
//!     OptionRecord::value_text("Value1", "Text1"),
//!     OptionRecord::value_text("Value2", "Text2"),
//! ])
//! .with_placeholder("Pick one")
//! .with_clear_button(true);
//!
//! let proposed = Arc::new(Mutex::new(None));
//! let proposed_clone = proposed.clone();
//! select.input.connect(move |value| {
//!     *proposed_clone.lock() = Some(value.clone());
//! });
//!
//! select.click_option(1);
//! assert_eq!(*proposed.lock(), Some(SelectValue::from("Value2")));
//! assert_eq!(select.view().label, "Pick one"); // not committed yet
//!
//! select.set_value("Value2");
//! assert_eq!(select.view().label, "Text2");
//! ```

pub mod config;
mod error;
pub mod model;
pub mod open_state;
pub mod outcome;
pub mod projector;
pub mod value;
pub mod view;
pub mod widget;

pub use config::{Reducer, SelectConfig, SelectProps, SelectionMode, Size};
pub use error::{Error, Result};
pub use model::{OptionList, OptionRecord};
pub use open_state::{Icon, OpenState};
pub use outcome::{Emission, Outcome};
pub use projector::SelectionProjector;
pub use value::SelectValue;
pub use view::{CheckboxView, OptionView, SelectView};
pub use widget::{Intent, Select};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{SelectConfig, SelectProps, SelectionMode, Size};
    pub use crate::model::{OptionList, OptionRecord};
    pub use crate::open_state::OpenState;
    pub use crate::outcome::{Emission, Outcome};
    pub use crate::projector::SelectionProjector;
    pub use crate::value::SelectValue;
    pub use crate::view::SelectView;
    pub use crate::widget::{Intent, Select};
    pub use selectkit_core::{ConnectionId, Signal};
}
