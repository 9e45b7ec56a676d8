//! The open/closed state machine of the dropdown.

use crate::outcome::Outcome;

/// Whether the dropdown content is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    /// Content hidden (initial state).
    #[default]
    Closed,
    /// Content shown.
    Open,
}

/// The chevron shown on the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ChevronDown,
    ChevronUp,
}

impl Icon {
    /// The icon token handed to the renderer.
    pub fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::ChevronUp => "chevron-up",
        }
    }
}

impl OpenState {
    /// Whether the dropdown is open.
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Transition for a click on the trigger.
    ///
    /// Opening is silent; closing an open dropdown emits `blur` once.
    pub fn click_trigger(self) -> (Self, Outcome) {
        match self {
            Self::Closed => (Self::Open, Outcome::none()),
            Self::Open => (Self::Closed, Outcome::blur()),
        }
    }

    /// Transition for an externally requested close (e.g. focus loss).
    pub fn close(self) -> (Self, Outcome) {
        match self {
            Self::Closed => (Self::Closed, Outcome::none()),
            Self::Open => (Self::Closed, Outcome::blur()),
        }
    }

    /// The trigger icon for this state.
    pub fn icon(self) -> Icon {
        match self {
            Self::Closed => Icon::ChevronDown,
            Self::Open => Icon::ChevronUp,
        }
    }

    /// Whether the dropdown content is hidden.
    pub fn content_hidden(self) -> bool {
        !self.is_open()
    }
}
