//! Results of user intents.
//!
//! The select never stores its committed value. Every intent instead yields
//! an [`Outcome`]: the value it proposes and the notifications to deliver,
//! in order. The owner decides whether to commit.

use crate::value::SelectValue;

/// A notification produced by an intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    /// A new committed value is proposed.
    Input(SelectValue),
    /// The clear button was activated.
    Clear,
    /// The open dropdown was dismissed.
    Blur,
}

/// What an intent asks the owner to do.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    /// The proposed next value, if the intent changes it.
    pub next_value: Option<SelectValue>,
    /// Notifications to emit, in order.
    pub emissions: Vec<Emission>,
}

impl Outcome {
    /// An outcome that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// An outcome proposing `value` through a single `input` emission.
    pub fn input(value: SelectValue) -> Self {
        Self {
            next_value: Some(value.clone()),
            emissions: vec![Emission::Input(value)],
        }
    }

    /// An outcome carrying only a `blur` emission.
    pub fn blur() -> Self {
        Self {
            next_value: None,
            emissions: vec![Emission::Blur],
        }
    }

    /// Append an emission using builder pattern.
    pub fn then(mut self, emission: Emission) -> Self {
        self.emissions.push(emission);
        self
    }

    /// Whether the outcome neither proposes a value nor emits anything.
    pub fn is_noop(&self) -> bool {
        self.next_value.is_none() && self.emissions.is_empty()
    }

    /// Number of emissions matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&Emission) -> bool) -> usize {
        self.emissions.iter().filter(|e| predicate(e)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_constructors() {
        assert!(Outcome::none().is_noop());

        let outcome = Outcome::input(SelectValue::from("V1"));
        assert_eq!(outcome.next_value, Some(SelectValue::from("V1")));
        assert_eq!(outcome.emissions, vec![Emission::Input(SelectValue::from("V1"))]);

        let outcome = Outcome::input(SelectValue::Empty).then(Emission::Clear);
        assert_eq!(outcome.count(|e| matches!(e, Emission::Clear)), 1);
        assert!(!Outcome::blur().is_noop());
    }
}
