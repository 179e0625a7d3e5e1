//! Transition rules and the validating invoker.

use crate::builder::RuleBuilder;
use crate::core::variant::{Action, State, Tag};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Error type returned by fallible rule logic.
pub type LogicError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for rule logic functions.
pub type Logic<S, A> = Arc<dyn Fn(&S, &A) -> Result<S, LogicError> + Send + Sync>;

/// Errors that can occur while resolving or invoking a rule
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("Invalid transition from {state} with {action} in '{machine}'")]
    NoMatchingTransition {
        machine: String,
        state: String,
        action: String,
    },

    #[error("Invalid state {got} for {rule}, expected one of {expected:?}")]
    InvalidState {
        rule: String,
        got: &'static str,
        expected: Vec<&'static str>,
    },

    #[error("Invalid action {got} for {rule}, expected one of {expected:?}")]
    InvalidAction {
        rule: String,
        got: &'static str,
        expected: Vec<&'static str>,
    },

    #[error("Rule '{rule}' not found in '{machine}'")]
    UnregisteredRule { machine: String, rule: String },

    #[error("Rule {rule} produced {got}, declared destinations are {expected:?}")]
    UndeclaredDestination {
        rule: String,
        got: &'static str,
        expected: Vec<&'static str>,
    },

    #[error("Rule {rule} failed: {source}")]
    LogicFailed {
        rule: String,
        #[source]
        source: LogicError,
    },
}

impl TransitionError {
    /// Whether the caller may reasonably handle this error.
    ///
    /// `UnregisteredRule` means the machine was asked for a rule it never
    /// declared; everything else is an expected outcome of bad input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::UnregisteredRule { .. })
    }
}

/// A named transition rule.
///
/// A rule accepts a set of state variants and a set of action variants,
/// and may produce any of its declared destination variants. Tag lists
/// keep declaration order and never hold duplicates.
pub struct Rule<S: State, A: Action> {
    pub(crate) name: String,
    pub(crate) sources: Vec<S::Tag>,
    pub(crate) actions: Vec<A::Tag>,
    pub(crate) destinations: Vec<S::Tag>,
    pub(crate) annotation: Option<String>,
    pub(crate) logic: Logic<S, A>,
}

impl<S: State, A: Action> Rule<S, A> {
    /// Start declaring a rule with the given name.
    pub fn named(name: impl Into<String>) -> RuleBuilder<S, A> {
        RuleBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sources(&self) -> &[S::Tag] {
        &self.sources
    }

    pub fn actions(&self) -> &[A::Tag] {
        &self.actions
    }

    pub fn destinations(&self) -> &[S::Tag] {
        &self.destinations
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Check whether a pair of tags falls inside this rule's domain (pure)
    pub fn accepts_tags(&self, state: S::Tag, action: A::Tag) -> bool {
        self.actions.contains(&action) && self.sources.contains(&state)
    }

    /// Check whether a (state, action) pair falls inside this rule's domain (pure)
    pub fn accepts(&self, state: &S, action: &A) -> bool {
        self.accepts_tags(state.tag(), action.tag())
    }

    /// Check whether `state` is one of the declared destinations (pure)
    pub fn produces(&self, state: &S) -> bool {
        self.destinations.contains(&state.tag())
    }

    /// Validate the pair against this rule's domain, then run the logic.
    ///
    /// The state is checked before the action. Errors raised by the logic
    /// come back as `LogicFailed` with the original error as source.
    pub fn apply(&self, state: &S, action: &A) -> Result<S, TransitionError> {
        self.check_domain(state, action)?;

        trace!(rule = %self.name, state = ?state, action = ?action, "invoking rule");
        (self.logic)(state, action).map_err(|source| TransitionError::LogicFailed {
            rule: self.name.clone(),
            source,
        })
    }

    fn check_domain(&self, state: &S, action: &A) -> Result<(), TransitionError> {
        let state_tag = state.tag();
        if !self.sources.contains(&state_tag) {
            return Err(TransitionError::InvalidState {
                rule: self.name.clone(),
                got: state_tag.name(),
                expected: tag_names(&self.sources),
            });
        }

        let action_tag = action.tag();
        if !self.actions.contains(&action_tag) {
            return Err(TransitionError::InvalidAction {
                rule: self.name.clone(),
                got: action_tag.name(),
                expected: tag_names(&self.actions),
            });
        }

        Ok(())
    }
}

pub(crate) fn tag_names<T: Tag>(tags: &[T]) -> Vec<&'static str> {
    tags.iter().map(Tag::name).collect()
}

impl<S: State, A: Action> Clone for Rule<S, A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            sources: self.sources.clone(),
            actions: self.actions.clone(),
            destinations: self.destinations.clone(),
            annotation: self.annotation.clone(),
            logic: Arc::clone(&self.logic),
        }
    }
}

impl<S: State, A: Action> fmt::Debug for Rule<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("sources", &tag_names(&self.sources))
            .field("actions", &tag_names(&self.actions))
            .field("destinations", &tag_names(&self.destinations))
            .field("annotation", &self.annotation)
            .finish_non_exhaustive()
    }
}
