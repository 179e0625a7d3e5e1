//! Builder for declaring transition rules.

use crate::builder::error::RuleDefect;
use crate::core::{Action, Logic, LogicError, Rule, State};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for declaring a rule with a fluent API.
///
/// Tag lists are de-duplicated as they are added; the first occurrence
/// keeps its position.
pub struct RuleBuilder<S: State, A: Action> {
    name: String,
    sources: Vec<S::Tag>,
    actions: Vec<A::Tag>,
    destinations: Vec<S::Tag>,
    annotation: Option<String>,
    logic: Option<Logic<S, A>>,
}

impl<S: State, A: Action> RuleBuilder<S, A> {
    /// Create a new rule builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
            actions: Vec::new(),
            destinations: Vec::new(),
            annotation: None,
            logic: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add accepted state variants (required).
    pub fn from(mut self, tags: impl IntoIterator<Item = S::Tag>) -> Self {
        extend_unique(&mut self.sources, tags);
        self
    }

    /// Add accepted action variants (required).
    pub fn on(mut self, tags: impl IntoIterator<Item = A::Tag>) -> Self {
        extend_unique(&mut self.actions, tags);
        self
    }

    /// Add possible destination variants (required).
    pub fn to(mut self, tags: impl IntoIterator<Item = S::Tag>) -> Self {
        extend_unique(&mut self.destinations, tags);
        self
    }

    /// Attach a human-readable note, shown on exported edges (optional).
    pub fn annotate(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Set infallible logic (required, or use `try_logic`).
    pub fn logic<F>(mut self, f: F) -> Self
    where
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        let logic: Logic<S, A> =
            Arc::new(move |state: &S, action: &A| Ok::<S, LogicError>(f(state, action)));
        self.logic = Some(logic);
        self
    }

    /// Set fallible logic (required, or use `logic`).
    pub fn try_logic<F>(mut self, f: F) -> Self
    where
        F: Fn(&S, &A) -> Result<S, LogicError> + Send + Sync + 'static,
    {
        let logic: Logic<S, A> = Arc::new(f);
        self.logic = Some(logic);
        self
    }

    /// Check the declaration, accumulating ALL defects.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<RuleDefect>> {
        let checks = vec![
            require(!self.sources.is_empty(), || RuleDefect::EmptySources {
                rule: self.name.clone(),
            }),
            require(!self.actions.is_empty(), || RuleDefect::EmptyActions {
                rule: self.name.clone(),
            }),
            require(!self.destinations.is_empty(), || {
                RuleDefect::EmptyDestinations {
                    rule: self.name.clone(),
                }
            }),
            require(self.logic.is_some(), || RuleDefect::MissingLogic {
                rule: self.name.clone(),
            }),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build a single rule outside a machine.
    /// Returns the first defect found, in declaration-call order.
    ///
    /// `MachineBuilder::build` does not go through here: it runs `validate`
    /// over every declaration first, then converts them all.
    pub fn build(self) -> Result<Rule<S, A>, RuleDefect> {
        if self.sources.is_empty() {
            return Err(RuleDefect::EmptySources { rule: self.name });
        }
        if self.actions.is_empty() {
            return Err(RuleDefect::EmptyActions { rule: self.name });
        }
        if self.destinations.is_empty() {
            return Err(RuleDefect::EmptyDestinations { rule: self.name });
        }
        let rule = self.name.clone();
        self.into_rule().ok_or(RuleDefect::MissingLogic { rule })
    }

    /// Convert a validated declaration. `None` only when logic is missing.
    pub(crate) fn into_rule(self) -> Option<Rule<S, A>> {
        Some(Rule {
            name: self.name,
            sources: self.sources,
            actions: self.actions,
            destinations: self.destinations,
            annotation: self.annotation,
            logic: self.logic?,
        })
    }
}

fn require<F>(ok: bool, defect: F) -> Validation<(), NonEmptyVec<RuleDefect>>
where
    F: FnOnce() -> RuleDefect,
{
    if ok {
        Validation::success(())
    } else {
        Validation::fail(defect())
    }
}

fn extend_unique<T: PartialEq>(target: &mut Vec<T>, items: impl IntoIterator<Item = T>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}
