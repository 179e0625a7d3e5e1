//! Built machines and the dispatcher.
//!
//! A `Machine` owns an immutable `Registry` behind an `Arc`. Cloning a
//! machine is cheap and clones share the same rules, so one definition
//! can be handed to any number of threads once it is built.
//!
//! Every call is a synchronous lookup-and-invoke. The machine keeps no
//! current state; callers pass the state in and get the next one back.

mod config;
mod registry;

pub use config::{DestinationCheck, MachineConfig};
pub use registry::Registry;

use crate::builder::MachineBuilder;
use crate::core::{tag_names, Action, Rule, State, TransitionError};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A defined machine: a name, an ordered rule registry and configuration.
pub struct Machine<S: State, A: Action> {
    name: Arc<str>,
    registry: Arc<Registry<S, A>>,
    config: MachineConfig,
}

impl<S: State, A: Action> Machine<S, A> {
    pub(crate) fn new(name: String, registry: Registry<S, A>, config: MachineConfig) -> Self {
        Self {
            name: name.into(),
            registry: Arc::new(registry),
            config,
        }
    }

    /// Start declaring a machine.
    pub fn builder(name: impl Into<String>) -> MachineBuilder<S, A> {
        MachineBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry<S, A> {
        &self.registry
    }

    /// All rules in declaration order (pure)
    pub fn transition_table(&self) -> &[Rule<S, A>] {
        self.registry.rules()
    }

    /// Look up a rule by name (pure)
    pub fn rule(&self, name: &str) -> Option<&Rule<S, A>> {
        self.registry.get(name)
    }

    /// Resolve the first rule accepting `(state, action)` and apply it.
    ///
    /// Fails with `NoMatchingTransition` when no rule covers the pair.
    /// Errors raised by the rule's logic are never caught: they come back
    /// as `LogicFailed`, which names the rule and carries the original
    /// error untouched as its `source`.
    pub fn run(&self, state: &S, action: &A) -> Result<S, TransitionError> {
        let Some(rule) = self.registry.first_match(state, action) else {
            if self.config.log_dispatch {
                debug!(
                    machine = %self.name,
                    state = state.name(),
                    action = action.name(),
                    "no matching transition"
                );
            }
            return Err(TransitionError::NoMatchingTransition {
                machine: self.name.to_string(),
                state: format!("{state:?}"),
                action: format!("{action:?}"),
            });
        };

        if self.config.log_dispatch {
            debug!(
                machine = %self.name,
                rule = rule.name(),
                state = state.name(),
                action = action.name(),
                "resolved rule"
            );
        }
        self.execute(rule, state, action)
    }

    /// Apply the named rule directly, bypassing resolution.
    ///
    /// The rule still validates that the pair lies inside its domain.
    pub fn invoke(&self, rule: &str, state: &S, action: &A) -> Result<S, TransitionError> {
        let resolved = self
            .registry
            .get(rule)
            .ok_or_else(|| TransitionError::UnregisteredRule {
                machine: self.name.to_string(),
                rule: rule.to_string(),
            })?;

        self.execute(resolved, state, action)
    }

    /// Feed a sequence of actions through `run`, stopping at the first error.
    pub fn run_all<'a, I>(&self, initial: S, actions: I) -> Result<S, TransitionError>
    where
        I: IntoIterator<Item = &'a A>,
    {
        actions
            .into_iter()
            .try_fold(initial, |state, action| self.run(&state, action))
    }

    fn execute(&self, rule: &Rule<S, A>, state: &S, action: &A) -> Result<S, TransitionError> {
        let next = rule.apply(state, action)?;
        self.check_destination(rule, &next)?;
        Ok(next)
    }

    fn check_destination(&self, rule: &Rule<S, A>, next: &S) -> Result<(), TransitionError> {
        if rule.produces(next) {
            return Ok(());
        }

        match self.config.destination_check {
            DestinationCheck::Off => Ok(()),
            DestinationCheck::Warn => {
                warn!(
                    machine = %self.name,
                    rule = rule.name(),
                    produced = next.name(),
                    "rule produced an undeclared destination"
                );
                Ok(())
            }
            DestinationCheck::Enforce => Err(TransitionError::UndeclaredDestination {
                rule: rule.name().to_string(),
                got: next.name(),
                expected: tag_names(rule.destinations()),
            }),
        }
    }
}

impl<S: State, A: Action> Clone for Machine<S, A> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            registry: Arc::clone(&self.registry),
            config: self.config.clone(),
        }
    }
}

impl<S: State, A: Action> fmt::Debug for Machine<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("name", &self.name)
            .field("rules", &self.registry.rules())
            .field("config", &self.config)
            .finish()
    }
}
