//! Builder for constructing machines.

use crate::builder::error::{DefinitionError, RuleDefect};
use crate::builder::rule::RuleBuilder;
use crate::core::{Action, State};
use crate::machine::{Machine, MachineConfig, Registry};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{info, warn};

/// Builder for constructing machines with a fluent API.
///
/// Rules are kept in the order they are added. Building validates every
/// rule and reports all defects at once.
pub struct MachineBuilder<S: State, A: Action> {
    name: String,
    rules: Vec<RuleBuilder<S, A>>,
    config: MachineConfig,
}

impl<S: State, A: Action> MachineBuilder<S, A> {
    /// Create a new builder for a machine with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            config: MachineConfig::default(),
        }
    }

    /// Append a rule declaration.
    pub fn rule(mut self, rule: RuleBuilder<S, A>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append several rule declarations, in order.
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBuilder<S, A>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Set the runtime configuration (optional).
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Check every declaration, accumulating ALL defects.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<RuleDefect>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<RuleDefect>>> =
            self.rules.iter().map(RuleBuilder::validate).collect();

        // Direct invocation is by name, so names must be unique.
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for rule in &self.rules {
            let name = rule.name();
            let repeated = !seen.insert(name);
            if repeated && reported.insert(name) {
                checks.push(Validation::fail(RuleDefect::DuplicateName {
                    rule: name.to_string(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the machine.
    /// Returns an error listing every defect if any rule is malformed.
    ///
    /// A machine without rules is valid; every `run` on it fails with
    /// `NoMatchingTransition`.
    pub fn build(self) -> Result<Machine<S, A>, DefinitionError> {
        if let Validation::Failure(defects) = self.validate() {
            return Err(DefinitionError::Malformed {
                machine: self.name,
                defects: defects.iter().cloned().collect(),
            });
        }

        // Validated above, so every declaration converts.
        let rules: Vec<_> = self
            .rules
            .into_iter()
            .filter_map(RuleBuilder::into_rule)
            .collect();

        if rules.is_empty() {
            warn!(machine = %self.name, "machine defined without rules");
        } else {
            info!(machine = %self.name, rules = rules.len(), "machine defined");
        }
        Ok(Machine::new(self.name, Registry::new(rules), self.config))
    }
}
