//! Definition errors for rules and machines.

use thiserror::Error;

/// A problem with a single rule declaration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleDefect {
    #[error("Rule '{rule}' accepts no states. Call .from([..]) with at least one tag")]
    EmptySources { rule: String },

    #[error("Rule '{rule}' accepts no actions. Call .on([..]) with at least one tag")]
    EmptyActions { rule: String },

    #[error("Rule '{rule}' declares no destinations. Call .to([..]) with at least one tag")]
    EmptyDestinations { rule: String },

    #[error("Rule '{rule}' has no logic. Call .logic(f) or .try_logic(f)")]
    MissingLogic { rule: String },

    #[error("Rule '{rule}' is declared more than once")]
    DuplicateName { rule: String },
}

impl RuleDefect {
    /// Name of the offending rule.
    pub fn rule(&self) -> &str {
        match self {
            Self::EmptySources { rule }
            | Self::EmptyActions { rule }
            | Self::EmptyDestinations { rule }
            | Self::MissingLogic { rule }
            | Self::DuplicateName { rule } => rule,
        }
    }
}

/// Errors that can occur when defining a machine.
///
/// These are programmer errors: a machine that fails to build should
/// stop the program at startup rather than be retried.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionError {
    #[error("Machine '{machine}' has malformed rules: {}", join_defects(.defects))]
    Malformed {
        machine: String,
        defects: Vec<RuleDefect>,
    },
}

impl DefinitionError {
    /// All rule defects carried by this error.
    pub fn defects(&self) -> &[RuleDefect] {
        match self {
            Self::Malformed { defects, .. } => defects,
        }
    }

    pub fn machine(&self) -> &str {
        match self {
            Self::Malformed { machine, .. } => machine,
        }
    }
}

fn join_defects(defects: &[RuleDefect]) -> String {
    defects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
