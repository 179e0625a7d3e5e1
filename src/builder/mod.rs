//! Builder API for declaring rules and machines.
//!
//! Rules are declared explicitly with fluent builders; a machine is an
//! ordered list of them. Declaration order is kept exactly because the
//! dispatcher resolves overlapping rules by picking the earliest one.

pub mod error;
pub mod machine;
pub mod macros;
pub mod rule;

pub use error::{DefinitionError, RuleDefect};
pub use machine::MachineBuilder;
pub use rule::RuleBuilder;

use crate::core::{Action, State};
use crate::machine::Machine;

/// Define a machine from an ordered sequence of rule declarations.
///
/// Equivalent to `MachineBuilder::new(name).rules(rules).build()`.
///
/// # Example
///
/// ```
/// use typemata::builder::define_machine;
/// use typemata::core::Rule;
/// use typemata::{action_enum, state_enum};
///
/// state_enum! {
///     enum Toggle {
///         Off,
///         On,
///     }
///     tag: ToggleTag
/// }
///
/// action_enum! {
///     enum Press {
///         Button,
///     }
///     tag: PressTag
/// }
///
/// let machine = define_machine(
///     "Toggle",
///     vec![
///         Rule::<Toggle, Press>::named("switch_on")
///             .from([ToggleTag::Off])
///             .on([PressTag::Button])
///             .to([ToggleTag::On])
///             .logic(|_, _| Toggle::On),
///         Rule::named("switch_off")
///             .from([ToggleTag::On])
///             .on([PressTag::Button])
///             .to([ToggleTag::Off])
///             .logic(|_, _| Toggle::Off),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(machine.run(&Toggle::Off, &Press::Button).unwrap(), Toggle::On);
/// ```
pub fn define_machine<S, A, I>(
    name: impl Into<String>,
    rules: I,
) -> Result<Machine<S, A>, DefinitionError>
where
    S: State,
    A: Action,
    I: IntoIterator<Item = RuleBuilder<S, A>>,
{
    MachineBuilder::new(name).rules(rules).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rule;
    use crate::{action_enum, state_enum};

    state_enum! {
        enum Gate {
            Closed,
            Open,
        }
        tag: GateTag
    }

    action_enum! {
        enum Push {
            Coin,
            Walk,
        }
        tag: PushTag
    }

    #[test]
    fn define_machine_keeps_declaration_order() {
        let machine = define_machine(
            "Turnstile",
            vec![
                Rule::<Gate, Push>::named("unlock")
                    .from([GateTag::Closed])
                    .on([PushTag::Coin])
                    .to([GateTag::Open])
                    .logic(|_, _| Gate::Open),
                Rule::named("lock")
                    .from([GateTag::Open])
                    .on([PushTag::Walk])
                    .to([GateTag::Closed])
                    .logic(|_, _| Gate::Closed),
            ],
        )
        .unwrap();

        let names: Vec<&str> = machine.transition_table().iter().map(Rule::name).collect();
        assert_eq!(names, vec!["unlock", "lock"]);
        assert_eq!(machine.name(), "Turnstile");
    }

    #[test]
    fn define_machine_accepts_empty_sequence() {
        let machine = define_machine::<Gate, Push, _>("Empty", Vec::new()).unwrap();

        assert!(machine.transition_table().is_empty());
        assert!(machine.export_edges().is_empty());
        for (state, action) in [(Gate::Closed, Push::Coin), (Gate::Open, Push::Walk)] {
            let err = machine.run(&state, &action).unwrap_err();
            assert!(matches!(
                err,
                crate::core::TransitionError::NoMatchingTransition { .. }
            ));
        }
    }
}
