//! Ordered, immutable rule registry.

use crate::core::{Action, Rule, State};

/// Ordered collection of rules, fixed once a machine is built.
///
/// Order is part of the contract: when several rules accept the same
/// (state, action) pair, the one declared first wins.
pub struct Registry<S: State, A: Action> {
    rules: Vec<Rule<S, A>>,
}

impl<S: State, A: Action> Registry<S, A> {
    pub(crate) fn new(rules: Vec<Rule<S, A>>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[Rule<S, A>] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule<S, A>> {
        self.rules.iter()
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule<S, A>> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    /// First rule, in declaration order, whose domain covers the pair (pure)
    pub fn first_match(&self, state: &S, action: &A) -> Option<&Rule<S, A>> {
        let state_tag = state.tag();
        let action_tag = action.tag();
        self.rules
            .iter()
            .find(|rule| rule.accepts_tags(state_tag, action_tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{action_enum, state_enum};

    state_enum! {
        enum Phase {
            Draft,
            Review,
            Published,
        }
        tag: PhaseTag
        final: [Published]
    }

    action_enum! {
        enum Edit {
            Submit,
            Approve,
        }
        tag: EditTag
    }

    fn rule(name: &str, from: &[PhaseTag], on: &[EditTag], to: PhaseTag) -> Rule<Phase, Edit> {
        Rule::<Phase, Edit>::named(name)
            .from(from.iter().copied())
            .on(on.iter().copied())
            .to([to])
            .logic(|state, _| state.clone())
            .build()
            .unwrap()
    }

    fn registry() -> Registry<Phase, Edit> {
        Registry::new(vec![
            rule("submit", &[PhaseTag::Draft], &[EditTag::Submit], PhaseTag::Review),
            rule(
                "fast_track",
                &[PhaseTag::Draft, PhaseTag::Review],
                &[EditTag::Submit, EditTag::Approve],
                PhaseTag::Published,
            ),
            rule("approve", &[PhaseTag::Review], &[EditTag::Approve], PhaseTag::Published),
        ])
    }

    #[test]
    fn first_match_prefers_earlier_rule() {
        let registry = registry();

        let rule = registry.first_match(&Phase::Draft, &Edit::Submit).unwrap();
        assert_eq!(rule.name(), "submit");

        // "approve" also accepts this pair but is declared after "fast_track".
        let rule = registry.first_match(&Phase::Review, &Edit::Approve).unwrap();
        assert_eq!(rule.name(), "fast_track");
    }

    #[test]
    fn first_match_returns_none_outside_every_domain() {
        let registry = registry();

        assert!(registry
            .first_match(&Phase::Published, &Edit::Submit)
            .is_none());
    }

    #[test]
    fn get_finds_rules_by_name() {
        let registry = registry();

        assert_eq!(registry.get("approve").map(Rule::name), Some("approve"));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let registry = registry();
        let names: Vec<&str> = registry.iter().map(Rule::name).collect();

        assert_eq!(names, vec!["submit", "fast_track", "approve"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }
}
